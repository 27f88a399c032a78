use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle usage errors of a detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorError {
    AlreadyStarted,
    Stopped,
    InvalidInterval,
    NoRuntime,
}

impl Display for DetectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectorError::AlreadyStarted => write!(f, "Detector is already running"),
            DetectorError::Stopped => write!(f, "Detector was stopped and cannot be restarted"),
            DetectorError::InvalidInterval => write!(f, "Poll interval must be greater than zero"),
            DetectorError::NoRuntime => write!(f, "Detector must be started from within a Tokio runtime"),
        }
    }
}

impl Error for DetectorError {}
