use std::time::Duration;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Runtime configuration of a detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    pub poll_interval: Duration,

    /// Publish every detected descriptor on the notification channel
    pub publish_detections: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            poll_interval: DEFAULT_POLL_INTERVAL,
            publish_detections: true,
        }
    }
}
