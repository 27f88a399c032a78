
use crate::services::detector::detector_config::DetectorConfig;
use duration_string::DurationString;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DetectorSettings {
    pub poll_interval: DurationString,

    #[serde(default = "default_publish_detections")]
    pub publish_detections: bool,
}

fn default_publish_detections() -> bool {
    true
}

impl From<&DetectorSettings> for DetectorConfig {
    fn from(settings: &DetectorSettings) -> Self {
        DetectorConfig {
            poll_interval: settings.poll_interval.into(),
            publish_detections: settings.publish_detections,
        }
    }
}
