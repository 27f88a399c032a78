pub mod detector_settings;
