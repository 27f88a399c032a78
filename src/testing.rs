pub mod detector_context;
pub mod scripted_capability_query;
