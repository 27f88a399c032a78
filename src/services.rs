pub mod capability_query;
pub mod capability_state;
pub mod capability_trigger;
pub mod detector;
pub mod observability;
pub mod trigger_registry;
