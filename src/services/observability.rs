pub mod composed_probe_observer;
pub mod logging_probe_observer;

use crate::contracts::resource_descriptor::ResourceDescriptor;
use async_trait::async_trait;

/// Observes the outcome of capability probes without affecting detection
#[async_trait]
pub trait ProbeObserver: Send + Sync {
    /// Called when the query for a descriptor failed; the probe counts as "not present"
    async fn on_probe_failed(&self, descriptor: &ResourceDescriptor, error: &anyhow::Error);

    /// Called after the trigger of a newly detected capability returned
    async fn on_capability_detected(&self, descriptor: &ResourceDescriptor);
}
