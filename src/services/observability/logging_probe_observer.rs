use crate::contracts::resource_descriptor::ResourceDescriptor;
use crate::services::observability::ProbeObserver;
use async_trait::async_trait;
use log::{info, warn};

pub struct LoggingProbeObserver;

#[async_trait]
impl ProbeObserver for LoggingProbeObserver {
    async fn on_probe_failed(&self, descriptor: &ResourceDescriptor, error: &anyhow::Error) {
        warn!(
            group_version = descriptor.group_version().as_str(),
            capability = descriptor.capability_id();
            "Failed to probe capability {}: {}", descriptor, error);
    }

    async fn on_capability_detected(&self, descriptor: &ResourceDescriptor) {
        info!(
            group_version = descriptor.group_version().as_str(),
            capability = descriptor.capability_id();
            "Capability detected: {}", descriptor);
    }
}
