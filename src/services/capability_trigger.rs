use crate::contracts::resource_descriptor::ResourceDescriptor;
use async_trait::async_trait;
use std::sync::Arc;

/// A one-time callback executed when a watched capability is first confirmed present.
///
/// Triggers run sequentially on the detection task. A panicking trigger terminates the
/// detection task of its detector.
#[async_trait]
pub trait CapabilityTrigger: Send + Sync {
    async fn on_capability_detected(&self, descriptor: &ResourceDescriptor);
}

pub type Trigger = Arc<dyn CapabilityTrigger>;

#[async_trait]
impl<F> CapabilityTrigger for F
where
    F: Fn(&ResourceDescriptor) + Send + Sync,
{
    async fn on_capability_detected(&self, descriptor: &ResourceDescriptor) {
        self(descriptor)
    }
}

/// Wraps a closure into a shareable trigger
pub fn from_fn<F>(callback: F) -> Trigger
where
    F: Fn(&ResourceDescriptor) + Send + Sync + 'static,
{
    Arc::new(callback)
}
