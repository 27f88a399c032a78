
use crate::contracts::resource_descriptor::ResourceDescriptor;
use crate::services::observability::ProbeObserver;
use async_trait::async_trait;

/// Forwards every probe outcome to each of the composed observers, in order
#[derive(Default)]
pub struct ComposedProbeObserver {
    observers: Vec<Box<dyn ProbeObserver>>,
}

impl ComposedProbeObserver {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub fn add_observer(mut self, observer: Box<dyn ProbeObserver>) -> Self {
        self.observers.push(observer);
        self
    }
}

#[async_trait]
impl ProbeObserver for ComposedProbeObserver {
    async fn on_probe_failed(&self, descriptor: &ResourceDescriptor, error: &anyhow::Error) {
        for observer in &self.observers {
            observer.on_probe_failed(descriptor, error).await;
        }
    }

    async fn on_capability_detected(&self, descriptor: &ResourceDescriptor) {
        for observer in &self.observers {
            observer.on_capability_detected(descriptor).await;
        }
    }
}
