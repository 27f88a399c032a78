
use crate::contracts::resource_descriptor::ResourceDescriptor;
use crate::services::capability_trigger::Trigger;
use log::debug;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Maps watched resource descriptors to their triggers.
/// Registering a descriptor twice keeps the most recent trigger.
#[derive(Default)]
pub struct TriggerRegistry {
    triggers: RwLock<HashMap<ResourceDescriptor, Trigger>>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        TriggerRegistry {
            triggers: RwLock::new(HashMap::new()),
        }
    }

    pub async fn add_trigger(&self, descriptor: ResourceDescriptor, trigger: Trigger) {
        let mut write_guard = self.triggers.write().await;
        debug!(group_version = descriptor.group_version().as_str(), kind = descriptor.kind(); "Registering capability trigger");
        if (*write_guard).insert(descriptor, trigger).is_some() {
            debug!("Replaced a previously registered trigger");
        }
    }

    /// Registers the same trigger for every descriptor
    pub async fn add_triggers<I>(&self, descriptors: I, trigger: Trigger)
    where
        I: IntoIterator<Item = ResourceDescriptor>,
    {
        for descriptor in descriptors {
            self.add_trigger(descriptor, trigger.clone()).await;
        }
    }

    pub async fn add_triggers_from_map(&self, triggers: HashMap<ResourceDescriptor, Trigger>) {
        for (descriptor, trigger) in triggers {
            self.add_trigger(descriptor, trigger).await;
        }
    }

    pub async fn contains(&self, descriptor: &ResourceDescriptor) -> bool {
        let read_guard = self.triggers.read().await;
        (*read_guard).contains_key(descriptor)
    }

    pub async fn len(&self) -> usize {
        self.triggers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.triggers.read().await.is_empty()
    }

    /// Copies the current registrations, so they can be iterated without holding the lock
    pub async fn snapshot(&self) -> Vec<(ResourceDescriptor, Trigger)> {
        let read_guard = self.triggers.read().await;
        (*read_guard)
            .iter()
            .map(|(descriptor, trigger)| (descriptor.clone(), trigger.clone()))
            .collect()
    }
}
