use crate::contracts::resource_descriptor::ResourceDescriptor;
use crate::services::capability_query::CapabilityQueryProvider;
use crate::services::capability_state::CapabilityState;
use crate::services::capability_trigger::CapabilityTrigger;
use crate::services::detector::detection_notifier::DetectionNotifier;
use crate::services::observability::ProbeObserver;
use crate::services::trigger_registry::TriggerRegistry;
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

/// The background procedure of a detector.
/// Publishes detections through `notifier` when set; closing the channel is left to the detector.
pub(crate) struct DetectionLoop {
    pub(crate) detector_id: Uuid,
    pub(crate) provider: Arc<dyn CapabilityQueryProvider>,
    pub(crate) registry: Arc<TriggerRegistry>,
    pub(crate) state: Arc<CapabilityState>,
    pub(crate) observer: Arc<dyn ProbeObserver>,
    pub(crate) notifier: Option<DetectionNotifier>,
}

impl DetectionLoop {
    /// Runs a tick immediately and then once per `period`, until the stop signal fires
    /// or its sender is dropped. A tick in progress always completes.
    pub(crate) async fn run(self, period: Duration, mut stop_signal: oneshot::Receiver<()>) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut stop_signal => break,
                _ = ticker.tick() => self.tick().await,
            }
        }
        debug!(detector_id:% = self.detector_id; "Detection loop exited");
    }

    /// Probes every registered descriptor once
    pub(crate) async fn tick(&self) {
        let registrations = self.registry.snapshot().await;
        debug!(detector_id:% = self.detector_id, registrations = registrations.len(); "Probing capabilities");

        for (descriptor, trigger) in registrations {
            self.probe(&descriptor, trigger.as_ref()).await;
        }
    }

    async fn probe(&self, descriptor: &ResourceDescriptor, trigger: &dyn CapabilityTrigger) {
        let capability = descriptor.capability_id();
        if self.state.get_state(capability).await {
            return;
        }

        let group_version = descriptor.group_version();
        match self.provider.resource_exists(&group_version, descriptor.kind()).await {
            Err(error) => self.observer.on_probe_failed(descriptor, &error).await,
            Ok(false) => {
                debug!(detector_id:% = self.detector_id, capability = capability; "Capability is not present yet");
            }
            Ok(true) => {
                if !self.state.try_mark_fired(capability).await {
                    debug!(detector_id:% = self.detector_id, capability = capability; "Capability was fired by another detector");
                    return;
                }
                trigger.on_capability_detected(descriptor).await;
                self.publish(descriptor);
                self.observer.on_capability_detected(descriptor).await;
            }
        }
    }

    fn publish(&self, descriptor: &ResourceDescriptor) {
        if let Some(notifier) = &self.notifier {
            notifier.publish(descriptor.clone());
        }
    }
}
