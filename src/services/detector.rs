
mod detection_loop;
pub mod detection_notifier;
pub mod detector_config;
pub mod detector_error;

use crate::contracts::resource_descriptor::ResourceDescriptor;
use crate::services::capability_query::CapabilityQueryProvider;
use crate::services::capability_state::CapabilityState;
use crate::services::capability_trigger::Trigger;
use crate::services::detector::detection_loop::DetectionLoop;
use crate::services::detector::detection_notifier::DetectionNotifier;
use crate::services::detector::detector_config::DetectorConfig;
use crate::services::detector::detector_error::DetectorError;
use crate::services::observability::ProbeObserver;
use crate::services::observability::logging_probe_observer::LoggingProbeObserver;
use crate::services::trigger_registry::TriggerRegistry;
use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Capacity of the notification channel
const NOTIFICATION_CAPACITY: usize = 1;

enum Lifecycle {
    Created,
    Running {
        stop_signal: oneshot::Sender<()>,
        handle: JoinHandle<()>,
    },
    Stopped,
}

/// Periodically probes the cluster for registered resource kinds and fires each
/// capability's trigger the first time the kind is found.
///
/// Lifecycle: `Created` -> `start` -> `Running` -> `stop` -> `Stopped`.
/// Triggers may be registered at any time, including while the detector is running.
/// The notification channel stays open until the detector is stopped or dropped.
pub struct Detector {
    id: Uuid,
    provider: Arc<dyn CapabilityQueryProvider>,
    registry: Arc<TriggerRegistry>,
    state: Arc<CapabilityState>,
    observer: Arc<dyn ProbeObserver>,
    config: DetectorConfig,
    notifier: DetectionNotifier,
    lifecycle: Mutex<Lifecycle>,
    subscription: Mutex<Option<mpsc::Receiver<ResourceDescriptor>>>,
}

impl Detector {
    /// Creates a detector sharing the process-wide capability state
    pub fn new(provider: Arc<dyn CapabilityQueryProvider>) -> Self {
        Detector::from_config(DetectorConfig::default(), provider)
    }

    pub fn from_config(config: DetectorConfig, provider: Arc<dyn CapabilityQueryProvider>) -> Self {
        let (notifications, subscription) = mpsc::channel(NOTIFICATION_CAPACITY);
        Detector {
            id: Uuid::new_v4(),
            provider,
            registry: Arc::new(TriggerRegistry::new()),
            state: CapabilityState::shared(),
            observer: Arc::new(LoggingProbeObserver),
            config,
            notifier: DetectionNotifier::new(notifications),
            lifecycle: Mutex::new(Lifecycle::Created),
            subscription: Mutex::new(Some(subscription)),
        }
    }

    /// Replaces the capability state, e.g. to isolate a group of detectors from the process-wide one
    pub fn with_state(mut self, state: Arc<CapabilityState>) -> Self {
        self.state = state;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProbeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn registry(&self) -> &Arc<TriggerRegistry> {
        &self.registry
    }

    pub fn state(&self) -> &Arc<CapabilityState> {
        &self.state
    }

    /// Runs `trigger` the first time the background scan finds the resource kind
    pub async fn add_trigger(&self, descriptor: ResourceDescriptor, trigger: Trigger) {
        self.registry.add_trigger(descriptor, trigger).await;
    }

    /// Runs `trigger` the first time the background scan finds each of the resource kinds
    pub async fn add_triggers<I>(&self, descriptors: I, trigger: Trigger)
    where
        I: IntoIterator<Item = ResourceDescriptor>,
    {
        self.registry.add_triggers(descriptors, trigger).await;
    }

    /// Runs the associated trigger the first time the background scan finds each resource kind
    pub async fn add_triggers_from_map(&self, triggers: HashMap<ResourceDescriptor, Trigger>) {
        self.registry.add_triggers_from_map(triggers).await;
    }

    /// Takes the receiving end of the notification channel.
    /// Only the first call returns the receiver. The channel is closed once the detector stops.
    pub fn subscribe(&self) -> Option<mpsc::Receiver<ResourceDescriptor>> {
        self.subscription.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    /// A handle for triggers that publish on the notification channel themselves.
    /// Publishing through it has no effect once the detector stopped.
    pub fn notifier(&self) -> DetectionNotifier {
        self.notifier.clone()
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.lock_lifecycle(), Lifecycle::Running { .. })
    }

    /// Starts detection using the configured poll interval
    pub fn start_with_config(&self) -> Result<(), DetectorError> {
        self.start(self.config.poll_interval)
    }

    /// Starts the background detection and returns immediately.
    /// The first probe runs right away, then once per `interval`.
    /// Must be called from within a Tokio runtime.
    pub fn start(&self, interval: Duration) -> Result<(), DetectorError> {
        if interval.is_zero() {
            return Err(DetectorError::InvalidInterval);
        }
        let runtime = Handle::try_current().map_err(|_| DetectorError::NoRuntime)?;

        let mut lifecycle = self.lock_lifecycle();
        match *lifecycle {
            Lifecycle::Created => {}
            Lifecycle::Running { .. } => return Err(DetectorError::AlreadyStarted),
            Lifecycle::Stopped => return Err(DetectorError::Stopped),
        }

        let (stop_signal, stop_receiver) = oneshot::channel();
        let detection_loop = DetectionLoop {
            detector_id: self.id,
            provider: self.provider.clone(),
            registry: self.registry.clone(),
            state: self.state.clone(),
            observer: self.observer.clone(),
            notifier: self.config.publish_detections.then(|| self.notifier.clone()),
        };
        let handle = runtime.spawn(detection_loop.run(interval, stop_receiver));
        *lifecycle = Lifecycle::Running { stop_signal, handle };

        info!(detector_id:% = self.id, interval:? = interval; "Capability detector started");
        Ok(())
    }

    /// Stops the background detection and closes the notification channel.
    /// Waits for a tick in progress to complete; no trigger fires after this returns.
    ///
    /// Stopping a detector that was never started closes the channel and moves it to
    /// `Stopped` as well, so it cannot be started afterwards. Stopping twice has no effect.
    pub async fn stop(&self) -> Result<(), DetectorError> {
        let previous = std::mem::replace(&mut *self.lock_lifecycle(), Lifecycle::Stopped);

        match previous {
            Lifecycle::Running { stop_signal, handle } => {
                // The receiver is gone only if the loop already exited
                let _ = stop_signal.send(());
                if let Err(e) = handle.await {
                    error!(detector_id:% = self.id; "Detection loop terminated abnormally: {}", e);
                }
                self.notifier.close();
                info!(detector_id:% = self.id; "Capability detector stopped");
            }
            Lifecycle::Created => {
                self.notifier.close();
                debug!(detector_id:% = self.id; "Detector stopped before it was started");
            }
            Lifecycle::Stopped => {
                debug!(detector_id:% = self.id; "Detector is already stopped");
            }
        }
        Ok(())
    }

    fn lock_lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Detector {
    fn drop(&mut self) {
        // The loop exits on its own once the stop signal sender is dropped
        self.notifier.close();
    }
}
