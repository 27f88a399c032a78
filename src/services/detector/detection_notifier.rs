#[cfg(test)]
mod tests;

use crate::contracts::resource_descriptor::ResourceDescriptor;
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Publishes discovered resource kinds on the notification channel of a detector.
///
/// Cloned handles share one sender. Sends and the close performed by `Detector::stop`
/// are serialized, so nothing is sent once the channel was closed.
#[derive(Clone)]
pub struct DetectionNotifier {
    sender: Arc<Mutex<Option<mpsc::Sender<ResourceDescriptor>>>>,
}

impl DetectionNotifier {
    pub(crate) fn new(sender: mpsc::Sender<ResourceDescriptor>) -> Self {
        DetectionNotifier {
            sender: Arc::new(Mutex::new(Some(sender))),
        }
    }

    /// Publishes without waiting for the subscriber.
    /// Returns `false` when the channel is full, has no subscriber or was closed.
    pub fn publish(&self, descriptor: ResourceDescriptor) -> bool {
        let sender = self.lock_sender();
        let Some(sender) = sender.as_ref() else {
            debug!(kind = descriptor.kind(); "Notification channel is closed, dropping {}", descriptor);
            return false;
        };
        match sender.try_send(descriptor) {
            Ok(()) => true,
            Err(TrySendError::Full(dropped)) => {
                debug!(kind = dropped.kind(); "Notification channel is full, dropping {}", dropped);
                false
            }
            Err(TrySendError::Closed(dropped)) => {
                debug!(kind = dropped.kind(); "No subscriber listening, dropping {}", dropped);
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lock_sender().is_none()
    }

    /// Drops the sender; the subscriber receives `None` once it drained the channel
    pub(crate) fn close(&self) {
        self.lock_sender().take();
    }

    fn lock_sender(&self) -> MutexGuard<'_, Option<mpsc::Sender<ResourceDescriptor>>> {
        self.sender.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
