#[cfg(test)]
mod tests;

use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;

static SHARED_STATE: OnceLock<Arc<CapabilityState>> = OnceLock::new();

/// Tracks which capabilities already had their trigger fired.
///
/// A capability that was marked as fired stays fired for the lifetime of the tracker.
/// Detectors watching overlapping capabilities must share one tracker to fire each
/// capability only once.
#[derive(Debug, Default)]
pub struct CapabilityState {
    fired: RwLock<HashMap<String, bool>>,
}

impl CapabilityState {
    pub fn new() -> Self {
        CapabilityState {
            fired: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide tracker, created on first access
    pub fn shared() -> Arc<CapabilityState> {
        SHARED_STATE.get_or_init(|| Arc::new(CapabilityState::new())).clone()
    }

    pub async fn get_state(&self, capability_id: &str) -> bool {
        let read_guard = self.fired.read().await;
        (*read_guard).get(capability_id).copied().unwrap_or(false)
    }

    /// Records the state of a capability. A fired capability cannot be reset.
    pub async fn set_state(&self, capability_id: &str, fired: bool) {
        let mut write_guard = self.fired.write().await;
        let current = (*write_guard).entry(capability_id.to_string()).or_insert(false);
        if *current && !fired {
            debug!(capability = capability_id; "Ignoring reset of a fired capability");
            return;
        }
        *current = fired;
    }

    /// Atomically marks the capability as fired.
    /// Returns `true` only for the caller that performed the transition.
    pub async fn try_mark_fired(&self, capability_id: &str) -> bool {
        let mut write_guard = self.fired.write().await;
        match (*write_guard).get_mut(capability_id) {
            Some(true) => false,
            Some(flag) => {
                *flag = true;
                true
            }
            None => {
                (*write_guard).insert(capability_id.to_string(), true);
                true
            }
        }
    }

    /// Lists the fired capabilities in lexicographic order
    pub async fn fired_capabilities(&self) -> Vec<String> {
        let read_guard = self.fired.read().await;
        let mut fired: Vec<String> = (*read_guard)
            .iter()
            .filter(|(_, fired)| **fired)
            .map(|(capability_id, _)| capability_id.clone())
            .collect();
        fired.sort();
        fired
    }
}
