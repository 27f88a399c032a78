use crate::contracts::resource_descriptor::ResourceDescriptor;
use crate::services::capability_state::CapabilityState;
use crate::services::capability_trigger::{Trigger, from_fn};
use crate::services::detector::Detector;
use crate::testing::scripted_capability_query::ScriptedCapabilityQuery;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use test_context::AsyncTestContext;

/// Records every trigger invocation by kind
#[derive(Clone, Default)]
pub struct TriggerRecorder {
    fired: Arc<Mutex<HashMap<String, usize>>>,
}

impl TriggerRecorder {
    /// A trigger counting its invocations under `label`
    pub fn trigger(&self, label: &str) -> Trigger {
        let fired = self.fired.clone();
        let label = label.to_string();
        from_fn(move |_: &ResourceDescriptor| {
            *fired.lock().expect("recorder lock poisoned").entry(label.clone()).or_insert(0) += 1;
        })
    }

    pub fn count(&self, label: &str) -> usize {
        self.fired.lock().expect("recorder lock poisoned").get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.fired.lock().expect("recorder lock poisoned").values().sum()
    }
}

/// A detector backed by a scripted query and an isolated capability state
pub struct DetectorTestContext {
    pub query: Arc<ScriptedCapabilityQuery>,
    pub state: Arc<CapabilityState>,
    pub recorder: TriggerRecorder,
    pub detector: Detector,
}

impl DetectorTestContext {
    /// Creates another detector over the same query and capability state
    pub fn sibling_detector(&self) -> Detector {
        Detector::new(self.query.clone()).with_state(self.state.clone())
    }
}

impl AsyncTestContext for DetectorTestContext {
    async fn setup() -> Self {
        let query = Arc::new(ScriptedCapabilityQuery::new());
        let state = Arc::new(CapabilityState::new());
        let detector = Detector::new(query.clone()).with_state(state.clone());
        DetectorTestContext {
            query,
            state,
            recorder: TriggerRecorder::default(),
            detector,
        }
    }

    async fn teardown(self) {
        self.detector.stop().await.expect("Failed to stop the detector");
    }
}
