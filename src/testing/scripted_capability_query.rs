use crate::services::capability_query::CapabilityQueryProvider;
use anyhow::bail;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// The answer of a scripted probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResponse {
    Absent,
    Present,
    Failure,
}

/// In-memory capability query answering from per-kind scripts.
///
/// The n-th probe of a kind returns the n-th scripted response; the last response repeats
/// once the script is exhausted. Kinds without a script are absent.
#[derive(Default)]
pub struct ScriptedCapabilityQuery {
    scripts: Mutex<HashMap<String, Vec<ProbeResponse>>>,
    calls: Mutex<HashMap<String, usize>>,
    latency: Option<Duration>,
}

impl ScriptedCapabilityQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every answer, keeping ticks in flight for a while
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_script(self, kind: &str, responses: Vec<ProbeResponse>) -> Self {
        self.set_script(kind, responses);
        self
    }

    /// Replaces the script of a kind; the responses apply from the next probe on
    pub fn set_script(&self, kind: &str, responses: Vec<ProbeResponse>) {
        self.scripts.lock().expect("scripts lock poisoned").insert(kind.to_string(), responses);
        self.calls.lock().expect("calls lock poisoned").remove(kind);
    }

    /// Number of probes of the kind since its script was last set
    pub fn calls(&self, kind: &str) -> usize {
        self.calls.lock().expect("calls lock poisoned").get(kind).copied().unwrap_or(0)
    }
}

#[async_trait]
impl CapabilityQueryProvider for ScriptedCapabilityQuery {
    async fn resource_exists(&self, group_version: &str, kind: &str) -> anyhow::Result<bool> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let call = {
            let mut calls = self.calls.lock().expect("calls lock poisoned");
            let counter = calls.entry(kind.to_string()).or_insert(0);
            *counter += 1;
            *counter - 1
        };
        let response = {
            let scripts = self.scripts.lock().expect("scripts lock poisoned");
            scripts
                .get(kind)
                .and_then(|script| script.get(call).or_else(|| script.last()))
                .copied()
                .unwrap_or(ProbeResponse::Absent)
        };

        match response {
            ProbeResponse::Absent => Ok(false),
            ProbeResponse::Present => Ok(true),
            ProbeResponse::Failure => bail!("Scripted failure listing {} in {}", kind, group_version),
        }
    }
}
