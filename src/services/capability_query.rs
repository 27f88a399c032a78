pub mod kubernetes_capability_query;

use async_trait::async_trait;

/// Answers whether a resource kind is currently served by the cluster
#[async_trait]
pub trait CapabilityQueryProvider: Send + Sync {
    /// Checks whether `kind` is served under `group_version` (`v1` or `<group>/<version>`).
    /// Errors are transient: callers treat them as "not present" and ask again later.
    async fn resource_exists(&self, group_version: &str, kind: &str) -> anyhow::Result<bool>;
}
