#[cfg(test)]
mod tests;

use crate::services::capability_query::CapabilityQueryProvider;
use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::Client;
use kube::core::ErrorResponse;
use log::debug;

/// Queries the Kubernetes discovery API for served resource kinds
#[derive(Clone)]
pub struct KubernetesCapabilityQuery {
    client: Client,
}

impl KubernetesCapabilityQuery {
    pub fn new(client: Client) -> Self {
        KubernetesCapabilityQuery { client }
    }

    pub fn try_from_config(config: kube::Config) -> anyhow::Result<Self> {
        let client = Client::try_from(config)?;
        Ok(KubernetesCapabilityQuery::new(client))
    }

    /// Lists the resources served under the group version.
    /// Returns `None` when the API server does not serve the group version at all.
    async fn list_resources(&self, group_version: &str) -> Result<Option<APIResourceList>, kube::Error> {
        let result = if group_version.contains('/') {
            self.client.list_api_group_resources(group_version).await
        } else {
            self.client.list_core_api_resources(group_version).await
        };

        match result {
            Ok(list) => Ok(Some(list)),
            Err(kube::Error::Api(ErrorResponse { code: 404, .. })) => {
                debug!(group_version = group_version; "Group version is not served");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Checks whether any resource of the list, subresources included, is of `kind`.
/// A kind served only through a subresource, like `Scale` via `deployments/scale`, counts as present.
pub fn serves_kind(list: &APIResourceList, kind: &str) -> bool {
    list.resources.iter().any(|resource| resource.kind == kind)
}

#[async_trait]
impl CapabilityQueryProvider for KubernetesCapabilityQuery {
    async fn resource_exists(&self, group_version: &str, kind: &str) -> anyhow::Result<bool> {
        let list = self
            .list_resources(group_version)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list resources of {}: {}", group_version, e))?;
        Ok(list.is_some_and(|list| serves_kind(&list, kind)))
    }
}
