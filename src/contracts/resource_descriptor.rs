#[cfg(test)]
mod tests;

use kube::core::{ApiResource, GroupVersionKind};
use std::fmt::{Display, Formatter};

/// Identifies a watched resource kind by its API group, version and kind name.
/// The core API group is represented by an empty group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceDescriptor {
    group: String,
    version: String,
    kind: String,
}

impl ResourceDescriptor {
    pub fn new(group: impl Into<String>, version: impl Into<String>, kind: impl Into<String>) -> Self {
        ResourceDescriptor {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Builds the descriptor of a statically typed resource, including custom resources
    /// generated with `kube::CustomResource`.
    pub fn for_resource<K>() -> Self
    where
        K: kube::Resource<DynamicType = ()>,
    {
        ResourceDescriptor::new(K::group(&()), K::version(&()), K::kind(&()))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The `apiVersion` form of the group and version: `v1` for the core group,
    /// `<group>/<version>` otherwise.
    pub fn group_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// The identifier used to track whether the capability has already fired.
    /// Capabilities are tracked by kind name only.
    pub fn capability_id(&self) -> &str {
        &self.kind
    }
}

impl Display for ResourceDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, Kind={}", self.group_version(), self.kind)
    }
}

impl From<GroupVersionKind> for ResourceDescriptor {
    fn from(gvk: GroupVersionKind) -> Self {
        ResourceDescriptor::new(gvk.group, gvk.version, gvk.kind)
    }
}

impl From<&ApiResource> for ResourceDescriptor {
    fn from(api_resource: &ApiResource) -> Self {
        ResourceDescriptor::new(
            api_resource.group.clone(),
            api_resource.version.clone(),
            api_resource.kind.clone(),
        )
    }
}

impl From<ResourceDescriptor> for GroupVersionKind {
    fn from(descriptor: ResourceDescriptor) -> Self {
        GroupVersionKind::gvk(&descriptor.group, &descriptor.version, &descriptor.kind)
    }
}
