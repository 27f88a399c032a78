use super::ResourceDescriptor;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::core::{ApiResource, GroupVersionKind};
use std::collections::HashMap;

#[test]
fn test_group_version_for_named_group() {
    let descriptor = ResourceDescriptor::new("monitoring.coreos.com", "v1", "ServiceMonitor");

    assert_eq!(descriptor.group_version(), "monitoring.coreos.com/v1");
    assert_eq!(descriptor.capability_id(), "ServiceMonitor");
}

#[test]
fn test_group_version_for_core_group() {
    let descriptor = ResourceDescriptor::new("", "v1", "ConfigMap");

    assert_eq!(descriptor.group_version(), "v1");
}

#[test]
fn test_for_resource_reads_static_type_information() {
    assert_eq!(
        ResourceDescriptor::for_resource::<Deployment>(),
        ResourceDescriptor::new("apps", "v1", "Deployment")
    );
    assert_eq!(
        ResourceDescriptor::for_resource::<ConfigMap>(),
        ResourceDescriptor::new("", "v1", "ConfigMap")
    );
}

#[test]
fn test_conversions_from_kube_types() {
    let gvk = GroupVersionKind::gvk("route.openshift.io", "v1", "Route");
    let from_gvk = ResourceDescriptor::from(gvk.clone());
    let from_api_resource = ResourceDescriptor::from(&ApiResource::from_gvk(&gvk));

    assert_eq!(from_gvk, from_api_resource);
    assert_eq!(GroupVersionKind::from(from_gvk), gvk);
}

#[test]
fn test_descriptors_are_compared_by_value() {
    // Arrange
    let mut keys = HashMap::new();
    keys.insert(ResourceDescriptor::new("example.com", "v1", "Widget"), 1);

    // Act
    keys.insert(ResourceDescriptor::new("example.com", "v1", "Widget"), 2);
    keys.insert(ResourceDescriptor::new("example.com", "v2", "Widget"), 3);

    // Assert
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[&ResourceDescriptor::new("example.com", "v1", "Widget")], 2);
}

#[test]
fn test_display() {
    let descriptor = ResourceDescriptor::new("example.com", "v1alpha1", "Widget");

    assert_eq!(descriptor.to_string(), "example.com/v1alpha1, Kind=Widget");
}
