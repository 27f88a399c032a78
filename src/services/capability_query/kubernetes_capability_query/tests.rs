use super::serves_kind;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};

fn api_resource(name: &str, kind: &str) -> APIResource {
    APIResource {
        name: name.to_string(),
        kind: kind.to_string(),
        namespaced: true,
        singular_name: String::new(),
        verbs: vec!["get".to_string(), "list".to_string(), "watch".to_string()],
        ..Default::default()
    }
}

fn resource_list() -> APIResourceList {
    APIResourceList {
        group_version: "monitoring.coreos.com/v1".to_string(),
        resources: vec![
            api_resource("servicemonitors", "ServiceMonitor"),
            api_resource("prometheuses", "Prometheus"),
            api_resource("prometheuses/status", "Prometheus"),
            api_resource("alertmanagers/status", "Alertmanager"),
        ],
    }
}

#[test]
fn test_served_kind_is_found() {
    assert!(serves_kind(&resource_list(), "ServiceMonitor"));
    assert!(serves_kind(&resource_list(), "Prometheus"));
}

#[test]
fn test_missing_kind_is_not_found() {
    assert!(!serves_kind(&resource_list(), "PodMonitor"));
}

#[test]
fn test_kind_matching_is_case_sensitive() {
    assert!(!serves_kind(&resource_list(), "servicemonitor"));
}

#[test]
fn test_kind_served_only_as_subresource_is_found() {
    let list = APIResourceList {
        group_version: "autoscaling/v1".to_string(),
        resources: vec![
            api_resource("horizontalpodautoscalers", "HorizontalPodAutoscaler"),
            api_resource("deployments/scale", "Scale"),
        ],
    };

    assert!(serves_kind(&list, "Scale"));
    assert!(serves_kind(&resource_list(), "Alertmanager"));
}

#[test]
fn test_empty_list() {
    let list = APIResourceList {
        group_version: "v1".to_string(),
        resources: vec![],
    };

    assert!(!serves_kind(&list, "ConfigMap"));
}
