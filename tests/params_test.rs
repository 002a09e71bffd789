//! QueryParameters builder and serialization tests.

use muninn::{Category, QueryParameters};

#[test]
fn default_has_no_fields_set() {
    let params = QueryParameters::default();
    assert!(params.category.is_none());
    assert!(params.nodes.is_none());
    assert!(params.namespace.is_none());
    assert!(params.pods.is_none());
    assert!(params.selector.is_none());
    assert!(params.pvc.is_none());
    assert!(params.ingress.is_none());
}

#[test]
fn builder_sets_each_field() {
    let params = QueryParameters::default()
        .category("pods")
        .nodes("node-.*")
        .namespace("default")
        .pods("app-.*")
        .selector("pod, namespace")
        .pvc("data-claim")
        .ingress("web");

    assert_eq!(params.category.as_deref(), Some("pods"));
    assert_eq!(params.nodes.as_deref(), Some("node-.*"));
    assert_eq!(params.namespace.as_deref(), Some("default"));
    assert_eq!(params.pods.as_deref(), Some("app-.*"));
    assert_eq!(params.selector.as_deref(), Some("pod, namespace"));
    assert_eq!(params.pvc.as_deref(), Some("data-claim"));
    assert_eq!(params.ingress.as_deref(), Some("web"));
}

#[test]
fn absent_fields_are_skipped_in_serialization() {
    let params = QueryParameters::default().category("pvc").pvc("data-claim");
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"category": "pvc", "pvc": "data-claim"})
    );
}

#[test]
fn category_serializes_lowercase() {
    for category in Category::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("{:?}", category.as_str()));

        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, category);
    }
}

#[test]
fn category_display_matches_wire_spelling() {
    assert_eq!(Category::Cluster.to_string(), "cluster");
    assert_eq!(Category::Pvc.to_string(), "pvc");
    assert_eq!(Category::parse("ingress"), Some(Category::Ingress));
    assert_eq!(Category::parse("Ingress"), None);
}
