//! Provider registry tests.

use std::sync::Arc;

use muninn::{
    LensProvider, MetricsProvider, MuninnError, ProviderRegistry, QueryParameters, Result,
    ServiceBinding,
};

/// Minimal second variant to exercise multi-provider registries.
struct EchoProvider;

impl MetricsProvider for EchoProvider {
    fn id(&self) -> &str {
        "echo"
    }

    fn name(&self) -> &str {
        "Echo"
    }

    fn rate_window(&self) -> &str {
        "5m"
    }

    fn service_binding(&self) -> ServiceBinding {
        ServiceBinding::new("monitoring", "echo")
    }

    fn build_query(&self, _params: &QueryParameters, query_name: &str) -> Result<String> {
        Ok(format!("echo({query_name})"))
    }
}

#[test]
fn empty_registry() {
    let registry = ProviderRegistry::new();
    assert!(registry.get("lens").is_none());
    assert!(registry.ids().is_empty());
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn with_defaults_registers_lens() {
    let registry = ProviderRegistry::with_defaults();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.ids(), vec!["lens"]);

    let provider = registry.get("lens").unwrap();
    assert_eq!(provider.name(), "Lens");
}

#[test]
fn register_and_dispatch_by_id() {
    let mut registry = ProviderRegistry::with_defaults();
    registry.register(Arc::new(EchoProvider));
    assert_eq!(registry.ids(), vec!["lens", "echo"]);

    let query = registry
        .build_query("echo", &QueryParameters::default(), "anything")
        .unwrap();
    assert_eq!(query, "echo(anything)");

    let query = registry
        .build_query(
            "lens",
            &QueryParameters::default().category("nodes"),
            "fsSize",
        )
        .unwrap();
    assert_eq!(
        query,
        r#"sum(node_filesystem_size_bytes{mountpoint="/"}) by (node)"#
    );
}

#[test]
fn unknown_provider_is_an_error() {
    let registry = ProviderRegistry::with_defaults();
    let err = registry
        .build_query("graphite", &QueryParameters::default(), "cpuUsage")
        .unwrap_err();
    assert!(matches!(err, MuninnError::UnknownProvider(id) if id == "graphite"));
}

#[test]
fn dispatch_propagates_unknown_query() {
    let registry = ProviderRegistry::with_defaults();
    let err = registry
        .build_query(
            "lens",
            &QueryParameters::default().category("bogus"),
            "cpuUsage",
        )
        .unwrap_err();
    assert!(matches!(err, MuninnError::UnknownQuery { .. }));
}

#[test]
fn lens_declares_its_backend_binding() {
    let provider = LensProvider::new();
    assert_eq!(provider.id(), "lens");
    assert_eq!(
        provider.service_binding(),
        ServiceBinding::new("lens-metrics", "prometheus")
    );
    assert_eq!(provider.rate_window(), "1m");
    assert!(!provider.is_configurable());
}

#[test]
fn first_registration_wins_on_id_collision() {
    let mut registry = ProviderRegistry::with_defaults();
    registry.register(Arc::new(LensProvider::new()));
    assert_eq!(registry.len(), 2);
    // Lookup still resolves, deterministically, to the first entry.
    assert_eq!(registry.get("lens").unwrap().id(), "lens");
}
