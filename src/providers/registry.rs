//! Provider registry keyed by provider id.
//!
//! The registry holds every configured query-language variant behind the
//! [`MetricsProvider`] capability. Lookup is by id; registration order is
//! preserved and the first provider registered under an id wins. Dispatch
//! through [`ProviderRegistry::build_query`] is instrumented with `tracing`
//! and the `metrics` facade — without a recorder installed, the counters
//! are no-ops.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{MuninnError, Result};
use crate::telemetry;
use crate::traits::MetricsProvider;
use crate::types::QueryParameters;

use super::lens::LensProvider;

/// Registry of interchangeable query providers.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn MetricsProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the stock [`LensProvider`] registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LensProvider::new()));
        registry
    }

    /// Register a provider. First registration under an id wins on lookup.
    pub fn register(&mut self, provider: Arc<dyn MetricsProvider>) {
        self.providers.push(provider);
    }

    /// Look a provider up by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn MetricsProvider>> {
        self.providers.iter().find(|p| p.id() == id).cloned()
    }

    /// Registered provider ids, in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Build a query through the provider registered under `provider_id`.
    ///
    /// Resolves the provider, delegates to its
    /// [`build_query`](MetricsProvider::build_query), and records the
    /// outcome.
    pub fn build_query(
        &self,
        provider_id: &str,
        params: &QueryParameters,
        query_name: &str,
    ) -> Result<String> {
        let Some(provider) = self.get(provider_id) else {
            warn!(provider = provider_id, "no such provider registered");
            record_build(provider_id, params, false);
            return Err(MuninnError::UnknownProvider(provider_id.to_string()));
        };

        match provider.build_query(params, query_name) {
            Ok(query) => {
                debug!(provider = provider.id(), query_name, "built query");
                record_build(provider.id(), params, true);
                Ok(query)
            }
            Err(err) => {
                warn!(provider = provider.id(), query_name, %err, "failed to build query");
                record_build(provider.id(), params, false);
                metrics::counter!(telemetry::UNKNOWN_QUERIES_TOTAL,
                    "provider" => provider.id().to_owned(),
                )
                .increment(1);
                Err(err)
            }
        }
    }
}

fn record_build(provider: &str, params: &QueryParameters, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(telemetry::QUERIES_BUILT_TOTAL,
        "provider" => provider.to_owned(),
        "category" => params.category.clone().unwrap_or_default(),
        "status" => status,
    )
    .increment(1);
}
