//! Backend service binding.

use serde::{Deserialize, Serialize};

/// Where a provider expects its metrics backend to live in a cluster.
///
/// Consumed by the surrounding service-discovery layer to perform a
/// namespace-scoped service lookup; this crate only declares the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBinding {
    /// Namespace to look the service up in.
    pub namespace: String,
    /// Name of the backend service.
    pub service: String,
}

impl ServiceBinding {
    /// Create a binding for `service` in `namespace`.
    pub fn new(namespace: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            service: service.into(),
        }
    }
}
