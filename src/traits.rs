//! Core MetricsProvider trait

use crate::Result;
use crate::types::{QueryParameters, ServiceBinding};

/// The capability every query-language adapter must provide.
///
/// A provider translates a logical metric request — category, query name,
/// parameters — into a query string for its backend, so consumers never
/// couple to a specific backend's query language or metric-naming scheme.
/// Any number of variants can sit behind a
/// [`ProviderRegistry`](crate::ProviderRegistry).
///
/// Implementations must be pure: `build_query` takes no lock, performs no
/// I/O, and yields byte-identical output for identical input.
pub trait MetricsProvider: Send + Sync {
    /// Stable identifier used for registry lookup (e.g. `"lens"`).
    fn id(&self) -> &str;

    /// Human-readable variant name for logging/debugging.
    fn name(&self) -> &str;

    /// Look-back window substituted into every `rate()` expression this
    /// provider emits. Fixed per instance.
    fn rate_window(&self) -> &str;

    /// Whether an operator can change the rate window.
    fn is_configurable(&self) -> bool {
        false
    }

    /// Declared cluster location of the backend service.
    fn service_binding(&self) -> ServiceBinding;

    /// Build a backend query for `(category, query_name, parameters)`.
    ///
    /// Fails with [`MuninnError::UnknownQuery`] when the pair does not
    /// resolve to a template; there is no partial result and no category
    /// defaulting.
    ///
    /// [`MuninnError::UnknownQuery`]: crate::MuninnError::UnknownQuery
    fn build_query(&self, params: &QueryParameters, query_name: &str) -> Result<String>;
}
