//! Telemetry metric name constants.
//!
//! Centralised metric names for muninn operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `muninn_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `provider` — provider id (e.g. "lens")
//! - `category` — requested metric category (empty when absent)
//! - `status` — outcome: "ok" or "error"

/// Total queries built through the registry.
///
/// Labels: `provider`, `category`, `status` ("ok" | "error").
pub const QUERIES_BUILT_TOTAL: &str = "muninn_queries_built_total";

/// Total dispatches that failed to resolve a (category, query name) pair.
///
/// Labels: `provider`.
pub const UNKNOWN_QUERIES_TOTAL: &str = "muninn_unknown_queries_total";
