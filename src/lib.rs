//! Muninn - Unified query gateway for Prometheus-compatible metrics backends
//!
//! This crate provides a stable `MetricsProvider` trait that abstracts over
//! backend-specific query dialects and metric-naming schemes, allowing
//! consumers to request logical metrics ("cpu usage for these pods") without
//! coupling to the PromQL a particular deployment flavour expects.
//!
//! # Example
//!
//! ```rust
//! use muninn::{LensProvider, MetricsProvider, QueryParameters};
//!
//! fn main() -> muninn::Result<()> {
//!     let provider = LensProvider::new();
//!
//!     let query = provider.build_query(
//!         &QueryParameters::default()
//!             .category("pods")
//!             .pods("app-.*")
//!             .namespace("default")
//!             .selector("pod"),
//!         "cpuUsage",
//!     )?;
//!
//!     assert!(query.contains(r#"pod=~"app-.*""#));
//!     Ok(())
//! }
//! ```
//!
//! # Registry Example
//!
//! ```rust
//! use muninn::{ProviderRegistry, QueryParameters};
//!
//! fn main() -> muninn::Result<()> {
//!     let registry = ProviderRegistry::with_defaults();
//!
//!     let query = registry.build_query(
//!         "lens",
//!         &QueryParameters::default().category("nodes"),
//!         "memoryUsage",
//!     )?;
//!
//!     assert!(query.ends_with("by (node)"));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod providers;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use error::{MuninnError, Result};
pub use providers::{LensProvider, ProviderRegistry};
pub use traits::MetricsProvider;
pub use types::{Category, QueryParameters, ServiceBinding};
