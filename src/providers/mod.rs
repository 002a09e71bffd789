//! Query provider implementations.
//!
//! Each provider maps logical metric requests onto the metric names and
//! query dialect of one backend deployment flavour.

pub mod lens;
pub mod registry;

pub use lens::LensProvider;
pub use registry::ProviderRegistry;
