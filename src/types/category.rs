//! Metric categories.
//!
//! A category selects which sub-catalog of query templates applies. The
//! wire spelling is the lowercase name; parsing is strict — no aliases,
//! no case folding, and no category ever acts as a default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of cluster object a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cluster-wide aggregates, summed over a node-identifier regex.
    Cluster,
    /// Per-node series over the whole node population.
    Nodes,
    /// Per-pod series filtered by pod regex and namespace.
    Pods,
    /// Disk stats for a single persistent volume claim.
    Pvc,
    /// Request/response stats for a single ingress.
    Ingress,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Cluster,
        Category::Nodes,
        Category::Pods,
        Category::Pvc,
        Category::Ingress,
    ];

    /// The wire spelling used in [`QueryParameters::category`].
    ///
    /// [`QueryParameters::category`]: crate::QueryParameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cluster => "cluster",
            Category::Nodes => "nodes",
            Category::Pods => "pods",
            Category::Pvc => "pvc",
            Category::Ingress => "ingress",
        }
    }

    /// Strict inverse of [`as_str`](Self::as_str). Unrecognized input is
    /// `None`, never a fallback category.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cluster" => Some(Category::Cluster),
            "nodes" => Some(Category::Nodes),
            "pods" => Some(Category::Pods),
            "pvc" => Some(Category::Pvc),
            "ingress" => Some(Category::Ingress),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
