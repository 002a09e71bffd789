//! Query parameters (provider-agnostic)

use serde::{Deserialize, Serialize};

/// Contextual parameters for a query request.
///
/// Which fields a template reads depends on the category and query name;
/// unused fields are ignored. Values are interpolated into the rendered
/// query verbatim — callers are trusted to supply well-formed regex and
/// identifier fragments, and nothing is escaped or validated. An absent
/// field substitutes as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Selects the template catalog; see [`Category`](crate::Category).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Regex over node identifiers (`cluster` templates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<String>,
    /// Exact namespace (`pods`, `pvc`, and `ingress` templates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Regex over pod identifiers (`pods` templates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pods: Option<String>,
    /// Grouping key inserted verbatim into `by (...)` (`pods` templates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Exact persistent volume claim name (`pvc` templates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pvc: Option<String>,
    /// Exact ingress name (`ingress` templates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<String>,
}

impl QueryParameters {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn nodes(mut self, nodes: impl Into<String>) -> Self {
        self.nodes = Some(nodes.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn pods(mut self, pods: impl Into<String>) -> Self {
        self.pods = Some(pods.into());
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn pvc(mut self, pvc: impl Into<String>) -> Self {
        self.pvc = Some(pvc.into());
        self
    }

    pub fn ingress(mut self, ingress: impl Into<String>) -> Self {
        self.ingress = Some(ingress.into());
        self
    }
}
