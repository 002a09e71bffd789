//! Muninn error types

/// Muninn error types
#[derive(Debug, thiserror::Error)]
pub enum MuninnError {
    /// The (category, query name) pair did not resolve to a template.
    ///
    /// Carries the raw requested category so a typo like `"pod"` shows up
    /// verbatim in logs; an absent category renders as `none` rather than
    /// being omitted.
    #[error("unknown query {query_name:?} for category: {}", display_category(.category))]
    UnknownQuery {
        query_name: String,
        category: Option<String>,
    },

    /// No provider with this id is registered.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

fn display_category(category: &Option<String>) -> String {
    match category {
        Some(category) => format!("{category:?}"),
        None => "none".to_string(),
    }
}

/// Result type alias for Muninn operations
pub type Result<T> = std::result::Result<T, MuninnError>;
