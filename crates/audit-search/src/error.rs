//! Search error types for audit-search.

/// Errors from building or parsing search requests.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A filter criterion named an unknown value.
    #[error("invalid filter '{field}': {source}")]
    InvalidCriterion {
        field: String,
        #[source]
        source: audit_core::CoreError,
    },

    /// A filter criterion is not recognised at all.
    #[error("unknown filter '{0}'")]
    UnknownCriterion(String),

    /// A boolean criterion could not be parsed.
    #[error("invalid boolean for '{field}': '{value}' (expected true/false/yes/no)")]
    InvalidBoolean { field: String, value: String },
}
