//! Cross-cutting error types for the audit browser.
//!
//! Loader, config, and search errors live in their own crates. A unified
//! error is deferred to `audit-cli` where they all converge via `anyhow`.

use thiserror::Error;

/// Errors raised while interpreting user or inventory input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A name did not match any variant of a fixed enumeration.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

impl CoreError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
