// File: rusty-forms-rules/src/error.rs
// Purpose: Errors raised while building rule sets

use thiserror::Error;

/// Errors that can occur while assembling a rule set.
///
/// Evaluating rules never fails; these only surface when a rule set is built from
/// bad configuration.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("duplicate rule name '{0}' in rule set")]
    DuplicateRule(String),
}
