// File: rusty-forms-rules/src/result.rs
// Purpose: Validation outcome reported to callers

use serde::Serialize;

/// Outcome of evaluating a value against a rule set
///
/// `is_valid` always equals `errors.is_empty()`; the only constructors keep that
/// true. Serializes as `{"isValid": .., "errors": [..]}` for JavaScript hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no errors
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from failure messages in rule order
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// First reported error, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
