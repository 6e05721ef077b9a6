// File: rusty-forms-field/src/error.rs
// Purpose: Errors for field and form configuration

use rusty_forms_rules::RuleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{0}' is already registered")]
    DuplicateField(String),

    #[error(transparent)]
    Rule(#[from] RuleError),
}
