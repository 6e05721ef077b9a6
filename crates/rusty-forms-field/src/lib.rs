//! Rusty-Forms Field
//!
//! Interaction-aware validation for individual form fields. A
//! [`FieldValidationController`] evaluates the field's rules on every change and
//! reports the result upward, but only shows errors once the user has left the
//! field (or the browser autofilled it). Every input component, whether an
//! address line, a postal code or a username, uses the same controller and
//! differs only in the rules it is given.
//!
//! ## Lifecycle
//!
//! - **mount**: evaluate the initial value, report it, show nothing
//! - **focus**: remember focus, nothing else
//! - **change**: re-evaluate and report; show errors only if touched
//! - **blur**: touch the field; from now on errors update live
//! - **disable**: reset to untouched and report a valid, empty result
//! - **reconfigure**: re-evaluate under new rules, keep touch state

pub mod autofill;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod tracker;

pub use autofill::{AutofillDetector, EditSpanDetector, NeverAutofill};
pub use config::{AutofillConfig, FieldConfig, FieldSpec, FormConfig};
pub use controller::{FieldControllerBuilder, FieldValidationController, ValidationCallback};
pub use error::FieldError;
pub use form::FormController;
pub use tracker::{FieldValidationState, InteractionTracker, TouchReason};

pub use rusty_forms_rules::{evaluate, Rule, RuleSet, RuleSpec, ValidationMode, ValidationResult};
