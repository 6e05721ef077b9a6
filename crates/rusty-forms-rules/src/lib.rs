//! Rusty-Forms Rules
//!
//! The data side of field validation: a [`Rule`] pairs a name and a message with a
//! predicate over the field's string value, a [`RuleSet`] keeps rules in the order
//! their failures are reported, and [`evaluate`] turns a value plus rules into a
//! [`ValidationResult`].
//!
//! Rule sets are usually built from a declarative [`RuleSpec`] (the same camelCase
//! shape the client-side bindings accept), or assembled by hand from the
//! [`builtin`] constructors.
//!
//! ```rust
//! use rusty_forms_rules::{builtin, evaluate, RuleSet};
//!
//! let rules = RuleSet::from_rules([
//!     builtin::required("Username"),
//!     builtin::min_length("Username", 3),
//! ])
//! .unwrap();
//!
//! let result = evaluate("ab", &rules);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors(), ["Username must be at least 3 characters"]);
//! ```

pub mod builtin;
pub mod error;
pub mod evaluator;
pub mod result;
pub mod rule;
pub mod spec;

pub use error::RuleError;
pub use evaluator::{evaluate, failing_rules};
pub use result::ValidationResult;
pub use rule::{Rule, RuleSet};
pub use spec::{humanize_field_name, RuleSpec, ValidationMode};
