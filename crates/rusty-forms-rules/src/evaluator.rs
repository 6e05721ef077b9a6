// File: rusty-forms-rules/src/evaluator.rs
// Purpose: Pure evaluation of a value against an ordered rule list

use crate::result::ValidationResult;
use crate::rule::Rule;

/// Evaluate `value` against `rules`
///
/// Every rule runs; there is no early exit. Each failing rule contributes its
/// message, in rule order. An empty rule list always yields a valid result.
pub fn evaluate(value: &str, rules: &[Rule]) -> ValidationResult {
    let errors = rules
        .iter()
        .filter(|rule| !rule.check(value))
        .map(|rule| rule.message().to_string())
        .collect();

    ValidationResult::from_errors(errors)
}

/// Names of the rules `value` fails, in rule order
pub fn failing_rules<'a>(value: &str, rules: &'a [Rule]) -> Vec<&'a str> {
    rules
        .iter()
        .filter(|rule| !rule.check(value))
        .map(Rule::name)
        .collect()
}
