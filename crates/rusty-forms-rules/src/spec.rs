// File: rusty-forms-rules/src/spec.rs
// Purpose: Declarative rule specs (JSON/TOML) compiled into rule sets

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::error::RuleError;
use crate::rule::{Rule, RuleSet};

/// Whether a field must be filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Required,
    #[default]
    Optional,
}

impl ValidationMode {
    pub fn from_required(required: bool) -> Self {
        if required {
            Self::Required
        } else {
            Self::Optional
        }
    }

    pub fn is_required(self) -> bool {
        self == Self::Required
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMode::Required => write!(f, "required"),
            ValidationMode::Optional => write!(f, "optional"),
        }
    }
}

/// Declarative description of a field's rules
///
/// Accepts the same camelCase keys as the client-side `data-validate` JSON:
///
/// ```json
/// { "label": "Postal code", "minLength": 5, "maxLength": 10, "pattern": "^[0-9]+$" }
/// ```
///
/// Presence is not part of the spec; it comes from the [`ValidationMode`] passed to
/// [`RuleSpec::build`], so switching a field between required and optional never
/// requires a different spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleSpec {
    /// Display label used in messages; derived from the field name when absent
    pub label: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub email: bool,
    pub url: bool,
    pub one_of: Option<Vec<String>>,
    pub contains: Option<String>,
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    /// Message overrides keyed by rule name (`required`, `minLength`, `pattern`, ...)
    pub messages: BTreeMap<String, String>,
}

impl RuleSpec {
    /// Label used in default messages
    pub fn label_for(&self, field_name: &str) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| humanize_field_name(field_name))
    }

    /// Compile the spec into an ordered rule set
    ///
    /// Order is fixed: presence (when required), length bounds, then format checks.
    pub fn build(&self, field_name: &str, mode: ValidationMode) -> Result<RuleSet, RuleError> {
        let label = self.label_for(field_name);
        let mut rules: Vec<Rule> = Vec::new();

        if mode.is_required() {
            rules.push(builtin::required(&label));
        }
        if let Some(min) = self.min_length {
            rules.push(builtin::min_length(&label, min));
        }
        if let Some(max) = self.max_length {
            rules.push(builtin::max_length(&label, max));
        }
        if let Some(ref pattern) = self.pattern {
            rules.push(builtin::pattern(&label, pattern)?);
        }
        if self.email {
            rules.push(builtin::email(&label));
        }
        if self.url {
            rules.push(builtin::url(&label));
        }
        if let Some(ref allowed) = self.one_of {
            rules.push(builtin::one_of(&label, allowed.clone()));
        }
        if let Some(ref needle) = self.contains {
            rules.push(builtin::contains(&label, needle.clone()));
        }
        if let Some(ref prefix) = self.starts_with {
            rules.push(builtin::starts_with(&label, prefix.clone()));
        }
        if let Some(ref suffix) = self.ends_with {
            rules.push(builtin::ends_with(&label, suffix.clone()));
        }

        for name in self.messages.keys() {
            if !rules.iter().any(|rule| rule.name() == name) {
                tracing::warn!(
                    field = field_name,
                    rule = name.as_str(),
                    "message override for a rule the field does not have"
                );
            }
        }

        let rules = rules.into_iter().map(|rule| match self.messages.get(rule.name()) {
            Some(message) => rule.with_message(message.clone()),
            None => rule,
        });

        RuleSet::from_rules(rules)
    }
}

/// Turn a field identifier into a display label
///
/// `postal_code`, `postal-code` and `postalCode` all become `Postal code`.
pub fn humanize_field_name(field_name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in field_name.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.extend(c.to_lowercase());
        } else {
            current.extend(c.to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
