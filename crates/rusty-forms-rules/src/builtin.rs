//! Built-in rule constructors
//!
//! Each constructor takes the field's display label and produces a [`Rule`] with
//! a default message built from it. Only [`required`] rejects an empty value;
//! every other rule passes on `""` so an optional field stays valid until the
//! user types something.

use email_address::EmailAddress;
use regex::Regex;

use crate::error::RuleError;
use crate::rule::Rule;

pub const REQUIRED: &str = "required";
pub const MIN_LENGTH: &str = "minLength";
pub const MAX_LENGTH: &str = "maxLength";
pub const PATTERN: &str = "pattern";
pub const EMAIL: &str = "email";
pub const URL: &str = "url";
pub const ONE_OF: &str = "oneOf";
pub const CONTAINS: &str = "contains";
pub const STARTS_WITH: &str = "startsWith";
pub const ENDS_WITH: &str = "endsWith";

/// Presence: fails on empty or whitespace-only values
pub fn required(label: &str) -> Rule {
    Rule::new(REQUIRED, format!("{} is required", label), |value: &str| {
        !value.trim().is_empty()
    })
}

/// Lower length bound, counted in characters
pub fn min_length(label: &str, min: usize) -> Rule {
    Rule::new(
        MIN_LENGTH,
        format!("{} must be at least {} characters", label, min),
        move |value: &str| value.is_empty() || value.chars().count() >= min,
    )
}

/// Upper length bound, counted in characters
pub fn max_length(label: &str, max: usize) -> Rule {
    Rule::new(
        MAX_LENGTH,
        format!("{} must be at most {} characters", label, max),
        move |value: &str| value.chars().count() <= max,
    )
}

/// Format check against a regular expression
///
/// The pattern is compiled once, here; a bad pattern is a configuration error,
/// not a validation failure.
pub fn pattern(label: &str, pattern: &str) -> Result<Rule, RuleError> {
    let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        field: label.to_string(),
        source,
    })?;

    Ok(Rule::new(
        PATTERN,
        format!("{} format is invalid", label),
        move |value: &str| value.is_empty() || regex.is_match(value),
    ))
}

/// RFC 5322 email address
pub fn email(label: &str) -> Rule {
    Rule::new(
        EMAIL,
        format!("{} must be a valid email address", label),
        |value: &str| value.is_empty() || EmailAddress::is_valid(value),
    )
}

/// Absolute http(s) URL
pub fn url(label: &str) -> Rule {
    Rule::new(URL, format!("{} must be a valid URL", label), |value: &str| {
        value.is_empty() || is_http_url(value)
    })
}

fn is_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

/// Value restricted to a fixed list
pub fn one_of(label: &str, allowed: Vec<String>) -> Rule {
    let message = format!("{} must be one of: {}", label, allowed.join(", "));
    Rule::new(ONE_OF, message, move |value: &str| {
        value.is_empty() || allowed.iter().any(|candidate| candidate == value)
    })
}

pub fn contains(label: &str, needle: impl Into<String>) -> Rule {
    let needle = needle.into();
    let message = format!("{} must contain '{}'", label, needle);
    Rule::new(CONTAINS, message, move |value: &str| {
        value.is_empty() || value.contains(needle.as_str())
    })
}

pub fn starts_with(label: &str, prefix: impl Into<String>) -> Rule {
    let prefix = prefix.into();
    let message = format!("{} must start with '{}'", label, prefix);
    Rule::new(STARTS_WITH, message, move |value: &str| {
        value.is_empty() || value.starts_with(prefix.as_str())
    })
}

pub fn ends_with(label: &str, suffix: impl Into<String>) -> Rule {
    let suffix = suffix.into();
    let message = format!("{} must end with '{}'", label, suffix);
    Rule::new(ENDS_WITH, message, move |value: &str| {
        value.is_empty() || value.ends_with(suffix.as_str())
    })
}

/// Caller-supplied predicate
pub fn custom<F>(name: impl Into<String>, message: impl Into<String>, predicate: F) -> Rule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Rule::new(name, message, predicate)
}
