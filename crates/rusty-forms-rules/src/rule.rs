// File: rusty-forms-rules/src/rule.rs
// Purpose: Rule data unit and ordered, name-unique rule sets

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::RuleError;

/// Predicate over a field value. Must be total: no panics for any input.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single validation rule
///
/// The predicate returns `true` when the value passes. The message is what the
/// evaluator reports when it returns `false`.
#[derive(Clone)]
pub struct Rule {
    name: String,
    message: String,
    validator: Predicate,
}

impl Rule {
    pub fn new<F>(name: impl Into<String>, message: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: message.into(),
            validator: Arc::new(validator),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the failure message, keeping name and predicate
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Run the predicate against a value
    pub fn check(&self, value: &str) -> bool {
        (self.validator)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered sequence of rules with unique names
///
/// Order is significant: it is the order in which failure messages are reported.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from rules in declaration order
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self, RuleError> {
        let mut set = Self::new();
        for rule in rules {
            set.push(rule)?;
        }
        Ok(set)
    }

    /// Append a rule, rejecting a name already present in the set
    pub fn push(&mut self, rule: Rule) -> Result<(), RuleError> {
        if self.contains(rule.name()) {
            return Err(RuleError::DuplicateRule(rule.name().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Insert a rule ahead of every existing rule
    pub fn prepend(&mut self, rule: Rule) -> Result<(), RuleError> {
        if self.contains(rule.name()) {
            return Err(RuleError::DuplicateRule(rule.name().to_string()));
        }
        self.rules.insert(0, rule);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    /// Rule names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

impl Deref for RuleSet {
    type Target = [Rule];

    fn deref(&self) -> &Self::Target {
        &self.rules
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
