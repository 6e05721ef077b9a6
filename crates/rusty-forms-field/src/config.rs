// File: rusty-forms-field/src/config.rs
// Purpose: Field configuration and form-level settings parsed from rusty-forms.toml

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusty_forms_rules::{RuleError, RuleSet, RuleSpec, ValidationMode};
use serde::{Deserialize, Serialize};

use crate::autofill::{AutofillDetector, EditSpanDetector, NeverAutofill, DEFAULT_MIN_INSERTED_CHARS};
use crate::error::FieldError;

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "rusty-forms.toml";

/// Validation configuration for one field
///
/// Built fresh whenever the field's mode or rule set changes and handed to the
/// controller through [`reconfigure`](crate::FieldValidationController::reconfigure).
#[derive(Debug, Clone)]
pub struct FieldConfig {
    field_name: String,
    mode: ValidationMode,
    rules: RuleSet,
}

impl FieldConfig {
    pub fn new(field_name: impl Into<String>, mode: ValidationMode, rules: RuleSet) -> Self {
        Self {
            field_name: field_name.into(),
            mode,
            rules,
        }
    }

    /// Build from a declarative spec; the presence rule follows `mode`
    pub fn from_spec(
        field_name: impl Into<String>,
        mode: ValidationMode,
        spec: &RuleSpec,
    ) -> Result<Self, RuleError> {
        let field_name = field_name.into();
        let rules = spec.build(&field_name, mode)?;
        Ok(Self::new(field_name, mode, rules))
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn is_required(&self) -> bool {
        self.mode.is_required()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

/// Form configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub autofill: AutofillConfig,

    /// Field specs keyed by field name
    #[serde(default)]
    pub fields: BTreeMap<String, FieldSpec>,
}

/// Autofill heuristic settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutofillConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Growth, in characters, within one change that counts as autofill
    #[serde(default = "default_min_inserted_chars")]
    pub min_inserted_chars: usize,
}

/// One field entry under `[fields.<name>]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[serde(default)]
    pub required: bool,

    #[serde(default = "default_true")]
    pub enable_validation: bool,

    #[serde(flatten)]
    pub rules: RuleSpec,

    /// Keys neither the field nor its rules recognize, e.g. a misspelled rule
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

fn default_true() -> bool {
    true
}

fn default_min_inserted_chars() -> usize {
    DEFAULT_MIN_INSERTED_CHARS
}

impl Default for AutofillConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_inserted_chars: default_min_inserted_chars(),
        }
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            required: false,
            enable_validation: true,
            rules: RuleSpec::default(),
            unknown: BTreeMap::new(),
        }
    }
}

impl AutofillConfig {
    /// Detector matching these settings
    pub fn detector(&self) -> Box<dyn AutofillDetector> {
        if self.enabled {
            Box::new(EditSpanDetector::new(self.min_inserted_chars))
        } else {
            Box::new(NeverAutofill)
        }
    }
}

impl FieldSpec {
    pub fn mode(&self) -> ValidationMode {
        ValidationMode::from_required(self.required)
    }

    pub fn unknown_keys(&self) -> Vec<&str> {
        self.unknown.keys().map(String::as_str).collect()
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "no form config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./rusty-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: FormConfig = toml::from_str(content)?;

        for (name, spec) in &config.fields {
            for key in spec.unknown.keys() {
                tracing::warn!(field = %name, key = %key, "unknown key in field config is ignored");
            }
        }

        Ok(config)
    }

    /// Build the [`FieldConfig`] for a named field
    pub fn field_config(&self, field_name: &str) -> Result<FieldConfig, FieldError> {
        let spec = self
            .fields
            .get(field_name)
            .ok_or_else(|| FieldError::UnknownField(field_name.to_string()))?;

        Ok(FieldConfig::from_spec(field_name, spec.mode(), &spec.rules)?)
    }
}
