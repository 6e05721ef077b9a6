// File: rusty-forms-field/src/form.rs
// Purpose: Group of field controllers with form-level validity and submit handling

use std::collections::BTreeMap;

use rusty_forms_rules::ValidationResult;

use crate::config::FormConfig;
use crate::controller::FieldValidationController;
use crate::error::FieldError;

/// Field controllers of one form, in registration order
///
/// Each field keeps its own state; the form only aggregates.
#[derive(Debug, Default)]
pub struct FormController {
    fields: Vec<FieldValidationController>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount one controller per field declared in `config`, all starting empty
    pub fn from_config(config: &FormConfig) -> Result<Self, FieldError> {
        let mut form = Self::new();

        for (name, spec) in &config.fields {
            let field_config = config.field_config(name)?;
            let controller = FieldValidationController::builder(field_config)
                .enabled(spec.enable_validation)
                .autofill_boxed(config.autofill.detector())
                .mount();
            form.add_field(controller)?;
        }

        tracing::debug!(fields = form.fields.len(), "form mounted from config");
        Ok(form)
    }

    pub fn add_field(&mut self, controller: FieldValidationController) -> Result<(), FieldError> {
        if self.position(controller.field_name()).is_some() {
            return Err(FieldError::DuplicateField(controller.field_name().to_string()));
        }
        self.fields.push(controller);
        Ok(())
    }

    pub fn field(&self, name: &str) -> Result<&FieldValidationController, FieldError> {
        self.position(name)
            .map(|index| &self.fields[index])
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))
    }

    pub fn field_mut(&mut self, name: &str) -> Result<&mut FieldValidationController, FieldError> {
        match self.position(name) {
            Some(index) => Ok(&mut self.fields[index]),
            None => Err(FieldError::UnknownField(name.to_string())),
        }
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldValidationController::field_name).collect()
    }

    /// Latest result per field, in registration order
    pub fn results(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.fields
            .iter()
            .map(|field| (field.field_name(), field.result()))
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldValidationController::is_valid)
    }

    /// Failing fields and their errors
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        self.results()
            .filter(|(_, result)| !result.is_valid())
            .map(|(name, result)| (name.to_string(), result.errors().to_vec()))
            .collect()
    }

    /// Submit: touch every field so all current errors become visible
    ///
    /// Returns whether the form is valid.
    pub fn touch_all(&mut self) -> bool {
        for field in &mut self.fields {
            field.touch();
        }
        self.is_valid()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.field_name() == name)
    }
}
