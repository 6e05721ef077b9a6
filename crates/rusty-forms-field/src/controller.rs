// File: rusty-forms-field/src/controller.rs
// Purpose: Field validation controller binding the evaluator, the interaction
// tracker, autofill detection and the validation-changed callback

use rusty_forms_rules::{evaluate, ValidationMode, ValidationResult};

use crate::autofill::{AutofillDetector, EditSpanDetector};
use crate::config::FieldConfig;
use crate::tracker::{FieldValidationState, InteractionTracker, TouchReason};

/// Callback receiving the full current result after every relevant transition
pub type ValidationCallback = Box<dyn FnMut(&ValidationResult)>;

/// Validation controller for a single field
///
/// Owns the field's interaction state. The hosting component owns the value and
/// reports it through [`on_change`](Self::on_change); the controller never writes
/// the value back.
///
/// Callback contract: `on_validation_change` fires once on mount, on every value
/// change, on the first touch, on enable/disable and on reconfiguration. It always
/// receives the full result, touched or not.
///
/// ```rust
/// use rusty_forms_field::{FieldConfig, FieldValidationController};
/// use rusty_forms_rules::{RuleSpec, ValidationMode};
///
/// let config = FieldConfig::from_spec("city", ValidationMode::Required, &RuleSpec::default()).unwrap();
/// let mut field = FieldValidationController::builder(config).mount();
///
/// field.on_focus();
/// assert!(field.display_errors().is_empty());
/// field.on_blur();
/// assert_eq!(field.display_errors(), ["City is required"]);
/// ```
pub struct FieldValidationController {
    config: FieldConfig,
    enabled: bool,
    tracker: InteractionTracker,
    result: ValidationResult,
    external_errors: Vec<String>,
    autofill: Box<dyn AutofillDetector>,
    callback: Option<ValidationCallback>,
}

/// Builder for [`FieldValidationController`]; [`mount`](Self::mount) performs the
/// initial evaluation and the first callback.
pub struct FieldControllerBuilder {
    config: FieldConfig,
    value: String,
    enabled: bool,
    external_errors: Vec<String>,
    autofill: Box<dyn AutofillDetector>,
    callback: Option<ValidationCallback>,
}

impl FieldControllerBuilder {
    /// Initial field value (default empty)
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Whether validation starts enabled (default true)
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Errors supplied by the host, shown only while validation is off
    pub fn external_errors(mut self, errors: Vec<String>) -> Self {
        self.external_errors = errors;
        self
    }

    pub fn autofill<D>(mut self, detector: D) -> Self
    where
        D: AutofillDetector + 'static,
    {
        self.autofill = Box::new(detector);
        self
    }

    pub fn autofill_boxed(mut self, detector: Box<dyn AutofillDetector>) -> Self {
        self.autofill = detector;
        self
    }

    pub fn on_validation_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ValidationResult) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn mount(self) -> FieldValidationController {
        let mut controller = FieldValidationController {
            config: self.config,
            enabled: self.enabled,
            tracker: InteractionTracker::new(self.value),
            result: ValidationResult::valid(),
            external_errors: self.external_errors,
            autofill: self.autofill,
            callback: self.callback,
        };

        tracing::debug!(
            field = controller.config.field_name(),
            enabled = controller.enabled,
            mode = %controller.config.mode(),
            "mounting field validation"
        );

        controller.revalidate();
        controller.notify();
        controller
    }
}

impl FieldValidationController {
    pub fn builder(config: FieldConfig) -> FieldControllerBuilder {
        FieldControllerBuilder {
            config,
            value: String::new(),
            enabled: true,
            external_errors: Vec::new(),
            autofill: Box::new(EditSpanDetector::default()),
            callback: None,
        }
    }

    /// Focus handler; never changes touch state or visible errors
    pub fn on_focus(&mut self) {
        self.tracker.focus();
    }

    /// Change handler
    ///
    /// `old_value` is what the input held before this change; it only feeds
    /// autofill detection. A detected autofill touches the field at once so the
    /// filled value is checked without waiting for a blur.
    pub fn on_change(&mut self, new_value: &str, old_value: &str) {
        if self.enabled
            && !self.tracker.is_touched()
            && self.autofill.is_autofill(old_value, new_value)
        {
            tracing::debug!(field = self.config.field_name(), "autofill detected");
            self.tracker.touch(TouchReason::Autofill);
        }

        self.tracker.record_value(new_value);
        self.revalidate();
        self.notify();
    }

    /// Change handler using the last recorded value as the previous value
    pub fn on_input(&mut self, new_value: &str) {
        let old_value = self.tracker.state().last_value().to_string();
        self.on_change(new_value, &old_value);
    }

    /// Blur handler; the first blur touches the field
    ///
    /// A disabled field only loses focus and stays untouched.
    pub fn on_blur(&mut self) {
        if !self.enabled {
            self.tracker.unfocus();
            return;
        }

        if self.tracker.blur() {
            self.tracker.surface(&self.result);
            tracing::trace!(field = self.config.field_name(), "field touched on blur");
            self.notify();
        }
    }

    /// Touch the field without a blur, as a form submit does; no-op while disabled
    pub fn touch(&mut self) {
        if self.enabled && self.tracker.touch(TouchReason::Submit) {
            self.tracker.surface(&self.result);
            self.notify();
        }
    }

    /// Turn validation on or off
    ///
    /// Turning it off is a hard reset: untouched, no visible errors, and the callback
    /// receives a valid, empty result whatever the value. Turning it back on starts
    /// from an untouched field.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }

        tracing::debug!(field = self.config.field_name(), enabled, "validation toggled");
        self.enabled = enabled;
        self.tracker.reset();
        self.revalidate();
        self.notify();
    }

    /// Swap in a new configuration (rule set and/or mode)
    ///
    /// The current value is re-evaluated under the new rules. Touch state is kept:
    /// a field the user already left stays touched when it switches between required
    /// and optional.
    pub fn reconfigure(&mut self, config: FieldConfig) {
        tracing::debug!(
            field = config.field_name(),
            mode = %config.mode(),
            rules = config.rules().len(),
            "reconfiguring field validation"
        );

        self.config = config;
        self.revalidate();
        self.notify();
    }

    /// Replace the host-supplied error list
    pub fn set_external_errors(&mut self, errors: Vec<String>) {
        self.external_errors = errors;
    }

    /// Errors computed by this controller that are currently visible
    pub fn display_errors(&self) -> &[String] {
        self.tracker.state().display_errors()
    }

    /// Errors the field should render
    ///
    /// While validation is enabled and the field has rules, controller errors win
    /// and external errors are hidden. A disabled field, or one with an empty rule
    /// set, shows the external list.
    pub fn visible_errors(&self) -> &[String] {
        if self.enabled && !self.config.rules().is_empty() {
            self.display_errors()
        } else {
            &self.external_errors
        }
    }

    /// Whether to render a required marker
    pub fn is_required(&self) -> bool {
        self.enabled && self.config.mode() == ValidationMode::Required
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Latest result, as last reported to the callback
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn state(&self) -> &FieldValidationState {
        self.tracker.state()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field_name(&self) -> &str {
        self.config.field_name()
    }

    pub fn value(&self) -> &str {
        self.tracker.state().last_value()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_touched(&self) -> bool {
        self.tracker.is_touched()
    }

    fn revalidate(&mut self) {
        self.result = if self.enabled {
            evaluate(self.tracker.state().last_value(), self.config.rules())
        } else {
            ValidationResult::valid()
        };
        self.tracker.surface(&self.result);
    }

    fn notify(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            tracing::trace!(
                field = self.config.field_name(),
                is_valid = self.result.is_valid(),
                errors = self.result.errors().len(),
                "validation changed"
            );
            callback(&self.result);
        }
    }
}

impl std::fmt::Debug for FieldValidationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidationController")
            .field("config", &self.config)
            .field("enabled", &self.enabled)
            .field("state", self.tracker.state())
            .field("result", &self.result)
            .field("external_errors", &self.external_errors)
            .finish_non_exhaustive()
    }
}
