//! Rusty-Forms WASM
//!
//! WebAssembly bindings for the field validation controller.
//! Input components in the browser create one `FieldController` per field and
//! forward their focus/change/blur events to it; the same rules and display
//! policy run on the server and in the client.

use js_sys::Function;
use rusty_forms_field::{FieldConfig, FieldValidationController};
use rusty_forms_rules::{evaluate, RuleSpec, ValidationMode, ValidationResult};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_rules(rules: JsValue) -> Result<RuleSpec, JsValue> {
    if rules.is_undefined() || rules.is_null() {
        return Ok(RuleSpec::default());
    }
    serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))
}

fn build_config(field_name: &str, spec: &RuleSpec, required: bool) -> Result<FieldConfig, JsValue> {
    FieldConfig::from_spec(field_name, ValidationMode::from_required(required), spec)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn dispatch(callback: &Function, result: &ValidationResult) {
    let payload = match serde_wasm_bindgen::to_value(result) {
        Ok(payload) => payload,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
            return;
        }
    };

    if let Err(err) = callback.call1(&JsValue::NULL, &payload) {
        web_sys::console::error_1(&err);
    }
}

/// Validate a value once, without interaction tracking
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateValue('postal_code', '12', { minLength: 5 }, true);
/// // { isValid: false, errors: ['Postal code must be at least 5 characters'] }
/// ```
#[wasm_bindgen(js_name = validateValue)]
pub fn validate_value(
    field_name: &str,
    value: &str,
    rules: JsValue,
    required: bool,
) -> Result<JsValue, JsValue> {
    let spec = parse_rules(rules)?;
    let config = build_config(field_name, &spec, required)?;
    let result = evaluate(value, config.rules());
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Validation controller for one input element
///
/// # Example (JavaScript)
/// ```javascript
/// const city = new FieldController('city', { minLength: 2 }, true, true, '',
///     (result) => form.setValidity('city', result.isValid));
/// input.addEventListener('focus', () => city.onFocus());
/// input.addEventListener('input', (e) => { city.onChange(e.target.value, prev); prev = e.target.value; });
/// input.addEventListener('blur', () => render(city.visibleErrors()));
/// ```
#[wasm_bindgen]
pub struct FieldController {
    inner: FieldValidationController,
    spec: RuleSpec,
}

#[wasm_bindgen]
impl FieldController {
    #[wasm_bindgen(constructor)]
    pub fn new(
        field_name: &str,
        rules: JsValue,
        required: bool,
        enable_validation: bool,
        initial_value: &str,
        on_validation_change: Option<Function>,
    ) -> Result<FieldController, JsValue> {
        let spec = parse_rules(rules)?;
        let config = build_config(field_name, &spec, required)?;

        let mut builder = FieldValidationController::builder(config)
            .value(initial_value)
            .enabled(enable_validation);
        if let Some(callback) = on_validation_change {
            builder = builder.on_validation_change(move |result| dispatch(&callback, result));
        }

        Ok(Self {
            inner: builder.mount(),
            spec,
        })
    }

    #[wasm_bindgen(js_name = onFocus)]
    pub fn on_focus(&mut self) {
        self.inner.on_focus();
    }

    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, new_value: &str, old_value: &str) {
        self.inner.on_change(new_value, old_value);
    }

    #[wasm_bindgen(js_name = onBlur)]
    pub fn on_blur(&mut self) {
        self.inner.on_blur();
    }

    #[wasm_bindgen(js_name = setEnabled)]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.inner.set_enabled(enabled);
    }

    /// Switch between required and optional, keeping touch state
    #[wasm_bindgen(js_name = setRequired)]
    pub fn set_required(&mut self, required: bool) -> Result<(), JsValue> {
        if self.inner.config().is_required() == required {
            return Ok(());
        }
        let config = build_config(self.inner.field_name(), &self.spec, required)?;
        self.inner.reconfigure(config);
        Ok(())
    }

    /// Replace the field's rules, keeping touch state
    #[wasm_bindgen(js_name = setRules)]
    pub fn set_rules(&mut self, rules: JsValue) -> Result<(), JsValue> {
        let spec = parse_rules(rules)?;
        let config = build_config(self.inner.field_name(), &spec, self.inner.config().is_required())?;
        self.spec = spec;
        self.inner.reconfigure(config);
        Ok(())
    }

    #[wasm_bindgen(js_name = setExternalErrors)]
    pub fn set_external_errors(&mut self, errors: Vec<String>) {
        self.inner.set_external_errors(errors);
    }

    #[wasm_bindgen(js_name = displayErrors)]
    pub fn display_errors(&self) -> Vec<String> {
        self.inner.display_errors().to_vec()
    }

    /// Errors to render, with external errors as the fallback
    #[wasm_bindgen(js_name = visibleErrors)]
    pub fn visible_errors(&self) -> Vec<String> {
        self.inner.visible_errors().to_vec()
    }

    #[wasm_bindgen(js_name = isRequired)]
    pub fn is_required(&self) -> bool {
        self.inner.is_required()
    }

    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    #[wasm_bindgen(js_name = isTouched)]
    pub fn is_touched(&self) -> bool {
        self.inner.is_touched()
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.result())?)
    }
}
