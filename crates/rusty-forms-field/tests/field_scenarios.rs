/// End-to-end behaviour of the field controller as a hosting input drives it:
/// focus/change/blur sequences, enable toggles, mode switches and the
/// validation-changed callback.
use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_forms_field::{
    FieldConfig, FieldValidationController, NeverAutofill, RuleSet, RuleSpec, ValidationMode,
    ValidationResult,
};
use rusty_forms_rules::builtin;

type Calls = Rc<RefCell<Vec<ValidationResult>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn recorder() -> (Calls, impl FnMut(&ValidationResult) + 'static) {
    let calls: Calls = Rc::default();
    let sink = Rc::clone(&calls);
    (calls, move |result: &ValidationResult| {
        sink.borrow_mut().push(result.clone())
    })
}

fn state_spec() -> RuleSpec {
    RuleSpec {
        label: Some("State".into()),
        min_length: Some(2),
        ..Default::default()
    }
}

#[test]
fn required_empty_focus_then_blur() {
    init_tracing();
    let (calls, callback) = recorder();
    let config = FieldConfig::from_spec("city", ValidationMode::Required, &RuleSpec::default()).unwrap();
    let mut field = FieldValidationController::builder(config)
        .on_validation_change(callback)
        .mount();

    field.on_focus();
    assert!(field.display_errors().is_empty());
    field.on_blur();

    let expected = ValidationResult::from_errors(vec!["City is required".into()]);
    assert_eq!(calls.borrow().last(), Some(&expected));
    assert_eq!(field.display_errors(), ["City is required"]);
}

#[test]
fn optional_too_short_then_fixed_without_second_blur() {
    init_tracing();
    let config = FieldConfig::from_spec("state", ValidationMode::Optional, &state_spec()).unwrap();
    let mut field = FieldValidationController::builder(config).mount();

    field.on_focus();
    field.on_change("A", "");
    field.on_blur();
    assert_eq!(field.display_errors(), ["State must be at least 2 characters"]);

    field.on_focus();
    field.on_change("AB", "A");
    assert!(field.display_errors().is_empty());
    assert!(field.is_valid());
}

#[test]
fn callback_fires_before_anything_is_displayed() {
    let (calls, callback) = recorder();
    let config = FieldConfig::from_spec("state", ValidationMode::Optional, &state_spec()).unwrap();
    let mut field = FieldValidationController::builder(config)
        .autofill(NeverAutofill)
        .on_validation_change(callback)
        .mount();

    field.on_change("X", "");
    assert!(field.display_errors().is_empty());
    assert_eq!(calls.borrow().len(), 2);
    assert!(!calls.borrow()[1].is_valid());
}

#[test]
fn disabling_reports_valid_even_for_invalid_value() {
    let (calls, callback) = recorder();
    let config = FieldConfig::from_spec("state", ValidationMode::Required, &state_spec()).unwrap();
    let mut field = FieldValidationController::builder(config)
        .value("X")
        .on_validation_change(callback)
        .mount();

    field.on_blur();
    assert_eq!(field.display_errors(), ["State must be at least 2 characters"]);

    field.set_enabled(false);
    assert!(field.display_errors().is_empty());
    assert_eq!(calls.borrow().last(), Some(&ValidationResult::valid()));
}

#[test]
fn external_errors_suppressed_while_validating() {
    let config = FieldConfig::from_spec("state", ValidationMode::Required, &state_spec()).unwrap();
    let mut field = FieldValidationController::builder(config)
        .value("X")
        .external_errors(vec!["Server rejected state".into()])
        .mount();

    field.on_blur();
    assert_eq!(field.visible_errors(), ["State must be at least 2 characters"]);
}

#[test]
fn external_errors_shown_when_validation_off() {
    let config = FieldConfig::from_spec("state", ValidationMode::Required, &state_spec()).unwrap();
    let field = FieldValidationController::builder(config)
        .enabled(false)
        .external_errors(vec!["Server rejected state".into()])
        .mount();

    assert_eq!(field.visible_errors(), ["Server rejected state"]);
    assert!(!field.is_required());
}

#[test]
fn max_length_and_format_reported_in_declaration_order() {
    let rules = RuleSet::from_rules([
        builtin::max_length("Postal code", 5),
        builtin::pattern("Postal code", "^[0-9]+$").unwrap(),
    ])
    .unwrap();
    let config = FieldConfig::new("postal_code", ValidationMode::Optional, rules);
    let mut field = FieldValidationController::builder(config).mount();

    field.on_change("ABCDEFG", "");
    assert_eq!(
        field.result().errors(),
        [
            "Postal code must be at most 5 characters",
            "Postal code format is invalid",
        ]
    );
    // Seven characters at once counts as autofill
    assert_eq!(field.display_errors(), field.result().errors());
}

#[rstest]
#[case(ValidationMode::Required, ValidationMode::Optional)]
#[case(ValidationMode::Optional, ValidationMode::Required)]
fn mode_switch_keeps_touch(#[case] from: ValidationMode, #[case] to: ValidationMode) {
    let config = FieldConfig::from_spec("state", from, &state_spec()).unwrap();
    let mut field = FieldValidationController::builder(config).mount();
    field.on_blur();

    field.reconfigure(FieldConfig::from_spec("state", to, &state_spec()).unwrap());
    assert!(field.is_touched());
    assert_eq!(field.display_errors(), field.result().errors());
    assert_eq!(field.is_required(), to == ValidationMode::Required);
}

#[test]
fn events_processed_in_arrival_order() {
    let (calls, callback) = recorder();
    let config = FieldConfig::from_spec("state", ValidationMode::Required, &state_spec()).unwrap();
    let mut field = FieldValidationController::builder(config)
        .autofill(NeverAutofill)
        .on_validation_change(callback)
        .mount();

    field.on_focus();
    field.on_change("N", "");
    field.on_blur();
    field.on_focus();
    field.on_change("NY", "N");
    field.on_change("N", "NY");

    let history: Vec<bool> = calls.borrow().iter().map(ValidationResult::is_valid).collect();
    // mount, "N", first blur, "NY", "N"
    assert_eq!(history, vec![false, false, false, true, false]);
    assert_eq!(field.display_errors(), ["State must be at least 2 characters"]);
    assert_eq!(field.value(), "N");
}

#[rstest]
#[case("Shelby-vil1")]
#[case("N.Y.")]
fn autofill_replacing_a_value_is_surfaced_at_once(#[case] filled: &str) {
    let spec = RuleSpec {
        pattern: Some("^[A-Za-z]+$".into()),
        ..Default::default()
    };
    let config = FieldConfig::from_spec("city", ValidationMode::Required, &spec).unwrap();
    let mut field = FieldValidationController::builder(config)
        .value("Springfield")
        .mount();
    assert!(field.is_valid());

    field.on_change(filled, "Springfield");
    assert!(field.is_touched());
    assert_eq!(field.display_errors(), ["City format is invalid"]);
}

#[test]
fn typing_over_a_selection_is_not_autofill() {
    let config = FieldConfig::from_spec("city", ValidationMode::Required, &RuleSpec::default()).unwrap();
    let mut field = FieldValidationController::builder(config)
        .value("Springfield")
        .mount();

    field.on_change("S", "Springfield");
    field.on_change("Sp", "S");
    assert!(!field.is_touched());
    assert!(field.display_errors().is_empty());
}
