/// Loading rusty-forms.toml from disk and mounting a form from it
use std::fs;

use rusty_forms_field::{FormConfig, FormController};
use tempfile::TempDir;

const ADDRESS_FORM: &str = r#"
[autofill]
min_inserted_chars = 5

[fields.street]
required = true
minLength = 3

[fields.postal_code]
required = true
label = "Postal code"
minLength = 5
maxLength = 10
pattern = "^[0-9A-Za-z -]+$"

[fields.postal_code.messages]
pattern = "Postal code may only contain letters, digits, spaces and dashes"
"#;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = FormConfig::load(dir.path().join("rusty-forms.toml")).unwrap();
    assert!(config.fields.is_empty());
    assert!(config.autofill.enabled);
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rusty-forms.toml");
    fs::write(&path, "   \n").unwrap();
    assert!(FormConfig::load(&path).unwrap().fields.is_empty());
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rusty-forms.toml");
    fs::write(&path, "[fields.city\nrequired = ").unwrap();

    let err = FormConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn address_form_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rusty-forms.toml");
    fs::write(&path, ADDRESS_FORM).unwrap();

    let config = FormConfig::load(&path).unwrap();
    assert_eq!(config.autofill.min_inserted_chars, 5);

    let mut form = FormController::from_config(&config).unwrap();
    assert_eq!(form.field_names(), vec!["postal_code", "street"]);

    let postal = form.field_mut("postal_code").unwrap();
    postal.on_change("12#", "");
    // three characters is below the configured autofill threshold
    assert!(!postal.is_touched());
    postal.on_blur();
    assert_eq!(
        postal.display_errors(),
        [
            "Postal code must be at least 5 characters",
            "Postal code may only contain letters, digits, spaces and dashes",
        ]
    );

    assert!(!form.touch_all());
    assert_eq!(
        form.field("street").unwrap().display_errors(),
        ["Street is required"]
    );
}

#[test]
fn bad_pattern_in_file_fails_form_mount() {
    let config = FormConfig::parse(
        r#"
        [fields.username]
        pattern = "(["
        "#,
    )
    .unwrap();

    let err = FormController::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("invalid pattern"));
}
