//! Integration tests for loading rule configuration from YAML files

use payment_facts::prelude::*;
use std::io::Write;

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(yaml.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_full_config_file() {
    let file = write_config(
        r#"
stop_on_first_rejection: true
bic:
  allowed_lengths: [8, 11]
  allowed_countries: [GB, NL]
iban:
  min_length: 18
  max_length: 22
"#,
    );

    let config = RulesConfig::from_yaml_file(file.path()).unwrap();
    assert!(config.stop_on_first_rejection);
    assert_eq!(
        config.allowed_countries(),
        Some(&["GB".to_string(), "NL".to_string()][..])
    );
    assert_eq!(config.iban.min_length, 18);
    assert_eq!(config.iban.max_length, 22);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.yaml");

    let err = RulesConfig::from_yaml_file(&path).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_FILE_NOT_FOUND");
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_parse_error_names_the_file() {
    let file = write_config("bic: [unterminated\n");

    let err = RulesConfig::from_yaml_file(file.path()).unwrap_err();
    match err {
        FactsError::Config(ConfigError::ParseError { file: Some(name), .. }) => {
            assert_eq!(name, file.path().display().to_string());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_invalid_values_in_file() {
    let file = write_config("iban:\n  min_length: 2\n");

    let err = RulesConfig::from_yaml_file(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
    match err {
        FactsError::Config(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "iban.min_length")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_loaded_config_drives_rule_set() {
    let file = write_config("iban:\n  min_length: 20\n");
    let config = RulesConfig::from_yaml_file(file.path()).unwrap();
    let rules = RuleSet::iban_defaults(&config);

    let mut request =
        IbanValidationRequest::with_iban("NL91 ABNA 0417 1643 00").expect("IBAN is present");
    assert!(!rules.evaluate(&mut request));
    assert_eq!(request.rejections()[0].rule_name, "IbanLengthRule");
}
