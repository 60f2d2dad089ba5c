//! Tests for config

use super::*;
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));
    assert!(result.warning.is_none());
    assert!(!result.config.tokens.enabled);
    assert_eq!(result.config.output.format, OutputFormat::Text);
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config(
        r#"
[tokens]
enabled = true
model = "gpt-4"

[output]
format = "json"
"#,
    );
    let result = load_config_from(file.path());
    assert!(result.warning.is_none());
    assert!(result.config.tokens.enabled);
    assert_eq!(result.config.tokens.model, "gpt-4");
    assert_eq!(result.config.output.format, OutputFormat::Json);
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let file = write_config("[tokens\nenabled = true");
    let result = load_config_from(file.path());
    let warning = result.warning.expect("malformed config should warn");
    assert!(warning.starts_with("Invalid config:"));
    assert!(!result.config.tokens.enabled);
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(dir.path());
    let warning = result.warning.expect("directory should not parse as config");
    assert!(warning.starts_with("Failed to read config:"));
}

#[test]
fn test_config_path_location() {
    let path = get_config_path();
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("textstat/config.toml") || path_str.ends_with("textstat\\config.toml"),
        "Config path should end with textstat/config.toml, got: {}",
        path_str
    );
}

// Malformed TOML always produces defaults plus a warning
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[tokens\nenabled = true",          // Missing closing bracket
            "[tokens]\nenabled = yes",          // Not a boolean literal
            "[tokens]\n enabled",               // Missing value
            "tokens]\nenabled = true",          // Missing opening bracket
            "[tokens]\nmodel = \"gpt-4",        // Unterminated string
            "[output]\nformat = \"xml\"",       // Unknown format
        ])
    ) {
        let file = write_config(malformed);
        let result = load_config_from(file.path());
        prop_assert!(result.warning.is_some());
        prop_assert!(!result.config.tokens.enabled);
        prop_assert_eq!(result.config.output.format, OutputFormat::Text);
    }
}
