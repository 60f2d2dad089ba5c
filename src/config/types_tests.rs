//! Tests for types

use super::*;
use proptest::prelude::*;

#[test]
fn test_tokens_config_default() {
    let config = TokensConfig::default();
    assert!(!config.enabled);
    assert_eq!(config.model, "gpt-4o");
}

#[test]
fn test_output_format_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn test_parse_tokens_section() {
    let toml = r#"
[tokens]
enabled = true
model = "gpt-3.5-turbo"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(config.tokens.enabled);
    assert_eq!(config.tokens.model, "gpt-3.5-turbo");
}

#[test]
fn test_parse_tokens_enabled_without_model_uses_default() {
    let toml = r#"
[tokens]
enabled = true
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(config.tokens.enabled);
    assert_eq!(config.tokens.model, DEFAULT_MODEL);
}

#[test]
fn test_parse_json_output() {
    let toml = r#"
[output]
format = "json"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.tokens.enabled);
}

#[test]
fn test_empty_file_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert!(!config.tokens.enabled);
    assert_eq!(config.output.format, OutputFormat::Text);
}

// Any format value other than "text" or "json" is rejected by serde
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_invalid_format_rejected(
        format in "[a-z]{3,10}".prop_filter("not valid", |s| s != "text" && s != "json")
    ) {
        let toml_content = format!(r#"
[output]
format = "{}"
"#, format);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_err(), "Invalid format should fail to parse");
    }

    #[test]
    fn prop_valid_format_parses(format in prop::sample::select(vec!["text", "json"])) {
        let toml_content = format!(r#"
[output]
format = "{}"
"#, format);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Valid format should parse");
    }
}
