// Configuration type definitions

use serde::Deserialize;

use crate::tokenizer::DEFAULT_MODEL;

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Token counting configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TokensConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for TokensConfig {
    fn default() -> Self {
        TokensConfig {
            enabled: false,
            model: default_model(),
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tokens: TokensConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
