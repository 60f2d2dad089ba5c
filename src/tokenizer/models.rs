//! Fixed lookup table from model name to tokenizer encoding
//!
//! The encoding is a property of the model: callers pick a model and never
//! choose an encoding directly.

use std::fmt;

/// Model used when neither the CLI nor the config names one
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// BPE encoding families understood by the tokenizer providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    O200kBase,
    Cl100kBase,
    P50kBase,
    R50kBase,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::O200kBase => "o200k_base",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::R50kBase => "r50k_base",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const MODEL_ENCODINGS: &[(&str, Encoding)] = &[
    ("gpt-4o", Encoding::O200kBase),
    ("gpt-4o-mini", Encoding::O200kBase),
    ("o1", Encoding::O200kBase),
    ("o3-mini", Encoding::O200kBase),
    ("gpt-4", Encoding::Cl100kBase),
    ("gpt-4-turbo", Encoding::Cl100kBase),
    ("gpt-3.5-turbo", Encoding::Cl100kBase),
    ("text-embedding-ada-002", Encoding::Cl100kBase),
    ("text-embedding-3-small", Encoding::Cl100kBase),
    ("text-embedding-3-large", Encoding::Cl100kBase),
    ("text-davinci-003", Encoding::P50kBase),
    ("text-davinci-002", Encoding::P50kBase),
    ("code-davinci-002", Encoding::P50kBase),
    ("davinci", Encoding::R50kBase),
    ("curie", Encoding::R50kBase),
    ("babbage", Encoding::R50kBase),
    ("ada", Encoding::R50kBase),
];

/// Look up the encoding a model uses
pub fn encoding_for_model(model_id: &str) -> Option<Encoding> {
    MODEL_ENCODINGS
        .iter()
        .find(|(name, _)| *name == model_id)
        .map(|(_, encoding)| *encoding)
}

/// All model names accepted by `encoding_for_model`, in table order
pub fn supported_models() -> impl Iterator<Item = &'static str> {
    MODEL_ENCODINGS.iter().map(|(name, _)| *name)
}
