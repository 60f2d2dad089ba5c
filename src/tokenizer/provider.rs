//! Tokenizer capability traits
//!
//! The engine only needs two things from a tokenizer backend: which
//! encoding a model uses, and an encoder for that encoding. Backends
//! implement `TokenizerProvider`; the statistics scan never sees them.

use std::sync::Arc;

use super::TokenizerError;
use super::models::{Encoding, encoding_for_model};

/// Text to token-id mapping for one encoding
pub trait Encoder: Send + Sync {
    fn encode(&self, text: &str) -> Vec<u32>;
}

/// Source of encoders, keyed by encoding family
pub trait TokenizerProvider: Send + Sync {
    /// Resolve a model name through the fixed model table
    fn resolve_encoding(&self, model_id: &str) -> Result<Encoding, TokenizerError> {
        encoding_for_model(model_id).ok_or_else(|| TokenizerError::UnknownModel(model_id.to_string()))
    }

    /// Load (or fetch from cache) the encoder for `encoding`
    fn load_encoder(&self, encoding: Encoding) -> Result<Arc<dyn Encoder>, TokenizerError>;
}
