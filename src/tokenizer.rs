//! Token counting behind a pluggable provider
//!
//! Resolves a model name to its encoding, loads an encoder from a
//! `TokenizerProvider` and counts the ids it produces. Every failure on this
//! path is soft: the caller gets a count of 0 and the cause goes to the log.

mod models;
mod provider;
mod tiktoken;

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::error::panic_message;

pub use models::{DEFAULT_MODEL, Encoding, encoding_for_model, supported_models};
pub use provider::{Encoder, TokenizerProvider};
pub use tiktoken::TiktokenProvider;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Unknown tokenizer model: {0}")]
    UnknownModel(String),

    #[error("Failed to load {encoding} encoder: {message}")]
    Load { encoding: Encoding, message: String },

    #[error("Encoder panicked: {0}")]
    EncodePanicked(String),
}

/// Count tokens, propagating every failure
pub fn try_count_tokens(
    provider: &dyn TokenizerProvider,
    text: &str,
    model_id: &str,
) -> Result<usize, TokenizerError> {
    let encoding = provider.resolve_encoding(model_id)?;
    let encoder = provider.load_encoder(encoding)?;

    panic::catch_unwind(AssertUnwindSafe(|| encoder.encode(text).len()))
        .map_err(|payload| TokenizerError::EncodePanicked(panic_message(payload.as_ref())))
}

/// Count tokens for `text` under the encoding of `model_id`
///
/// Yields to the runtime once before encoding so a large input does not
/// hold up whatever else is queued on the same thread. Returns 0 when the
/// model is unknown, the encoder fails to load, or encoding panics.
pub async fn compute_token_count(
    provider: &dyn TokenizerProvider,
    text: &str,
    model_id: &str,
) -> usize {
    tokio::task::yield_now().await;

    match try_count_tokens(provider, text, model_id) {
        Ok(count) => {
            #[cfg(debug_assertions)]
            log::debug!("Counted {} tokens with {}", count, model_id);
            count
        }
        Err(e) => {
            log::warn!("Token counting unavailable for {}: {}", model_id, e);
            0
        }
    }
}
