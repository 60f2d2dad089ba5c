//! tiktoken-backed tokenizer provider

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tiktoken_rs::CoreBPE;

use super::TokenizerError;
use super::models::Encoding;
use super::provider::{Encoder, TokenizerProvider};

struct BpeEncoder {
    bpe: CoreBPE,
}

impl Encoder for BpeEncoder {
    fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_with_special_tokens(text)
    }
}

/// Provider that builds encoders with `tiktoken-rs`
///
/// Building a BPE table is expensive, so each encoding is loaded once and
/// kept for the lifetime of the provider.
#[derive(Default)]
pub struct TiktokenProvider {
    cache: Mutex<HashMap<Encoding, Arc<dyn Encoder>>>,
}

impl TiktokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(encoding: Encoding) -> Result<CoreBPE, TokenizerError> {
        let result = match encoding {
            Encoding::O200kBase => tiktoken_rs::o200k_base(),
            Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
            Encoding::P50kBase => tiktoken_rs::p50k_base(),
            Encoding::R50kBase => tiktoken_rs::r50k_base(),
        };
        result.map_err(|e| TokenizerError::Load {
            encoding,
            message: e.to_string(),
        })
    }
}

impl TokenizerProvider for TiktokenProvider {
    fn load_encoder(&self, encoding: Encoding) -> Result<Arc<dyn Encoder>, TokenizerError> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(encoder) = cache.get(&encoding) {
            return Ok(Arc::clone(encoder));
        }

        #[cfg(debug_assertions)]
        log::debug!("Loading {} encoder", encoding);
        let encoder: Arc<dyn Encoder> = Arc::new(BpeEncoder {
            bpe: Self::build(encoding)?,
        });
        cache.insert(encoding, Arc::clone(&encoder));
        Ok(encoder)
    }
}
