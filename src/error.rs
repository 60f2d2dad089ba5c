use std::any::Any;

use thiserror::Error;

use crate::tokenizer::TokenizerError;

#[derive(Debug, Error)]
pub enum TextStatError {
    #[error("Unknown tokenizer model: {model}\n\nSupported models: {supported}")]
    UnknownModel { model: String, supported: String },

    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("No tokio runtime is running; create the engine inside a runtime or pass a handle")]
    NoRuntime,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Message carried by a caught panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
