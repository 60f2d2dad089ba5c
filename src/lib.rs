//! textstat library - text statistics with debounced recomputation
//!
//! Character, word, line and paragraph counts from a single linear scan,
//! optional token counts through a pluggable tokenizer, and an engine that
//! debounces recomputation for interactive text inputs.

pub mod config;
pub mod engine;
pub mod error;
pub mod stats;
pub mod tokenizer;

// Re-export commonly used types for convenience
pub use config::Config;
pub use engine::{
    RecomputeOptions, ReportReader, ReportSink, ScheduleHandle, TextStatisticsEngine,
};
pub use error::TextStatError;
pub use stats::{TextStatisticsReport, TokenCount, compute_basic_statistics};
pub use tokenizer::{TiktokenProvider, TokenizerProvider, compute_token_count};
