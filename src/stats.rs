//! Stats module for computing text statistics
//!
//! A single linear scan classifies every character and tracks word, line
//! and paragraph boundaries. Token counts are attached later by the engine.

mod render;
mod scanner;
mod types;

// Re-export public types
pub use render::render_report;
pub use scanner::{CharClass, compute_basic_statistics};
pub use types::{TextStatisticsReport, TokenCount};
