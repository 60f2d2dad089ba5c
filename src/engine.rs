//! Text statistics engine
//!
//! Wraps the scanner and tokenizer in a debounced, cancellable recompute
//! pipeline for interactive callers. One engine serves one text input.

mod delay;
mod engine_state;
mod sink;

pub use delay::recompute_delay;
pub use engine_state::{RecomputeOptions, ReportReader, ScheduleHandle, TextStatisticsEngine};
pub use sink::ReportSink;
