//! Adaptive debounce delay
//!
//! Larger inputs take longer to scan and tokenize, so the engine waits
//! longer for typing to settle before recomputing them.

use std::time::Duration;

const SMALL_INPUT_MAX: usize = 10_000;
const MEDIUM_INPUT_MAX: usize = 50_000;
const LARGE_INPUT_MAX: usize = 100_000;

const SMALL_DELAY_MS: u64 = 300;
const MEDIUM_DELAY_MS: u64 = 600;
const LARGE_DELAY_MS: u64 = 1000;
const HUGE_DELAY_MS: u64 = 2000;

/// Debounce delay for an input of `char_len` characters
pub fn recompute_delay(char_len: usize) -> Duration {
    let ms = if char_len > LARGE_INPUT_MAX {
        HUGE_DELAY_MS
    } else if char_len > MEDIUM_INPUT_MAX {
        LARGE_DELAY_MS
    } else if char_len > SMALL_INPUT_MAX {
        MEDIUM_DELAY_MS
    } else {
        SMALL_DELAY_MS
    };
    Duration::from_millis(ms)
}
