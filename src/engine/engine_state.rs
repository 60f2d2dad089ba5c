//! Debounced recomputation of text statistics
//!
//! Each `schedule_recompute` call starts a new cycle with its own
//! generation number and cancellation token, and invalidates the previous
//! cycle. A cycle sleeps for the adaptive delay, publishes the basic report,
//! then optionally publishes a pending token state followed by the final
//! count. Every publication re-checks the generation under the slot lock, so
//! a superseded cycle can never overwrite a newer report. The sink is called
//! after the slot lock is released.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use super::delay::recompute_delay;
use super::sink::ReportSink;
use crate::error::{TextStatError, panic_message};
use crate::stats::{TextStatisticsReport, TokenCount, compute_basic_statistics};
use crate::tokenizer::{DEFAULT_MODEL, TokenizerProvider, compute_token_count};

/// Options for one recompute cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeOptions {
    /// Also run the tokenizer after the basic report
    pub token_count_enabled: bool,
    /// Model whose encoding the tokenizer uses
    pub tokenizer_id: String,
}

impl Default for RecomputeOptions {
    fn default() -> Self {
        Self {
            token_count_enabled: false,
            tokenizer_id: DEFAULT_MODEL.to_string(),
        }
    }
}

impl RecomputeOptions {
    pub fn with_tokens(tokenizer_id: impl Into<String>) -> Self {
        Self {
            token_count_enabled: true,
            tokenizer_id: tokenizer_id.into(),
        }
    }
}

#[derive(Debug, Default)]
struct ReportSlot {
    /// Generation of the only cycle allowed to publish (0 before the first)
    generation: u64,
    latest: Option<TextStatisticsReport>,
    /// Current generation has not finished publishing
    pending: bool,
}

impl ReportSlot {
    /// Move to a new generation, invalidating every earlier cycle
    fn advance(&mut self, pending: bool) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        // Skip 0 on wrap (means "nothing scheduled")
        if self.generation == 0 {
            self.generation = 1;
        }
        self.pending = pending;
        self.generation
    }
}

struct Shared {
    slot: Mutex<ReportSlot>,
    /// Held across check, write and sink call so deliveries keep slot order
    delivery: Mutex<()>,
    sink: Box<dyn ReportSink>,
    provider: Arc<dyn TokenizerProvider>,
}

impl Shared {
    fn lock_slot(&self) -> MutexGuard<'_, ReportSlot> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn advance(&self, pending: bool) -> u64 {
        self.lock_slot().advance(pending)
    }

    /// Publish the report built by `build` if `generation` is still current
    ///
    /// `build` receives the latest published report. Returns false when the
    /// cycle is stale and nothing was published. A panicking sink is logged
    /// and does not affect the slot.
    fn publish<F>(&self, generation: u64, done: bool, build: F) -> bool
    where
        F: FnOnce(Option<TextStatisticsReport>) -> TextStatisticsReport,
    {
        let _delivery = match self.delivery.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let report = {
            let mut slot = self.lock_slot();
            if slot.generation != generation {
                #[cfg(debug_assertions)]
                log::debug!(
                    "Discarding stale report from cycle {} (current: {})",
                    generation,
                    slot.generation
                );
                return false;
            }

            let report = build(slot.latest);
            slot.latest = Some(report);
            if done {
                slot.pending = false;
            }
            report
        };

        let delivered =
            panic::catch_unwind(AssertUnwindSafe(|| self.sink.on_report_updated(&report)));
        if let Err(payload) = delivered {
            log::warn!(
                "Report sink panicked on cycle {}: {}",
                generation,
                panic_message(payload.as_ref())
            );
        }
        true
    }
}

impl std::fmt::Debug for Shared {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shared")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

/// Cancellable handle to one scheduled cycle
#[derive(Debug, Clone)]
pub struct ScheduleHandle {
    generation: u64,
    cancel_token: CancellationToken,
    shared: Weak<Shared>,
}

impl ScheduleHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Cancel this cycle if it is still the engine's current one
    ///
    /// A handle to a cycle that was already superseded leaves the newer cycle
    /// untouched.
    pub fn cancel(&self) {
        let Some(shared) = self.shared.upgrade() else {
            self.cancel_token.cancel();
            return;
        };

        let mut slot = shared.lock_slot();
        if slot.generation == self.generation {
            self.cancel_token.cancel();
            slot.advance(false);
            #[cfg(debug_assertions)]
            log::debug!("Cancelled cycle {}", self.generation);
        }
    }
}

/// Read-only view of an engine's report slot
///
/// Cheap to clone and safe to use from inside a `ReportSink`. Reads return
/// `None` or defaults once the engine is dropped.
#[derive(Debug, Clone)]
pub struct ReportReader {
    shared: Weak<Shared>,
}

impl ReportReader {
    pub fn latest(&self) -> Option<TextStatisticsReport> {
        self.shared.upgrade().and_then(|shared| shared.lock_slot().latest)
    }

    pub fn generation(&self) -> u64 {
        self.shared
            .upgrade()
            .map_or(0, |shared| shared.lock_slot().generation)
    }

    pub fn is_pending(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.lock_slot().pending)
    }
}

/// Debounced text statistics engine for one text input
///
/// Owns the latest-report slot for its input; dropping the engine cancels
/// any cycle still pending.
pub struct TextStatisticsEngine {
    shared: Arc<Shared>,
    runtime: Handle,
    /// Cancellation token for the current cycle
    current_cancel_token: Option<CancellationToken>,
}

impl TextStatisticsEngine {
    /// Create an engine on the tokio runtime the caller is running in
    pub fn new<S>(provider: Arc<dyn TokenizerProvider>, sink: S) -> Result<Self, TextStatError>
    where
        S: ReportSink + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| TextStatError::NoRuntime)?;
        Ok(Self::with_handle(runtime, provider, sink))
    }

    /// Create an engine that spawns its cycles on `runtime`
    pub fn with_handle<S>(runtime: Handle, provider: Arc<dyn TokenizerProvider>, sink: S) -> Self
    where
        S: ReportSink + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(ReportSlot::default()),
                delivery: Mutex::new(()),
                sink: Box::new(sink),
                provider,
            }),
            runtime,
            current_cancel_token: None,
        }
    }

    /// Schedule a recomputation of `text`, superseding any pending one
    ///
    /// The delay is chosen from the length of this text, not the previous
    /// one. Returns a handle that can cancel the new cycle.
    pub fn schedule_recompute(
        &mut self,
        text: impl Into<String>,
        options: RecomputeOptions,
    ) -> ScheduleHandle {
        let text = text.into();

        if let Some(token) = self.current_cancel_token.take() {
            token.cancel();
        }
        let generation = self.shared.advance(true);

        let delay = recompute_delay(text.chars().count());
        #[cfg(debug_assertions)]
        log::debug!(
            "Scheduling cycle {} in {:?} (tokens: {})",
            generation,
            delay,
            options.token_count_enabled
        );

        let cancel_token = CancellationToken::new();
        self.current_cancel_token = Some(cancel_token.clone());

        let shared = Arc::clone(&self.shared);
        let task_token = cancel_token.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    #[cfg(debug_assertions)]
                    log::debug!("Cycle {} cancelled before firing", generation);
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }
            run_cycle(&shared, generation, &text, &options).await;
        });

        ScheduleHandle {
            generation,
            cancel_token,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Cancel the pending cycle, if any
    ///
    /// Results of a cycle already past its delay are discarded on arrival.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current_cancel_token.take() {
            token.cancel();
            self.shared.advance(false);
            #[cfg(debug_assertions)]
            log::debug!("Cancelled pending cycle (now at generation {})", self.generation());
        }
    }

    /// Reader that shares this engine's report slot
    pub fn reader(&self) -> ReportReader {
        ReportReader {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Latest published report
    pub fn latest(&self) -> Option<TextStatisticsReport> {
        self.shared.lock_slot().latest
    }

    /// Generation of the most recent cycle
    pub fn generation(&self) -> u64 {
        self.shared.lock_slot().generation
    }

    /// Whether the current cycle still has publications outstanding
    pub fn is_pending(&self) -> bool {
        self.shared.lock_slot().pending
    }
}

impl Drop for TextStatisticsEngine {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_cycle(shared: &Shared, generation: u64, text: &str, options: &RecomputeOptions) {
    let report = compute_basic_statistics(text);
    let tokens = options.token_count_enabled;

    if !shared.publish(generation, !tokens, |_| report) {
        return;
    }
    if !tokens {
        return;
    }

    if !shared.publish(generation, false, |latest| {
        latest.unwrap_or(report).with_tokens(TokenCount::Pending)
    }) {
        return;
    }

    let count = compute_token_count(shared.provider.as_ref(), text, &options.tokenizer_id).await;

    shared.publish(generation, true, |latest| {
        latest.unwrap_or(report).with_tokens(TokenCount::Counted(count))
    });
}

#[cfg(test)]
#[path = "engine_state_tests.rs"]
mod engine_state_tests;
