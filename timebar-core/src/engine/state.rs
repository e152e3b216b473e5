//! Progression state and its read-only views.

use serde::Serialize;

/// Mutable countdown state of an installed agenda.
///
/// `current_step == len` is the finished state. The bar shrinks from 100
/// to 0; `remaining_percent = 100 - step_start_percent - progress_within_step`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionState {
    pub current_step: usize,
    pub step_start_percent: f64,
    pub remaining_percent: f64,
    pub elapsed_millis: u64,
    pub paused: bool,
    /// Bar drained; ticking stays stopped until navigation refills it.
    pub halted: bool,
    pub total_minutes: f64,
    pub tick_margin_percent: f64,
}

impl ProgressionState {
    /// Fresh state for an agenda of `total_minutes`, clock paused at step 0.
    pub fn new(total_minutes: f64, tick_ms: u64) -> Self {
        Self {
            current_step: 0,
            step_start_percent: 0.0,
            remaining_percent: 100.0,
            elapsed_millis: 0,
            paused: true,
            halted: false,
            total_minutes,
            tick_margin_percent: tick_margin_percent(tick_ms, total_minutes),
        }
    }

    pub fn total_millis(&self) -> f64 {
        self.total_minutes * 60_000.0
    }

    /// Percent of the whole bar already consumed.
    pub fn progress_percent(&self) -> f64 {
        (100.0 - self.remaining_percent).clamp(0.0, 100.0)
    }
}

/// Percent of the bar consumed by one tick.
///
/// Zero for a zero-duration agenda, which never starts its clock.
pub fn tick_margin_percent(tick_ms: u64, total_minutes: f64) -> f64 {
    if total_minutes > 0.0 {
        tick_ms as f64 * 100.0 / (total_minutes * 60_000.0)
    } else {
        0.0
    }
}

/// Serializable view of the engine at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub agenda_title: String,
    pub step_index: usize,
    pub step_count: usize,
    pub sequence_title: Option<String>,
    pub bar_percent: f64,
    pub progress_percent: f64,
    pub remaining_millis: u64,
    pub sequence_remaining_millis: u64,
    pub elapsed_millis: u64,
    pub paused: bool,
    pub finished: bool,
}

/// Result of a single clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused, finished, halted or zero-duration agenda.
    Skipped,
    Progressed,
    /// One or more boundaries were crossed; `into` is the new step index.
    Crossed { into: usize },
}
