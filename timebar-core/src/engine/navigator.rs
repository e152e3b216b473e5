//! Step navigation.
//!
//! Manual jumps always pause the clock first, then resolve the target
//! against the current progression:
//!
//! - Jumping to step 0 from deep inside a later step rewinds that step
//!   instead, unless forced.
//! - Jumping forward starts the bar at the target's cumulative share.
//! - Jumping backward while the active step is partly elapsed restarts the
//!   active step; otherwise it rewinds to the target.
//!
//! An agenda without any duration stays finished: navigation is ignored.

use log::{debug, info};

use super::ProgressionEngine;
use crate::partition::cumulative_percent;

const PERCENT_EPSILON: f64 = 1e-9;

impl ProgressionEngine {
    /// Moves the progression to the start of `target`.
    ///
    /// `target` must lie in `0..=len`, `len` being the finished state.
    pub fn go_to_step(&mut self, target: usize, force: bool) {
        if self.state.total_minutes <= 0.0 {
            debug!("Agenda has no duration; ignoring jump to step {target}");
            return;
        }

        let len = self.agenda.len();
        debug_assert!(target <= len, "step {target} out of range 0..={len}");
        let target = target.min(len);
        let current = self.state.current_step;

        if !self.state.paused {
            self.pause();
        }

        let resolved = if target == 0 {
            let rewind_threshold = self
                .agenda
                .sequence(1)
                .map(|second| 100.0 - second.duration_percent());
            match rewind_threshold {
                Some(threshold)
                    if !force && current < len && self.state.remaining_percent < threshold =>
                {
                    current
                }
                _ => 0,
            }
        } else if target > current {
            target
        } else if self.is_step_partially_elapsed() {
            current
        } else {
            target
        };

        self.commit_step(resolved);
    }

    /// Steps back one sequence; at step 0 this restarts the agenda.
    pub fn previous_step(&mut self) {
        match self.state.current_step {
            0 => self.go_to_step(0, true),
            current => self.go_to_step(current - 1, false),
        }
    }

    /// Steps forward one sequence; does nothing once finished.
    pub fn next_step(&mut self) {
        if self.is_finished() {
            return;
        }
        self.go_to_step(self.state.current_step + 1, false);
    }

    /// Rewinds to the beginning of the agenda.
    pub fn restart(&mut self) {
        self.go_to_step(0, true);
    }

    /// True when the bar has moved since the active step started. The
    /// finished state always counts as fully elapsed.
    fn is_step_partially_elapsed(&self) -> bool {
        if self.is_finished() {
            return false;
        }
        let step_full = 100.0 - self.state.step_start_percent;
        (self.state.remaining_percent - step_full).abs() > PERCENT_EPSILON
    }

    fn commit_step(&mut self, step: usize) {
        let step_start = cumulative_percent(self.agenda.sequences(), step).clamp(0.0, 100.0);

        self.state.current_step = step;
        self.state.step_start_percent = step_start;
        self.state.remaining_percent = (100.0 - step_start).max(0.0);
        self.state.halted = false;

        info!(
            "Moved to step {} of {} (bar at {:.1}%)",
            step,
            self.agenda.len(),
            self.state.remaining_percent
        );

        self.emit_position();
        self.emit_step_labels();
    }
}
