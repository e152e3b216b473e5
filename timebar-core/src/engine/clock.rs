//! Progression clock.
//!
//! Each tick shrinks the bar by the tick margin and adds the tick period to
//! the elapsed time. A step is crossed once its within-step percent reaches
//! its share of the bar; a drained bar crosses every step still active.

use std::time::Duration;

use log::{debug, info};

use super::{ProgressionEngine, TickOutcome};
use crate::events::Event;
use crate::utils::round1;

impl ProgressionEngine {
    /// Advances the clock by one period.
    pub fn tick(&mut self) -> TickOutcome {
        let len = self.agenda.len();
        if self.state.paused
            || self.state.halted
            || self.state.current_step >= len
            || self.state.tick_margin_percent <= 0.0
        {
            return TickOutcome::Skipped;
        }

        self.state.remaining_percent -= self.state.tick_margin_percent;
        self.state.elapsed_millis += self.config.tick_ms;
        if self.state.remaining_percent <= 0.0 {
            self.state.remaining_percent = 0.0;
            self.state.halted = true;
            debug!("Bar drained after {} ms", self.state.elapsed_millis);
        }

        let mut crossed = false;
        while self.state.current_step < len
            && (self.state.halted || self.within_step_percent() >= self.current_share())
        {
            self.advance_step();
            crossed = true;
        }

        self.emit_position();

        if crossed {
            if self.sound_enabled {
                self.emit(Event::TransitionSoundRequested);
            }
            TickOutcome::Crossed {
                into: self.state.current_step,
            }
        } else {
            TickOutcome::Progressed
        }
    }

    /// Runs as many ticks as fit in `duration`, stopping early once a tick
    /// is skipped. Returns the number of ticks applied.
    pub fn advance(&mut self, duration: Duration) -> u64 {
        let ticks = duration.as_millis() / u128::from(self.config.tick_ms);
        let mut applied = 0;
        for _ in 0..ticks {
            if self.tick() == TickOutcome::Skipped {
                break;
            }
            applied += 1;
        }
        applied
    }

    /// Percent of the bar consumed since the active step started.
    fn within_step_percent(&self) -> f64 {
        round1(100.0 - self.state.remaining_percent - self.state.step_start_percent)
    }

    fn current_share(&self) -> f64 {
        self.agenda
            .sequence(self.state.current_step)
            .map_or(0.0, |s| s.duration_percent())
    }

    /// Moves the step start past the active sequence and enters the next
    /// one, or the finished state.
    fn advance_step(&mut self) {
        let share = self.current_share();
        self.state.step_start_percent = round1(self.state.step_start_percent + share).min(100.0);
        self.state.current_step += 1;

        match self.agenda.sequence(self.state.current_step) {
            Some(sequence) => info!(
                "Entering sequence {} '{}'",
                self.state.current_step, sequence.title
            ),
            None => info!("Agenda '{}' finished", self.agenda.title),
        }
        self.emit_step_labels();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::{Agenda, Sequence, SequenceColor};
    use crate::config::CoreConfig;
    use chrono::NaiveDate;

    fn engine(durations: &[f64]) -> ProgressionEngine {
        let agenda = Agenda::with_sequences(
            "Clock",
            durations
                .iter()
                .map(|d| Sequence::new("S", *d, SequenceColor::Blue))
                .collect(),
        );
        let mut engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
        engine.install_on(agenda, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        engine
    }

    #[test]
    fn test_paused_tick_is_skipped() {
        let mut engine = engine(&[1.0]);
        assert_eq!(engine.tick(), TickOutcome::Skipped);
        assert_eq!(engine.state().elapsed_millis, 0);
        assert_eq!(engine.state().remaining_percent, 100.0);
    }

    #[test]
    fn test_tick_consumes_margin() {
        let mut engine = engine(&[1.0]);
        engine.resume();
        assert_eq!(engine.tick(), TickOutcome::Progressed);
        assert_eq!(engine.state().elapsed_millis, 10);
        assert!((engine.state().remaining_percent - (100.0 - 1.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_crossing_at_share() {
        let mut engine = engine(&[1.0, 2.0, 1.0]);
        engine.resume();

        // 59 s into a four-minute agenda: still in the first sequence
        engine.advance(Duration::from_secs(59));
        assert_eq!(engine.current_step(), 0);

        engine.advance(Duration::from_secs(2));
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.state().step_start_percent, 25.0);
    }

    #[test]
    fn test_rounded_shares_above_hundred_still_finish() {
        // seven shares of 14.3 sum to 100.1
        let mut engine = engine(&[1.0; 7]);
        engine.resume();
        let applied = engine.advance(Duration::from_secs(8 * 60));
        assert!(engine.is_finished());
        assert!(engine.is_halted());
        assert!((42_000..=42_001).contains(&applied));
        assert_eq!(engine.state().remaining_percent, 0.0);
        assert_eq!(engine.tick(), TickOutcome::Skipped);
    }

    #[test]
    fn test_zero_duration_agenda_never_ticks() {
        let mut engine = engine(&[0.0]);
        engine.resume();
        assert_eq!(engine.tick(), TickOutcome::Skipped);
        assert_eq!(engine.advance(Duration::from_secs(10)), 0);
    }
}
