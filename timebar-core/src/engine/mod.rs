// ============================================================================
// timebar-core/src/engine/mod.rs
// ============================================================================
//
// PROGRESSION ENGINE: Countdown State and Display Events
//
// The engine owns the installed agenda and its progression state. Every
// mutation (install, tick, navigation, pause) runs to completion and reports
// its visible effects through the event dispatcher.
//
// KEY COMPONENTS:
// - state: ProgressionState, ProgressSnapshot, TickOutcome
// - clock: tick() and the virtual clock advance()
// - navigator: go_to_step() and the previous/next/restart controls
//
// AI-ASSISTANT-INFO: Countdown engine, all mutable state of a session lives here

mod clock;
mod navigator;
mod state;

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info};

use crate::agenda::Agenda;
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::events::{BarSegment, Event, EventDispatcher, EventHandler};
use crate::utils::{format_date, format_duration, millis_for_display};

pub use state::{ProgressSnapshot, ProgressionState, TickOutcome, tick_margin_percent};

/// Drives the countdown of one agenda at a time.
#[derive(Debug)]
pub struct ProgressionEngine {
    config: CoreConfig,
    agenda: Agenda,
    state: ProgressionState,
    dispatcher: EventDispatcher,
    sound_enabled: bool,
}

impl ProgressionEngine {
    /// Creates an engine with an empty agenda installed.
    ///
    /// # Returns
    ///
    /// * `Ok(ProgressionEngine)` - The engine, finished and paused
    /// * `Err(CoreError::Config)` - If the configuration is invalid
    pub fn new(config: CoreConfig) -> CoreResult<Self> {
        config.validate()?;
        let state = ProgressionState::new(0.0, config.tick_ms);
        Ok(Self {
            sound_enabled: config.sound_enabled,
            config,
            agenda: Agenda::default(),
            state,
            dispatcher: EventDispatcher::new(),
        })
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.dispatcher.add_handler(handler);
    }

    /// Installs an agenda dated today.
    pub fn install(&mut self, agenda: Agenda) {
        self.install_on(agenda, chrono::Local::now().date_naive());
    }

    /// Installs an agenda, resetting the progression to step 0 with a full,
    /// paused bar, and emits the load events.
    ///
    /// An agenda without any duration is finished as soon as it is installed.
    pub fn install_on(&mut self, mut agenda: Agenda, date: NaiveDate) {
        agenda.repartition();

        let mut state = ProgressionState::new(agenda.total_minutes(), self.config.tick_ms);
        if agenda.total_minutes() <= 0.0 {
            state.current_step = agenda.len();
        }

        info!(
            "Installing agenda '{}': {} sequences, {} min",
            agenda.title,
            agenda.len(),
            agenda.total_minutes()
        );

        self.agenda = agenda;
        self.state = state;

        let segments = self
            .agenda
            .sequences()
            .iter()
            .map(|s| BarSegment {
                title: s.title.clone(),
                percent: s.duration_percent(),
                color: s.color,
            })
            .collect();

        self.emit(Event::TitleChanged {
            title: self.agenda.title.clone(),
        });
        self.emit(Event::DateChanged {
            date: format_date(date, &self.config.date_format),
        });
        self.emit(Event::BarSegmentsRendered { segments });
        self.emit(Event::PauseChanged { paused: true });
        self.emit_position();
        self.emit_step_labels();
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    pub fn is_finished(&self) -> bool {
        self.state.current_step >= self.agenda.len()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        debug!("Transition sound {}", if enabled { "enabled" } else { "disabled" });
        self.sound_enabled = enabled;
    }

    /// Time left on the whole agenda, projected from the bar.
    pub fn remaining_millis(&self) -> u64 {
        millis_for_display(self.state.total_millis() * self.state.remaining_percent / 100.0)
    }

    /// Time left in the active sequence; zero once finished.
    pub fn sequence_remaining_millis(&self) -> u64 {
        match self.agenda.sequence(self.state.current_step) {
            Some(sequence) => {
                let consumed =
                    self.state.total_millis() * (100.0 - self.state.remaining_percent) / 100.0;
                millis_for_display(sequence.end_at_minutes() * 60_000.0 - consumed)
            }
            None => 0,
        }
    }

    pub fn pause(&mut self) {
        self.set_paused(true);
    }

    pub fn resume(&mut self) {
        self.set_paused(false);
    }

    /// Flips the clock between running and paused, or sets it when `force`
    /// is given. Elapsed time and bar position are kept either way.
    pub fn toggle_start_pause(&mut self, force: Option<bool>) {
        let paused = force.unwrap_or(!self.state.paused);
        self.set_paused(paused);
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            agenda_title: self.agenda.title.clone(),
            step_index: self.state.current_step,
            step_count: self.agenda.len(),
            sequence_title: self
                .agenda
                .sequence(self.state.current_step)
                .map(|s| s.title.clone()),
            bar_percent: self.state.remaining_percent,
            progress_percent: self.state.progress_percent(),
            remaining_millis: self.remaining_millis(),
            sequence_remaining_millis: self.sequence_remaining_millis(),
            elapsed_millis: self.state.elapsed_millis,
            paused: self.state.paused,
            finished: self.is_finished(),
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if self.state.paused == paused {
            return;
        }
        self.state.paused = paused;
        debug!("Clock {}", if paused { "paused" } else { "running" });
        self.emit(Event::PauseChanged { paused });
    }

    fn emit(&self, event: Event) {
        self.dispatcher.emit(event);
    }

    /// Bar width and the two remaining-time readouts.
    fn emit_position(&self) {
        let remaining = self.remaining_millis();
        let sequence_remaining = self.sequence_remaining_millis();
        self.emit(Event::BarWidthChanged {
            percent: self.state.remaining_percent,
        });
        self.emit(Event::RemainingTimeChanged {
            millis: remaining,
            text: format_duration(remaining),
        });
        self.emit(Event::SequenceRemainingTimeChanged {
            millis: sequence_remaining,
            text: format_duration(sequence_remaining),
        });
    }

    /// Subtitle and extra text of the active step, or the finished label.
    fn emit_step_labels(&self) {
        match self.agenda.sequence(self.state.current_step) {
            Some(sequence) => {
                self.emit(Event::SubtitleChanged {
                    subtitle: sequence.title.clone(),
                });
                self.emit(Event::ExtraChanged {
                    extra: sequence.extra.clone(),
                });
            }
            None => {
                self.emit(Event::SubtitleChanged {
                    subtitle: self.config.finished_label.clone(),
                });
                self.emit(Event::ExtraChanged { extra: None });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::{Sequence, SequenceColor};
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<Event>>);

    impl EventHandler for Recorder {
        fn handle(&self, event: &Event) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn agenda(durations: &[f64]) -> Agenda {
        Agenda::with_sequences(
            "Weekly",
            durations
                .iter()
                .enumerate()
                .map(|(i, d)| Sequence::new(&format!("S{i}"), *d, SequenceColor::Green))
                .collect(),
        )
    }

    #[test]
    fn test_new_engine_is_finished() {
        let engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
        assert!(engine.is_finished());
        assert!(engine.is_paused());
        assert_eq!(engine.remaining_millis(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CoreConfig {
            tick_ms: 0,
            ..CoreConfig::default()
        };
        assert!(ProgressionEngine::new(config).is_err());
    }

    #[test]
    fn test_install_emits_load_events() {
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let mut engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
        engine.add_handler(recorder.clone());

        engine.install_on(agenda(&[1.0, 2.0, 1.0]), date());

        let events = recorder.0.lock().unwrap();
        assert_eq!(
            events[0],
            Event::TitleChanged {
                title: "Weekly".to_string()
            }
        );
        assert_eq!(
            events[1],
            Event::DateChanged {
                date: "02/05/2024".to_string()
            }
        );
        match &events[2] {
            Event::BarSegmentsRendered { segments } => {
                let percents: Vec<f64> = segments.iter().map(|s| s.percent).collect();
                assert_eq!(percents, vec![25.0, 50.0, 25.0]);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(events.contains(&Event::RemainingTimeChanged {
            millis: 240_000,
            text: "04:00".to_string()
        }));
        assert!(events.contains(&Event::SequenceRemainingTimeChanged {
            millis: 60_000,
            text: "01:00".to_string()
        }));
        assert!(events.contains(&Event::SubtitleChanged {
            subtitle: "S0".to_string()
        }));
    }

    #[test]
    fn test_zero_duration_agenda_is_finished_at_install() {
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let mut engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
        engine.add_handler(recorder.clone());

        engine.install_on(agenda(&[0.0, 0.0]), date());

        assert!(engine.is_finished());
        assert_eq!(engine.current_step(), 2);
        assert!(recorder.0.lock().unwrap().contains(&Event::SubtitleChanged {
            subtitle: "Finished !".to_string()
        }));
    }

    #[test]
    fn test_toggle_start_pause() {
        let mut engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
        engine.install_on(agenda(&[1.0]), date());
        assert!(engine.is_paused());

        engine.toggle_start_pause(None);
        assert!(!engine.is_paused());
        engine.toggle_start_pause(Some(true));
        assert!(engine.is_paused());
        engine.toggle_start_pause(Some(true));
        assert!(engine.is_paused());
        engine.toggle_start_pause(Some(false));
        assert!(!engine.is_paused());
    }

    #[test]
    fn test_snapshot_of_fresh_agenda() {
        let mut engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
        engine.install_on(agenda(&[1.0, 2.0, 1.0]), date());

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.agenda_title, "Weekly");
        assert_eq!(snapshot.step_index, 0);
        assert_eq!(snapshot.step_count, 3);
        assert_eq!(snapshot.sequence_title.as_deref(), Some("S0"));
        assert_eq!(snapshot.bar_percent, 100.0);
        assert_eq!(snapshot.remaining_millis, 240_000);
        assert!(snapshot.paused);
        assert!(!snapshot.finished);
    }
}
