// Shared helpers for timebar-core integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use timebar_core::{Agenda, CoreConfig, Event, EventHandler, ProgressionEngine, Sequence, SequenceColor};

/// Records every event it receives.
#[derive(Default)]
pub struct RecordingHandler {
    events: Mutex<Vec<Event>>,
}

impl RecordingHandler {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn subtitles(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::SubtitleChanged { subtitle } => Some(subtitle),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Event) -> usize {
        self.events().iter().filter(|event| *event == wanted).count()
    }
}

impl EventHandler for RecordingHandler {
    fn handle(&self, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub fn agenda(durations: &[f64]) -> Agenda {
    let colors = [SequenceColor::Green, SequenceColor::Blue, SequenceColor::Red];
    Agenda::with_sequences(
        "Weekly sync",
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| Sequence::new(&format!("Step {i}"), *d, colors[i % colors.len()]))
            .collect(),
    )
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

/// An engine with `durations` installed and a recorder attached.
pub fn engine_with(durations: &[f64]) -> (ProgressionEngine, Arc<RecordingHandler>) {
    let recorder = Arc::new(RecordingHandler::default());
    let mut engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
    engine.add_handler(recorder.clone());
    engine.install_on(agenda(durations), test_date());
    (engine, recorder)
}
