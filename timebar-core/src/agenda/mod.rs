//! Agenda model.
//!
//! An [`Agenda`] is an ordered list of timed [`Sequence`]s. The derived
//! fields of each sequence (its share of the bar and its start and end
//! offsets) are written only by [`crate::partition::partition`], which runs
//! whenever the sequence list changes.

mod color;
mod document;
mod library;

use serde::Serialize;

use crate::partition;

pub use color::SequenceColor;
pub use document::{AgendaDocument, SequenceDocument};
pub use library::AgendaLibrary;

/// Title given to agendas that do not name themselves.
pub const DEFAULT_AGENDA_TITLE: &str = "New meeting";

/// Title given to sequences that do not name themselves.
pub const DEFAULT_SEQUENCE_TITLE: &str = "New sequence";

/// One timed segment of an agenda.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    pub title: String,
    pub duration_minutes: f64,
    pub color: SequenceColor,
    pub extra: Option<String>,

    pub(crate) duration_percent: f64,
    pub(crate) begin_at_minutes: f64,
    pub(crate) end_at_minutes: f64,
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE_TITLE, 0.0, SequenceColor::default())
    }
}

impl Sequence {
    pub fn new(title: &str, duration_minutes: f64, color: SequenceColor) -> Self {
        Self {
            title: title.to_string(),
            duration_minutes,
            color,
            extra: None,
            duration_percent: 0.0,
            begin_at_minutes: 0.0,
            end_at_minutes: 0.0,
        }
    }

    /// Attaches the free text shown while this sequence is active.
    pub fn with_extra(mut self, extra: &str) -> Self {
        self.extra = Some(extra.to_string());
        self
    }

    /// Share of the whole bar, in percent rounded to one decimal.
    pub fn duration_percent(&self) -> f64 {
        self.duration_percent
    }

    pub fn begin_at_minutes(&self) -> f64 {
        self.begin_at_minutes
    }

    pub fn end_at_minutes(&self) -> f64 {
        self.end_at_minutes
    }
}

/// A meeting agenda: a title and its ordered sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agenda {
    pub title: String,
    sequences: Vec<Sequence>,
    total_minutes: f64,
}

impl Default for Agenda {
    fn default() -> Self {
        Self::new(DEFAULT_AGENDA_TITLE)
    }
}

impl Agenda {
    /// Creates an empty agenda.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sequences: Vec::new(),
            total_minutes: 0.0,
        }
    }

    /// Creates an agenda from a list of sequences and partitions it.
    pub fn with_sequences(title: &str, sequences: Vec<Sequence>) -> Self {
        let mut agenda = Self {
            title: title.to_string(),
            sequences,
            total_minutes: 0.0,
        };
        agenda.repartition();
        agenda
    }

    /// Parses an agenda document from JSON text.
    pub fn from_json_str(json: &str) -> crate::CoreResult<Self> {
        let document: AgendaDocument = serde_json::from_str(json)
            .map_err(|e| crate::CoreError::AgendaParse(e.to_string()))?;
        Ok(document.into_agenda())
    }

    pub fn push_sequence(&mut self, sequence: Sequence) {
        self.sequences.push(sequence);
        self.repartition();
    }

    /// Removes and returns the sequence at `index`, or `None` when out of range.
    pub fn remove_sequence(&mut self, index: usize) -> Option<Sequence> {
        if index >= self.sequences.len() {
            return None;
        }
        let removed = self.sequences.remove(index);
        self.repartition();
        Some(removed)
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn sequence(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Sum of all sequence durations, in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    pub(crate) fn repartition(&mut self) {
        self.total_minutes = partition::partition(&mut self.sequences);
    }
}
