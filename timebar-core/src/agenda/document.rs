// ============================================================================
// timebar-core/src/agenda/document.rs
// ============================================================================
//
// AGENDA DOCUMENT: On-disk JSON Shape
//
// Documents are hand-written, so parsing is lenient: missing titles take
// their defaults, durations may be numbers or numeric strings, anything
// else counts as zero minutes, and an absent sequence list is an empty
// agenda.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{
    Agenda, DEFAULT_AGENDA_TITLE, DEFAULT_SEQUENCE_TITLE, Sequence, SequenceColor,
};

/// Top-level agenda document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgendaDocument {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub sequences: Vec<SequenceDocument>,
}

/// One sequence entry of an agenda document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SequenceDocument {
    #[serde(default)]
    pub title: Option<String>,

    /// Duration in minutes.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub duration: f64,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl AgendaDocument {
    /// Converts the document into a partitioned agenda.
    pub fn into_agenda(self) -> Agenda {
        let title = self
            .title
            .unwrap_or_else(|| DEFAULT_AGENDA_TITLE.to_string());
        let sequences = self
            .sequences
            .into_iter()
            .map(SequenceDocument::into_sequence)
            .collect();
        Agenda::with_sequences(&title, sequences)
    }
}

impl SequenceDocument {
    fn into_sequence(self) -> Sequence {
        let title = self.title.as_deref().unwrap_or(DEFAULT_SEQUENCE_TITLE);
        let color = self
            .color
            .as_deref()
            .map(SequenceColor::parse_lenient)
            .unwrap_or_default();
        let mut sequence = Sequence::new(title, self.duration, color);
        sequence.extra = self.extra.filter(|extra| !extra.trim().is_empty());
        sequence
    }
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let minutes = match &value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or_else(|_| {
            log::warn!("Unreadable sequence duration '{}', using 0", s);
            0.0
        }),
        Value::Null => 0.0,
        other => {
            log::warn!("Unreadable sequence duration {}, using 0", other);
            0.0
        }
    };

    if minutes.is_finite() && minutes > 0.0 {
        Ok(minutes)
    } else {
        Ok(0.0)
    }
}
