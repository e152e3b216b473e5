//! Sequence colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Color of a sequence segment on the bar.
///
/// Agenda documents name colors either plainly (`"green"`) or with the
/// Bootstrap background classes the web version used (`"bg-success"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
    Purple,
    Pink,
    Teal,
    Gray,
}

impl SequenceColor {
    pub const ALL: [SequenceColor; 9] = [
        SequenceColor::Blue,
        SequenceColor::Green,
        SequenceColor::Red,
        SequenceColor::Yellow,
        SequenceColor::Orange,
        SequenceColor::Purple,
        SequenceColor::Pink,
        SequenceColor::Teal,
        SequenceColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SequenceColor::Blue => "blue",
            SequenceColor::Green => "green",
            SequenceColor::Red => "red",
            SequenceColor::Yellow => "yellow",
            SequenceColor::Orange => "orange",
            SequenceColor::Purple => "purple",
            SequenceColor::Pink => "pink",
            SequenceColor::Teal => "teal",
            SequenceColor::Gray => "gray",
        }
    }

    /// Parses a document color, falling back to the default on unknown names.
    pub fn parse_lenient(value: &str) -> Self {
        match value.parse() {
            Ok(color) => color,
            Err(_) => {
                log::warn!("Unknown sequence color '{}', using {}", value, SequenceColor::default());
                SequenceColor::default()
            }
        }
    }
}

impl fmt::Display for SequenceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SequenceColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let color = match normalized.as_str() {
            "blue" | "bg-primary" | "primary" => SequenceColor::Blue,
            "green" | "bg-success" | "success" => SequenceColor::Green,
            "red" | "bg-danger" | "danger" => SequenceColor::Red,
            "yellow" | "bg-warning" | "warning" => SequenceColor::Yellow,
            "orange" => SequenceColor::Orange,
            "purple" | "violet" | "indigo" => SequenceColor::Purple,
            "pink" => SequenceColor::Pink,
            "teal" | "cyan" | "bg-info" | "info" => SequenceColor::Teal,
            "gray" | "grey" | "bg-secondary" | "secondary" | "bg-dark" | "dark" => {
                SequenceColor::Gray
            }
            _ => {
                return Err(CoreError::AgendaParse(format!("unknown color '{s}'")));
            }
        };
        Ok(color)
    }
}
