//! JSON event handler for structured countdown output
//!
//! This module provides an event handler that writes every display event as
//! one JSON object per line, for consumption by external tools. Per-tick
//! events are throttled so that a line is only written when the visible
//! value changes.

use super::{Event, EventHandler};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Default)]
struct ThrottleState {
    bar_percent: Option<u32>,
    remaining_text: Option<String>,
    sequence_remaining_text: Option<String>,
}

/// Event handler that outputs display events as structured JSON lines
pub struct JsonEventHandler {
    output: Mutex<Box<dyn Write + Send>>,
    throttle: Mutex<ThrottleState>,
}

impl Default for JsonEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEventHandler {
    /// Create a new JSON event handler that writes to stdout
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Create a new JSON event handler with a custom writer
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            output: Mutex::new(writer),
            throttle: Mutex::new(ThrottleState::default()),
        }
    }

    /// Get current timestamp as seconds since Unix epoch
    fn get_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    /// Returns false when a per-tick event would repeat what was last written.
    fn should_write(&self, event: &Event) -> bool {
        let mut throttle = match self.throttle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match event {
            Event::BarWidthChanged { percent } => {
                let whole = percent.max(0.0).floor() as u32;
                if throttle.bar_percent == Some(whole) {
                    return false;
                }
                throttle.bar_percent = Some(whole);
                true
            }
            Event::RemainingTimeChanged { text, .. } => {
                if throttle.remaining_text.as_deref() == Some(text.as_str()) {
                    return false;
                }
                throttle.remaining_text = Some(text.clone());
                true
            }
            Event::SequenceRemainingTimeChanged { text, .. } => {
                if throttle.sequence_remaining_text.as_deref() == Some(text.as_str()) {
                    return false;
                }
                throttle.sequence_remaining_text = Some(text.clone());
                true
            }
            Event::TitleChanged { .. } => {
                *throttle = ThrottleState::default();
                true
            }
            _ => true,
        }
    }

    /// Write a JSON event to the output
    fn write_json(&self, value: Value) {
        if let Ok(mut output) = self.output.lock() {
            if let Ok(json_str) = serde_json::to_string(&value) {
                let _ = writeln!(output, "{}", json_str);
                let _ = output.flush();
            }
        }
    }
}

impl EventHandler for JsonEventHandler {
    fn handle(&self, event: &Event) {
        if !self.should_write(event) {
            return;
        }

        if let Ok(mut value) = serde_json::to_value(event) {
            if let Value::Object(map) = &mut value {
                map.insert("timestamp".to_string(), Value::from(Self::get_timestamp()));
            }
            self.write_json(value);
        }
    }
}
