use std::sync::Arc;

use serde::Serialize;

use crate::agenda::SequenceColor;

pub mod json_handler;

/// One segment of the bar, as rendered when an agenda is installed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSegment {
    pub title: String,
    pub percent: f64,
    pub color: SequenceColor,
}

/// Display updates produced by the progression engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    // Agenda load
    TitleChanged {
        title: String,
    },
    DateChanged {
        date: String,
    },
    BarSegmentsRendered {
        segments: Vec<BarSegment>,
    },

    // Every tick and every navigation
    BarWidthChanged {
        percent: f64,
    },
    RemainingTimeChanged {
        millis: u64,
        text: String,
    },
    SequenceRemainingTimeChanged {
        millis: u64,
        text: String,
    },

    // Step transitions, including the finished state
    SubtitleChanged {
        subtitle: String,
    },
    ExtraChanged {
        extra: Option<String>,
    },

    // Automatic boundary crossings only
    TransitionSoundRequested,

    PauseChanged {
        paused: bool,
    },
}

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event);
}

pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&self, event: Event) {
        for handler in &self.handlers {
            handler.handle(&event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
