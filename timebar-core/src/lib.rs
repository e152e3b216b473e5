//! Core library for a meeting-agenda countdown.
//!
//! This crate models an agenda as an ordered list of timed sequences, splits
//! a progress bar across them, and drives a countdown that advances through
//! the sequences automatically with manual pause, rewind and skip.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::time::Duration;
//! use timebar_core::{Agenda, CoreConfig, ProgressionEngine, Sequence, SequenceColor};
//!
//! let mut agenda = Agenda::new("Weekly sync");
//! agenda.push_sequence(Sequence::new("Intro", 1.0, SequenceColor::Green));
//! agenda.push_sequence(Sequence::new("Topics", 2.0, SequenceColor::Blue));
//! agenda.push_sequence(Sequence::new("Wrap-up", 1.0, SequenceColor::Red));
//!
//! let mut engine = ProgressionEngine::new(CoreConfig::default()).unwrap();
//! engine.install(agenda);
//! engine.resume();
//! engine.advance(Duration::from_secs(90));
//!
//! assert_eq!(engine.current_step(), 1);
//! assert_eq!(engine.snapshot().sequence_title.as_deref(), Some("Topics"));
//! ```

pub mod agenda;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod logging;
pub mod partition;
pub mod session;
pub mod utils;

// Re-exports for public API
pub use agenda::{Agenda, AgendaLibrary, Sequence, SequenceColor};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use engine::{ProgressSnapshot, ProgressionEngine, ProgressionState, TickOutcome};
pub use error::{CoreError, CoreResult};
pub use events::json_handler::JsonEventHandler;
pub use events::{BarSegment, Event, EventDispatcher, EventHandler};
pub use logging::LoggingEventHandler;
pub use session::{AcceleratedScheduler, RealTimeScheduler, Session, TickScheduler};
pub use utils::{format_date, format_duration, format_percent};
