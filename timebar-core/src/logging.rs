//! Event handler that mirrors display events into the log.
//!
//! Per-tick bar updates are throttled to whole-percent progress so a long
//! agenda does not flood the log file.

use std::sync::Mutex;

use log::{debug, info};

use crate::events::{Event, EventHandler};
use crate::utils::format_percent;

pub struct LoggingEventHandler {
    last_logged_percent: Mutex<Option<u32>>,
}

impl Default for LoggingEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingEventHandler {
    pub fn new() -> Self {
        Self {
            last_logged_percent: Mutex::new(None),
        }
    }

    fn reset_progress_state(&self) {
        *self.lock_percent() = None;
    }

    fn lock_percent(&self) -> std::sync::MutexGuard<'_, Option<u32>> {
        match self.last_logged_percent.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl EventHandler for LoggingEventHandler {
    fn handle(&self, event: &Event) {
        match event {
            Event::TitleChanged { title } => {
                self.reset_progress_state();
                info!("Agenda: {}", title);
            }

            Event::DateChanged { date } => {
                info!("Date: {}", date);
            }

            Event::BarSegmentsRendered { segments } => {
                info!("Bar split into {} segments:", segments.len());
                for segment in segments {
                    info!(
                        "  {} ({}, {})",
                        segment.title,
                        format_percent(segment.percent),
                        segment.color
                    );
                }
            }

            Event::BarWidthChanged { percent } => {
                let progress = (100.0 - percent).clamp(0.0, 100.0).floor() as u32;
                let mut last = self.lock_percent();
                if *last != Some(progress) {
                    *last = Some(progress);
                    debug!("Progress: {}%", progress);
                }
            }

            // Already covered by the throttled bar updates
            Event::RemainingTimeChanged { .. } | Event::SequenceRemainingTimeChanged { .. } => {}

            Event::SubtitleChanged { subtitle } => {
                info!("Now: {}", subtitle);
            }

            Event::ExtraChanged { extra } => {
                if let Some(extra) = extra {
                    info!("  {}", extra);
                }
            }

            Event::TransitionSoundRequested => {
                debug!("Transition sound requested");
            }

            Event::PauseChanged { paused } => {
                info!("{}", if *paused { "Paused" } else { "Running" });
            }
        }
    }
}
