//! Terminal display of a running agenda.
//!
//! [`TerminalDisplay`] is the CLI's event handler: it prints the agenda
//! header and step changes, drives an indicatif bar that shrinks with the
//! remaining time, and rings the terminal bell on automatic transitions.
//! Without a terminal it only prints the step changes.

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use timebar_core::{Event, EventHandler, format_percent};

use crate::config::BAR_WIDTH;
use crate::terminal;

const BAR_POSITIONS: u64 = 1000;

#[derive(Default)]
struct DisplayState {
    bar: Option<ProgressBar>,
    subtitle: String,
    remaining: String,
    sequence_remaining: String,
    paused: bool,
}

pub struct TerminalDisplay {
    interactive: bool,
    state: Mutex<DisplayState>,
}

impl TerminalDisplay {
    /// `interactive` enables the live bar and the bell.
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            state: Mutex::new(DisplayState::default()),
        }
    }

    /// Leaves the final bar state on screen.
    pub fn finish(&self) {
        if let Some(bar) = self.lock().bar.take() {
            bar.finish();
        }
    }

    fn lock(&self) -> MutexGuard<'_, DisplayState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn new_bar() -> ProgressBar {
        let template = format!("  {{prefix:>8}} [{{bar:{BAR_WIDTH}}}] {{msg}}");
        let bar_style = ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        let bar = ProgressBar::new(BAR_POSITIONS);
        bar.set_style(bar_style);
        bar
    }

    fn print_line(state: &DisplayState, line: &str) {
        match &state.bar {
            Some(bar) => bar.println(line),
            None => println!("{line}"),
        }
    }

    fn refresh_message(state: &DisplayState) {
        if let Some(bar) = &state.bar {
            bar.set_prefix(state.remaining.clone());
            let mut message = if state.sequence_remaining.is_empty() {
                state.subtitle.clone()
            } else {
                format!("{} · {}", state.subtitle, state.sequence_remaining)
            };
            if state.paused {
                message.push_str(" (paused)");
            }
            bar.set_message(message);
        }
    }
}

impl EventHandler for TerminalDisplay {
    fn handle(&self, event: &Event) {
        let mut state = self.lock();

        match event {
            Event::TitleChanged { title } => {
                if let Some(bar) = state.bar.take() {
                    bar.finish_and_clear();
                }
                terminal::print_section(title);
            }

            Event::DateChanged { date } => {
                terminal::print_status("Date", date, false);
            }

            Event::BarSegmentsRendered { segments } => {
                if segments.is_empty() {
                    terminal::print_status("Sequences", "none", false);
                    return;
                }
                for segment in segments {
                    terminal::print_status(&segment.title, &format_percent(segment.percent), false);
                }
                println!();
                println!("  {}", terminal::segment_row(segments, BAR_WIDTH));
                println!();
            }

            Event::BarWidthChanged { percent } => {
                if self.interactive && state.bar.is_none() {
                    state.bar = Some(Self::new_bar());
                    Self::refresh_message(&state);
                }
                if let Some(bar) = &state.bar {
                    let position = (percent.clamp(0.0, 100.0) * 10.0).round() as u64;
                    bar.set_position(position);
                }
            }

            Event::RemainingTimeChanged { text, .. } => {
                if state.remaining != *text {
                    state.remaining = text.clone();
                    Self::refresh_message(&state);
                }
            }

            Event::SequenceRemainingTimeChanged { text, .. } => {
                if state.sequence_remaining != *text {
                    state.sequence_remaining = text.clone();
                    Self::refresh_message(&state);
                }
            }

            Event::SubtitleChanged { subtitle } => {
                state.subtitle = subtitle.clone();
                Self::print_line(&state, &terminal::step_line(subtitle));
                Self::refresh_message(&state);
            }

            Event::ExtraChanged { extra } => {
                if let Some(extra) = extra {
                    let line = if terminal::should_use_color() {
                        format!("    {}", style(extra).dim())
                    } else {
                        format!("    {extra}")
                    };
                    Self::print_line(&state, &line);
                }
            }

            Event::TransitionSoundRequested => {
                if self.interactive {
                    let mut stderr = std::io::stderr();
                    let _ = stderr.write_all(b"\x07");
                    let _ = stderr.flush();
                }
            }

            Event::PauseChanged { paused } => {
                state.paused = *paused;
                Self::refresh_message(&state);
            }
        }
    }
}
