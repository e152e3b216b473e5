// ============================================================================
// timebar-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Consistent terminal styling for the CLI: section headers, aligned status
// lines, the colored segment row of an agenda, and error lines.
//
// KEY COMPONENTS:
// - Color detection: NO_COLOR plus supports-color, computed once
// - Text fitting: unicode-width aware truncation for segment labels
// - UI component functions: print_section, print_status, print_success, ...
//
// AI-ASSISTANT-INFO: Terminal UI components and styling for the CLI

// ---- External crate imports ----
use console::style;
use once_cell::sync::Lazy;
use owo_colors::{AnsiColors, OwoColorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ---- Internal crate imports ----
use timebar_core::{BarSegment, SequenceColor};

// ============================================================================
// COLOR DETECTION
// ============================================================================

static USE_COLOR: Lazy<bool> = Lazy::new(|| {
    std::env::var_os("NO_COLOR").is_none()
        && supports_color::on(supports_color::Stream::Stdout).is_some()
});

/// Check if color should be used (respects NO_COLOR environment variable)
pub fn should_use_color() -> bool {
    *USE_COLOR
}

/// Terminal color of a sequence.
pub fn ansi_color(color: SequenceColor) -> AnsiColors {
    match color {
        SequenceColor::Blue => AnsiColors::Blue,
        SequenceColor::Green => AnsiColors::Green,
        SequenceColor::Red => AnsiColors::Red,
        SequenceColor::Yellow => AnsiColors::Yellow,
        SequenceColor::Orange => AnsiColors::BrightYellow,
        SequenceColor::Purple => AnsiColors::Magenta,
        SequenceColor::Pink => AnsiColors::BrightMagenta,
        SequenceColor::Teal => AnsiColors::Cyan,
        SequenceColor::Gray => AnsiColors::BrightBlack,
    }
}

// ============================================================================
// TEXT FITTING
// ============================================================================

/// Fits `text` into exactly `width` terminal cells, truncating with an
/// ellipsis or padding with spaces.
pub fn fit_label(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }

    let mut fitted = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push('…');
    used += 1;
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

/// Splits `width` cells across the segments and fits each title into its
/// cells. Non-empty segments always get at least one cell.
pub fn segment_cells(segments: &[BarSegment], width: usize) -> Vec<(String, SequenceColor)> {
    let mut cells = Vec::with_capacity(segments.len());
    let mut used = 0;

    for (index, segment) in segments.iter().enumerate() {
        let remaining = width.saturating_sub(used);
        let later = segments[index + 1..]
            .iter()
            .filter(|s| s.percent > 0.0)
            .count();
        let available = remaining.saturating_sub(later);

        let mut cell_width = if segment.percent <= 0.0 {
            0
        } else if index + 1 == segments.len() {
            remaining
        } else {
            ((segment.percent / 100.0) * width as f64).round() as usize
        };
        if segment.percent > 0.0 && cell_width == 0 {
            cell_width = 1;
        }
        let cell_width = cell_width.min(available);
        used += cell_width;

        if cell_width > 0 {
            cells.push((fit_label(&segment.title, cell_width), segment.color));
        }
    }

    cells
}

/// Renders the agenda's segment row.
pub fn segment_row(segments: &[BarSegment], width: usize) -> String {
    segment_cells(segments, width)
        .into_iter()
        .map(|(label, color)| {
            if should_use_color() {
                format!("{}", label.on_color(ansi_color(color)).black())
            } else {
                format!("[{}]", label)
            }
        })
        .collect()
}

// ============================================================================
// TERMINAL COMPONENTS
// ============================================================================

/// Formats a section header for major phases
pub fn section_line(title: &str) -> String {
    if should_use_color() {
        format!("===== {} =====", title.to_uppercase().cyan().bold())
    } else {
        format!("===== {} =====", title.to_uppercase())
    }
}

/// Print a section header with a blank line on each side
pub fn print_section(title: &str) {
    println!();
    println!("{}", section_line(title));
    println!();
}

/// Formats a status line (key-value pair)
pub fn status_line(label: &str, value: &str, highlight: bool) -> String {
    let label_width = 15;
    let padding = if label.width() < label_width {
        label_width - label.width()
    } else {
        1
    };

    if should_use_color() && highlight {
        format!("  {}:{} {}", label, " ".repeat(padding), style(value).bold())
    } else {
        format!("  {}:{} {}", label, " ".repeat(padding), value)
    }
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    println!("{}", status_line(label, value, highlight));
}

/// Formats the line announcing a new step
pub fn step_line(subtitle: &str) -> String {
    if should_use_color() {
        format!("  » {}", style(subtitle).bold())
    } else {
        format!("  » {}", subtitle)
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_use_color() {
        println!("  ✓ {}", message.green());
    } else {
        println!("  ✓ {message}");
    }
}

/// Print an error message on stderr
pub fn print_error(message: &str) {
    if should_use_color() {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {message}");
    }
}
