use timebar_core::{AgendaLibrary, format_duration, format_percent};

use crate::cli::ShowArgs;
use crate::commands::list::minutes_to_millis;
use crate::error::{CliErrorContext, CliResult, FailurePoint};
use crate::terminal;

pub fn run_show(args: ShowArgs) -> CliResult<()> {
    let library = AgendaLibrary::new(super::resolve_agenda_dir(args.agenda_dir));
    let agenda = library
        .load(&args.agenda)
        .failed_at(FailurePoint::LoadAgenda(&args.agenda))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&agenda)?);
        return Ok(());
    }

    terminal::print_section(&agenda.title);
    terminal::print_status(
        "Total",
        &format_duration(minutes_to_millis(agenda.total_minutes())),
        true,
    );
    terminal::print_status("Sequences", &agenda.len().to_string(), false);
    println!();

    for (index, sequence) in agenda.sequences().iter().enumerate() {
        let span = format!(
            "{:>6}  {} → {}  {}",
            format_percent(sequence.duration_percent()),
            format_duration(minutes_to_millis(sequence.begin_at_minutes())),
            format_duration(minutes_to_millis(sequence.end_at_minutes())),
            sequence.color
        );
        terminal::print_status(&format!("{}. {}", index + 1, sequence.title), &span, false);
        if let Some(extra) = &sequence.extra {
            println!("      {extra}");
        }
    }

    Ok(())
}
