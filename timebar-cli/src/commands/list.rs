use std::path::PathBuf;

use log::debug;
use timebar_core::AgendaLibrary;

use crate::cli::ListArgs;
use crate::error::{CliErrorContext, CliResult, FailurePoint};
use crate::terminal;

pub fn run_list(args: ListArgs) -> CliResult<()> {
    let dir: PathBuf = super::resolve_agenda_dir(args.agenda_dir);
    let library = AgendaLibrary::new(dir.clone());

    let names = library
        .list()
        .failed_at(FailurePoint::ReadAgendaDir(&dir))?;
    debug!("Found {} agenda(s) in {}", names.len(), dir.display());

    if names.is_empty() {
        println!("No agendas found in {}", dir.display());
        return Ok(());
    }

    for name in names {
        match library.load(&name) {
            Ok(agenda) => {
                let summary = format!(
                    "{} ({} sequences, {})",
                    agenda.title,
                    agenda.len(),
                    timebar_core::format_duration(minutes_to_millis(agenda.total_minutes()))
                );
                terminal::print_status(&name, &summary, false);
            }
            Err(e) => terminal::print_status(&name, &format!("unreadable: {e}"), false),
        }
    }
    Ok(())
}

pub(crate) fn minutes_to_millis(minutes: f64) -> u64 {
    (minutes * 60_000.0).round().max(0.0) as u64
}
