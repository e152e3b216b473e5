// ============================================================================
// timebar-cli/src/commands/run.rs
// ============================================================================
//
// RUN COMMAND: Agenda Countdown
//
// Loads an agenda and counts it down. Three modes:
// - interactive: live bar, keyboard controls, runs until `q`
// - non-interactive (no terminal, or --json): starts at once and exits when
//   the agenda is finished
// - --virtual: ticks the whole agenda synchronously on a virtual clock
//
// AI-ASSISTANT-INFO: Countdown command, wires the session to the terminal

// ---- Standard library imports ----
use std::io::IsTerminal;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

// ---- External crate imports ----
use console::{Key, Term};
use log::{debug, info};

// ---- Internal crate imports ----
use timebar_core::{
    AcceleratedScheduler, Agenda, AgendaLibrary, CoreConfig, CoreConfigBuilder, EventHandler,
    JsonEventHandler, LoggingEventHandler, ProgressionEngine, RealTimeScheduler, Session,
    TickScheduler, format_duration,
};

use crate::cli::RunArgs;
use crate::commands::list::minutes_to_millis;
use crate::config::{DEFAULT_SPEED, FINISH_POLL_MS, KEY_HELP};
use crate::display::TerminalDisplay;
use crate::error::{CliErrorContext, CliResult, FailurePoint};
use crate::terminal;

/// Ticks of slack granted to the virtual clock past the agenda's total.
const VIRTUAL_SLACK_TICKS: u64 = 10;

pub fn run_run(args: RunArgs) -> CliResult<()> {
    let config = build_config(&args)?;

    let interactive = !args.json
        && !args.virtual_clock
        && std::io::stdin().is_terminal()
        && std::io::stdout().is_terminal();

    let display = Arc::new(TerminalDisplay::new(interactive));
    let mut handlers: Vec<Arc<dyn EventHandler>> = vec![Arc::new(LoggingEventHandler::new())];
    if args.json {
        handlers.push(Arc::new(JsonEventHandler::new()));
    } else {
        handlers.push(display.clone());
    }

    if args.virtual_clock {
        let agenda = AgendaLibrary::new(config.agenda_dir.clone())
            .load(&args.agenda)
            .failed_at(FailurePoint::LoadAgenda(&args.agenda))?;
        run_virtual(config, agenda, handlers, args.json)
    } else {
        run_live(config, handlers, &args, interactive)?;
        display.finish();
        Ok(())
    }
}

/// CLI flags layered over the environment-backed configuration.
fn build_config(args: &RunArgs) -> CliResult<CoreConfig> {
    let mut builder = CoreConfigBuilder::from_config(CoreConfig::from_env());
    if let Some(dir) = &args.agenda_dir {
        builder = builder.agenda_dir(dir.clone());
    }
    if let Some(tick_ms) = args.tick_ms {
        builder = builder.tick_ms(tick_ms);
    }
    if args.no_sound {
        builder = builder.sound_enabled(false);
    }

    let config = builder.build();
    config.validate()?;
    Ok(config)
}

fn log_run_start(agenda: &Agenda, tick_ms: u64) {
    info!(
        "Run started for '{}' ({} sequences, tick {} ms)",
        agenda.title,
        agenda.len(),
        tick_ms
    );
}

fn run_virtual(
    config: CoreConfig,
    agenda: Agenda,
    handlers: Vec<Arc<dyn EventHandler>>,
    json: bool,
) -> CliResult<()> {
    log_run_start(&agenda, config.tick_ms);
    let budget = minutes_to_millis(agenda.total_minutes()) + VIRTUAL_SLACK_TICKS * config.tick_ms;

    let mut engine = ProgressionEngine::new(config)?;
    for handler in handlers {
        engine.add_handler(handler);
    }
    engine.install(agenda);
    engine.resume();

    let ticks = engine.advance(Duration::from_millis(budget));
    let elapsed = engine.state().elapsed_millis;
    debug!("Virtual clock applied {} ticks", ticks);

    if !json {
        println!();
        terminal::print_success(&format!(
            "Agenda finished in {} of virtual time",
            format_duration(elapsed)
        ));
    }
    Ok(())
}

fn run_live(
    config: CoreConfig,
    handlers: Vec<Arc<dyn EventHandler>>,
    args: &RunArgs,
    interactive: bool,
) -> CliResult<()> {
    let scheduler: Arc<dyn TickScheduler> = if (args.speed - DEFAULT_SPEED).abs() < f64::EPSILON {
        Arc::new(RealTimeScheduler)
    } else {
        Arc::new(AcceleratedScheduler::new(args.speed)?)
    };

    let mut session = Session::with_scheduler(config, scheduler)?;
    for handler in handlers {
        session.add_handler(handler);
    }
    session
        .load_agenda(&args.agenda)
        .failed_at(FailurePoint::LoadAgenda(&args.agenda))?;
    session.with_engine(|engine| log_run_start(engine.agenda(), engine.config().tick_ms));

    if interactive {
        println!("  {KEY_HELP}");
        println!();
        if args.autostart {
            session.toggle_start_pause(Some(false));
        }
        key_loop(&session)?;
    } else {
        session.toggle_start_pause(Some(false));
        while !session.is_finished() {
            thread::sleep(Duration::from_millis(FINISH_POLL_MS));
        }
    }

    let snapshot = session.snapshot();
    session.stop();
    info!(
        "Run ended at step {}/{} after {} of clock time",
        snapshot.step_index,
        snapshot.step_count,
        format_duration(snapshot.elapsed_millis)
    );
    Ok(())
}

/// Maps keys to session controls until the user quits.
fn key_loop(session: &Session) -> CliResult<()> {
    let term = Term::stdout();
    loop {
        let key = term
            .read_key()
            .failed_at(FailurePoint::ReadKey)?;
        match key {
            Key::Char(' ') => session.toggle_start_pause(None),
            Key::ArrowLeft => session.previous_step(),
            Key::ArrowRight => session.next_step(),
            Key::Char('r') | Key::Char('R') => session.restart(),
            Key::Char('s') | Key::Char('S') => {
                let enabled = !session.sound_enabled();
                session.set_sound_enabled(enabled);
                info!("Transition sound {}", if enabled { "on" } else { "off" });
            }
            Key::Char('q') | Key::Char('Q') | Key::Escape => break,
            _ => {}
        }
    }
    Ok(())
}
