mod common;

use std::time::Duration;

use common::engine_with;
use timebar_core::{Event, TickOutcome};

#[test]
fn test_pause_and_resume_preserve_progress() {
    let (mut engine, _recorder) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    engine.advance(Duration::from_secs(30));

    engine.pause();
    let before = engine.state().clone();
    assert_eq!(before.elapsed_millis, 30_000);

    assert_eq!(engine.tick(), TickOutcome::Skipped);
    assert_eq!(engine.advance(Duration::from_secs(10)), 0);

    engine.resume();
    let after = engine.state();
    assert_eq!(after.elapsed_millis, before.elapsed_millis);
    assert_eq!(after.remaining_percent, before.remaining_percent);
    assert_eq!(after.current_step, before.current_step);

    assert_eq!(engine.tick(), TickOutcome::Progressed);
    assert_eq!(engine.state().elapsed_millis, 30_010);
}

#[test]
fn test_full_run_reaches_finished() {
    let (mut engine, recorder) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    engine.advance(Duration::from_secs(5 * 60));

    assert!(engine.is_finished());
    assert_eq!(engine.current_step(), 3);
    assert_eq!(
        recorder.subtitles(),
        vec!["Step 0", "Step 1", "Step 2", "Finished !"]
    );
    assert_eq!(recorder.count(&Event::TransitionSoundRequested), 3);
    assert_eq!(engine.remaining_millis(), 0);
    assert_eq!(engine.sequence_remaining_millis(), 0);
}

#[test]
fn test_sound_flag_gates_transition_sound() {
    let (mut engine, recorder) = engine_with(&[1.0, 1.0]);
    engine.set_sound_enabled(false);
    engine.resume();
    engine.advance(Duration::from_secs(3 * 60));

    assert!(engine.is_finished());
    assert_eq!(recorder.count(&Event::TransitionSoundRequested), 0);
}

#[test]
fn test_manual_navigation_is_silent() {
    let (mut engine, recorder) = engine_with(&[1.0, 2.0, 1.0]);
    engine.next_step();
    engine.next_step();
    engine.next_step();

    assert!(engine.is_finished());
    assert_eq!(recorder.count(&Event::TransitionSoundRequested), 0);
    assert_eq!(recorder.subtitles().last().map(String::as_str), Some("Finished !"));
}

#[test]
fn test_remaining_projections() {
    let (mut engine, _recorder) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    engine.advance(Duration::from_secs(30));

    let remaining = engine.remaining_millis();
    let sequence_remaining = engine.sequence_remaining_millis();
    assert!((209_990..=210_000).contains(&remaining), "{remaining}");
    assert!((29_990..=30_000).contains(&sequence_remaining), "{sequence_remaining}");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.step_index, 0);
    assert_eq!(snapshot.elapsed_millis, 30_000);
    assert!(!snapshot.paused);
    assert!(!snapshot.finished);
    assert!((snapshot.progress_percent - 12.5).abs() < 1e-6);
}

#[test]
fn test_every_tick_reports_position() {
    let (mut engine, recorder) = engine_with(&[1.0]);
    engine.resume();
    recorder.clear();

    engine.tick();
    let events = recorder.events();
    assert!(matches!(events[0], Event::BarWidthChanged { .. }));
    assert!(matches!(events[1], Event::RemainingTimeChanged { .. }));
    assert!(matches!(events[2], Event::SequenceRemainingTimeChanged { .. }));
    assert_eq!(events.len(), 3);
}

#[test]
fn test_empty_agenda_is_finished_and_idle() {
    let (mut engine, recorder) = engine_with(&[]);
    assert!(engine.is_finished());
    engine.resume();
    assert_eq!(engine.tick(), TickOutcome::Skipped);
    assert_eq!(recorder.subtitles(), vec!["Finished !"]);
}
