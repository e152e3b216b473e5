mod common;

use std::time::Duration;

use common::engine_with;
use timebar_core::{Event, TickOutcome};

#[test]
fn test_next_step_at_finished_is_a_no_op() {
    let (mut engine, recorder) = engine_with(&[1.0, 2.0, 1.0]);
    for _ in 0..3 {
        engine.next_step();
    }
    assert!(engine.is_finished());

    let before = engine.state().clone();
    recorder.clear();
    engine.next_step();
    engine.next_step();

    assert_eq!(engine.state(), &before);
    assert!(recorder.events().is_empty());
}

#[test]
fn test_previous_step_at_first_step_matches_restart() {
    let (mut first, _) = engine_with(&[1.0, 2.0, 1.0]);
    let (mut second, _) = engine_with(&[1.0, 2.0, 1.0]);
    for engine in [&mut first, &mut second] {
        engine.resume();
        engine.advance(Duration::from_secs(20));
    }

    first.previous_step();
    second.restart();

    assert_eq!(first.state(), second.state());
    assert_eq!(first.current_step(), 0);
    assert_eq!(first.state().remaining_percent, 100.0);
    assert!(first.is_paused());
}

#[test]
fn test_previous_from_deep_in_second_step_rewinds_that_step() {
    let (mut engine, _) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    // 60% of the bar: 35 points into the second sequence
    engine.advance(Duration::from_secs(144));
    assert_eq!(engine.current_step(), 1);
    assert!(engine.state().remaining_percent < 50.0);

    engine.previous_step();

    assert_eq!(engine.current_step(), 1);
    assert_eq!(engine.state().step_start_percent, 25.0);
    assert_eq!(engine.state().remaining_percent, 75.0);
}

#[test]
fn test_previous_early_in_second_step_resets_agenda() {
    let (mut engine, _) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    // 30% of the bar: 5 points into the second sequence
    engine.advance(Duration::from_secs(72));
    assert_eq!(engine.current_step(), 1);
    assert!(engine.state().remaining_percent >= 50.0);

    engine.previous_step();

    assert_eq!(engine.current_step(), 0);
    assert_eq!(engine.state().step_start_percent, 0.0);
    assert_eq!(engine.state().remaining_percent, 100.0);
}

#[test]
fn test_forced_go_to_first_step_always_resets() {
    let (mut engine, _) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    engine.advance(Duration::from_secs(144));

    engine.go_to_step(0, true);

    assert_eq!(engine.current_step(), 0);
    assert_eq!(engine.state().remaining_percent, 100.0);
}

#[test]
fn test_single_sequence_go_to_first_step_resets() {
    let (mut engine, _) = engine_with(&[5.0]);
    engine.resume();
    engine.advance(Duration::from_secs(120));

    engine.go_to_step(0, false);

    assert_eq!(engine.current_step(), 0);
    assert_eq!(engine.state().remaining_percent, 100.0);
}

#[test]
fn test_forward_jump_starts_at_cumulative_share() {
    let (mut engine, recorder) = engine_with(&[1.0, 2.0, 1.0]);

    engine.go_to_step(2, false);

    assert_eq!(engine.current_step(), 2);
    assert_eq!(engine.state().step_start_percent, 75.0);
    assert_eq!(engine.state().remaining_percent, 25.0);
    assert_eq!(recorder.subtitles().last().map(String::as_str), Some("Step 2"));
}

#[test]
fn test_backward_jump_with_partial_step_restarts_current() {
    let (mut engine, _) = engine_with(&[1.0, 2.0, 1.0]);
    engine.go_to_step(2, false);
    engine.resume();
    engine.advance(Duration::from_secs(6));
    assert!(engine.state().remaining_percent < 25.0);

    engine.go_to_step(1, false);

    assert_eq!(engine.current_step(), 2);
    assert_eq!(engine.state().remaining_percent, 25.0);
}

#[test]
fn test_backward_jump_from_untouched_step_rewinds() {
    let (mut engine, _) = engine_with(&[1.0, 2.0, 1.0]);
    engine.go_to_step(2, false);

    engine.previous_step();

    assert_eq!(engine.current_step(), 1);
    assert_eq!(engine.state().step_start_percent, 25.0);
    assert_eq!(engine.state().remaining_percent, 75.0);
}

#[test]
fn test_previous_from_finished_returns_to_last_sequence() {
    let (mut engine, recorder) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    engine.advance(Duration::from_secs(5 * 60));
    assert!(engine.is_finished());
    assert!(engine.is_halted());

    engine.previous_step();

    assert_eq!(engine.current_step(), 2);
    assert_eq!(engine.state().remaining_percent, 25.0);
    assert!(!engine.is_halted());
    assert_eq!(recorder.subtitles().last().map(String::as_str), Some("Step 2"));

    engine.resume();
    assert_eq!(engine.tick(), TickOutcome::Progressed);
}

#[test]
fn test_navigation_pauses_running_clock() {
    let (mut engine, recorder) = engine_with(&[1.0, 2.0, 1.0]);
    engine.resume();
    recorder.clear();

    engine.next_step();

    assert!(engine.is_paused());
    assert_eq!(recorder.events()[0], Event::PauseChanged { paused: true });
    assert_eq!(engine.tick(), TickOutcome::Skipped);
}

#[test]
fn test_jump_to_finished_clamps_bar() {
    // seven shares of 14.3 sum past 100
    let (mut engine, recorder) = engine_with(&[1.0; 7]);
    for _ in 0..7 {
        engine.next_step();
    }

    assert!(engine.is_finished());
    assert_eq!(engine.state().step_start_percent, 100.0);
    assert_eq!(engine.state().remaining_percent, 0.0);
    assert_eq!(recorder.subtitles().last().map(String::as_str), Some("Finished !"));
}

#[test]
fn test_rewind_to_first_step_from_third_step_restarts_third_step() {
    let (mut engine, recorder) = engine_with(&[1.0, 2.0, 1.0]);
    engine.go_to_step(2, false);
    engine.resume();
    // 2.5 points into the last sequence
    engine.advance(Duration::from_secs(6));
    assert!(engine.state().remaining_percent < 50.0);
    recorder.clear();

    engine.go_to_step(0, false);

    // the active step restarts at its own cumulative start, not at the
    // first sequence's share
    assert_eq!(engine.current_step(), 2);
    assert_eq!(engine.state().step_start_percent, 75.0);
    assert_eq!(engine.state().remaining_percent, 25.0);
    assert_eq!(recorder.subtitles(), vec!["Step 2"]);
}

#[test]
fn test_zero_duration_agenda_ignores_navigation() {
    let (mut engine, recorder) = engine_with(&[0.0, 0.0]);
    assert!(engine.is_finished());
    let before = engine.state().clone();
    recorder.clear();

    engine.previous_step();
    assert!(engine.is_finished());
    engine.go_to_step(0, false);
    assert!(engine.is_finished());
    engine.restart();
    assert!(engine.is_finished());
    engine.next_step();

    assert_eq!(engine.current_step(), 2);
    assert_eq!(engine.state(), &before);
    assert!(recorder.subtitles().is_empty());
    engine.resume();
    assert_eq!(engine.tick(), TickOutcome::Skipped);
}
