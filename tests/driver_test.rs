// Integration tests for the command dispatcher and the timed-step loop

use algostep::config::Config;
use algostep::dataset::InitOrder;
use algostep::engine::constants::{LARGE_TICK, SMALL_TICK};
use algostep::engine::{DrawHint, Variant};
use algostep::ui::{App, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

fn app(variant: Variant, large: bool) -> App {
    let config = Config {
        variant,
        large,
        order: InitOrder::Random,
        seed: Some(8),
    };
    App::with_rng(&config, StdRng::seed_from_u64(8)).expect("app creation failed")
}

/// Drive ticks far enough apart that each one steps
fn tick_until_stopped(app: &mut App) -> usize {
    let mut now = Instant::now();
    let mut steps = 0;
    while app.is_running {
        now += app.tick_interval();
        if app.tick(now) {
            steps += 1;
        }
        assert!(steps < 100_000, "run never stopped");
    }
    steps
}

#[test]
fn test_run_stops_when_done() {
    let mut app = app(Variant::Bubble, false);
    app.handle_command(Command::Run);
    assert!(app.is_running);
    let steps = tick_until_stopped(&mut app);
    assert!(steps > 0);
    assert!(app.session.is_done());
    assert!(app.session.snapshot().is_sorted());
    assert!(!app.is_running);
}

#[test]
fn test_tick_waits_for_interval() {
    let mut app = app(Variant::Selection, false);
    app.handle_command(Command::Run);
    let start = Instant::now() + Duration::from_secs(1);
    assert!(app.tick(start));
    assert!(!app.tick(start + Duration::from_millis(10)));
    assert!(app.tick(start + SMALL_TICK));
}

#[test]
fn test_tick_interval_follows_size() {
    assert_eq!(app(Variant::Shell, false).tick_interval(), SMALL_TICK);
    assert_eq!(app(Variant::Shell, true).tick_interval(), LARGE_TICK);
    assert_eq!(app(Variant::Stack, true).tick_interval(), SMALL_TICK);
}

#[test]
fn test_new_and_size_stop_run() {
    let mut app = app(Variant::Insertion, false);
    app.handle_command(Command::Run);
    app.handle_command(Command::New);
    assert!(!app.is_running);
    assert_eq!(app.session.order(), InitOrder::ReverseSorted);
    assert_eq!(app.session.steps(), 0);

    app.handle_command(Command::Run);
    app.handle_command(Command::Size);
    assert!(!app.is_running);
    assert!(app.large);
    assert_eq!(app.session.size(), 100);

    app.handle_command(Command::Size);
    assert_eq!(app.session.size(), 10);
}

#[test]
fn test_step_pauses_run() {
    let mut app = app(Variant::Quick, false);
    app.handle_command(Command::Run);
    app.handle_command(Command::Step);
    assert!(!app.is_running);
    assert_eq!(app.session.steps(), 1);
}

#[test]
fn test_draw_is_idempotent() {
    let mut app = app(Variant::Shell, false);
    app.handle_command(Command::Step);
    app.handle_command(Command::Step);
    let before = app.session.snapshot();
    app.handle_command(Command::Draw);
    app.handle_command(Command::Draw);
    assert_eq!(app.session.snapshot(), before);
    assert_eq!(app.session.draw_hint(), DrawHint::All);

    let scene = app.scene();
    assert!(scene.bars.iter().all(|b| !b.changed));
    assert!(scene.arrows.iter().all(|a| !a.moved));
    assert_eq!(app.session.draw_hint(), DrawHint::Delta);
    assert_eq!(app.session.snapshot(), before);
}

#[test]
fn test_finish_runs_to_end() {
    let mut app = app(Variant::Shell, true);
    app.handle_command(Command::Finish);
    assert!(app.session.is_done());
    assert!(app.session.snapshot().is_sorted());
    app.handle_command(Command::Step);
    assert_eq!(app.status_message, "Sort is complete");
}

#[test]
fn test_structure_commands() {
    let mut app = app(Variant::Stack, false);
    app.handle_command(Command::Insert("77".into()));
    // first step (validation) runs immediately
    assert!(!app.session.is_idle());
    app.handle_command(Command::Finish);
    assert!(app.session.is_idle());

    app.handle_command(Command::Peek);
    app.handle_command(Command::Finish);
    assert_eq!(app.last_output, Some(77));

    app.handle_command(Command::Insert("abc".into()));
    assert!(app.is_error);
}

#[test]
fn test_structure_size_is_fixed() {
    let mut app = app(Variant::PriorityQueue, false);
    app.handle_command(Command::Size);
    assert_eq!(app.session.size(), 10);
    assert!(app.is_error);
}

#[test]
fn test_sorts_reject_structure_operations() {
    let mut app = app(Variant::Bubble, false);
    app.handle_command(Command::Remove);
    assert!(app.is_error);
    assert_eq!(app.session.steps(), 0);
}

#[test]
fn test_next_algorithm_cycles() {
    let mut app = app(Variant::Partition, false);
    app.handle_command(Command::NextAlgorithm);
    assert_eq!(app.session.variant(), Variant::PriorityQueue);
    app.handle_command(Command::NextAlgorithm);
    app.handle_command(Command::NextAlgorithm);
    assert_eq!(app.session.variant(), Variant::Bubble);
}
