//! Integration tests for the PetService → FSM → ports pipeline.
//!
//! Inputs are fed directly, so timer expiry is whatever order the test
//! chooses. Ports are the recording mocks from `mock_ports`.

use super::mock_ports::{MockTimers, RecordingSink, TimerCall};

use tamagotchi::app::commands::PetInput;
use tamagotchi::app::events::PetEvent;
use tamagotchi::app::service::PetService;
use tamagotchi::config::PetConfig;
use tamagotchi::fsm::StateId;
use tamagotchi::request::RequestKind;

fn make_pet(name: &str) -> (PetService, MockTimers, RecordingSink) {
    let config = PetConfig {
        seed: Some(7),
        ..PetConfig::default()
    };
    let mut pet = PetService::new(name, config);
    let mut timers = MockTimers::new();
    let mut sink = RecordingSink::new();
    pet.start(&mut timers, &mut sink);
    (pet, timers, sink)
}

fn request_and_answer(
    pet: &mut PetService,
    timers: &mut MockTimers,
    sink: &mut RecordingSink,
    answer: &str,
) {
    pet.handle(PetInput::RequestTimerFired, timers, sink);
    assert!(pet.waiting_for_answer(), "a request should be pending");
    pet.answer(answer, timers, sink);
}

fn make_sick(pet: &mut PetService, timers: &mut MockTimers, sink: &mut RecordingSink) {
    for _ in 0..3 {
        request_and_answer(pet, timers, sink, "n");
    }
    assert_eq!(pet.state(), StateId::Sick);
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_runs_both_timers_and_announces_birth() {
    let (pet, timers, sink) = make_pet("Rex");

    assert_eq!(timers.calls, vec![TimerCall::StartRequest, TimerCall::StartLife]);
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].1, PetEvent::Born);
    assert_eq!(sink.events[0].0.name, "Rex");
    assert_eq!(pet.state(), StateId::Healthy);
    assert_eq!(pet.ignore_count(), 0);
    assert!(!pet.waiting_for_answer());
}

// ── Healthy ───────────────────────────────────────────────────

#[test]
fn satisfied_requests_keep_pet_healthy() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");

    for answer in ["y", "Y", " так ", "ТАК", "y\n"].iter().cycle().take(25) {
        request_and_answer(&mut pet, &mut timers, &mut sink, answer);
        assert_eq!(pet.ignore_count(), 0);
        assert_eq!(pet.state(), StateId::Healthy);
    }
    assert_eq!(
        sink.count(|e| matches!(e, PetEvent::RequestSatisfied { .. })),
        25
    );
}

#[test]
fn satisfied_answer_gets_the_matching_reply() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    request_and_answer(&mut pet, &mut timers, &mut sink, "y");

    let kind = sink.issued()[0];
    assert!(sink.events.iter().any(|(_, e)| *e
        == PetEvent::RequestSatisfied {
            kind,
            reply: kind.reply(),
        }));
}

#[test]
fn request_tick_while_waiting_issues_nothing() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    pet.handle(PetInput::RequestTimerFired, &mut timers, &mut sink);
    let pending = pet.pending();

    pet.handle(PetInput::RequestTimerFired, &mut timers, &mut sink);
    pet.handle(PetInput::RequestTimerFired, &mut timers, &mut sink);

    assert_eq!(sink.issued().len(), 1);
    assert_eq!(pet.pending(), pending);
}

#[test]
fn answer_without_pending_request_is_ignored() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    sink.clear();

    pet.answer("n", &mut timers, &mut sink);
    pet.answer("y", &mut timers, &mut sink);

    assert!(sink.events.is_empty());
    assert_eq!(pet.ignore_count(), 0);
}

#[test]
fn satisfied_answer_resets_ignore_count() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    request_and_answer(&mut pet, &mut timers, &mut sink, "n");
    request_and_answer(&mut pet, &mut timers, &mut sink, "whatever");
    assert_eq!(pet.ignore_count(), 2);

    request_and_answer(&mut pet, &mut timers, &mut sink, "y");
    assert_eq!(pet.ignore_count(), 0);
    assert_eq!(pet.state(), StateId::Healthy);
}

// ── Healthy → Sick ────────────────────────────────────────────

#[test]
fn three_ignored_requests_make_pet_sick() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    make_sick(&mut pet, &mut timers, &mut sink);

    assert_eq!(pet.ignore_count(), 3);
    assert!(!pet.waiting_for_answer());
    assert!(!timers.request_running(), "request timer paused while cooling down");
    assert_eq!(timers.count(TimerCall::StartCooldown(2_000)), 1);

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter_map(|(_, e)| match e {
            PetEvent::StatusChanged { from, to, message } => Some((*from, *to, message.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        changes,
        vec![(StateId::Healthy, StateId::Sick, "Rex sick!".to_string())]
    );
}

#[test]
fn cooldown_asks_for_heal_and_restarts_requests() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    make_sick(&mut pet, &mut timers, &mut sink);

    pet.handle(PetInput::CooldownElapsed, &mut timers, &mut sink);

    assert_eq!(pet.pending(), Some(RequestKind::Heal));
    assert_eq!(sink.last_prompt(), Some(RequestKind::Heal.prompt()));
    assert!(timers.request_running());
}

#[test]
fn request_tick_during_cooldown_issues_nothing() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    make_sick(&mut pet, &mut timers, &mut sink);
    let before = sink.issued().len();

    pet.handle(PetInput::RequestTimerFired, &mut timers, &mut sink);
    assert!(sink.issued()[before..].is_empty());
    assert!(!pet.waiting_for_answer());

    pet.handle(PetInput::CooldownElapsed, &mut timers, &mut sink);
    pet.handle(PetInput::RequestTimerFired, &mut timers, &mut sink);
    assert_eq!(sink.issued()[before..], [RequestKind::Heal]);
}

// ── Sick → Healthy / Dead ─────────────────────────────────────

#[test]
fn satisfied_heal_recovers() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    make_sick(&mut pet, &mut timers, &mut sink);
    pet.handle(PetInput::CooldownElapsed, &mut timers, &mut sink);

    pet.answer("так", &mut timers, &mut sink);

    assert_eq!(pet.state(), StateId::Healthy);
    assert_eq!(pet.ignore_count(), 0);
    assert!(sink.events.iter().any(|(_, e)| matches!(
        e,
        PetEvent::StatusChanged { to: StateId::Healthy, message, .. } if message == "Rex recovered!"
    )));
}

#[test]
fn ignored_heal_kills_exactly_once() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    make_sick(&mut pet, &mut timers, &mut sink);
    pet.handle(PetInput::CooldownElapsed, &mut timers, &mut sink);

    pet.answer("n", &mut timers, &mut sink);

    assert_eq!(pet.state(), StateId::Dead);
    assert!(pet.is_terminal());
    assert_eq!(sink.deaths(), vec!["Rex died".to_string()]);
    assert!(!timers.request_running());
    assert_eq!(timers.count(TimerCall::StopLife), 1);

    // Stale timers and answers after death change nothing.
    let events = sink.events.len();
    for input in [
        PetInput::RequestTimerFired,
        PetInput::CooldownElapsed,
        PetInput::LifeTimerFired,
        PetInput::Answered(false),
    ] {
        pet.handle(input, &mut timers, &mut sink);
    }
    assert_eq!(sink.events.len(), events);
    assert_eq!(sink.deaths().len(), 1);
}

// ── Natural end ───────────────────────────────────────────────

#[test]
fn life_timer_ends_game_even_with_prompt_pending() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    pet.handle(PetInput::RequestTimerFired, &mut timers, &mut sink);
    assert!(pet.waiting_for_answer());

    pet.handle(PetInput::LifeTimerFired, &mut timers, &mut sink);

    assert_eq!(pet.state(), StateId::Dead);
    assert_eq!(pet.pending(), None);
    assert!(sink.deaths().is_empty(), "natural end is not a death");
    assert_eq!(
        sink.events.last().map(|(_, e)| e.clone()),
        Some(PetEvent::LifeEnded {
            message: "Rex lived a long and happy life! :)".to_string()
        })
    );
    assert!(!timers.request_running());

    let events = sink.events.len();
    pet.answer("y", &mut timers, &mut sink);
    assert_eq!(sink.events.len(), events);
}

#[test]
fn life_timer_ends_game_while_sick() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    make_sick(&mut pet, &mut timers, &mut sink);

    pet.handle(PetInput::LifeTimerFired, &mut timers, &mut sink);

    assert_eq!(pet.state(), StateId::Dead);
    assert_eq!(
        sink.count(|e| matches!(e, PetEvent::LifeEnded { .. })),
        1
    );
    assert!(sink.deaths().is_empty());
}

// ── Snapshots ─────────────────────────────────────────────────

#[test]
fn snapshots_carry_post_transition_state() {
    let (mut pet, mut timers, mut sink) = make_pet("Rex");
    make_sick(&mut pet, &mut timers, &mut sink);

    let (snap, _) = sink
        .events
        .iter()
        .find(|(_, e)| matches!(e, PetEvent::StatusChanged { .. }))
        .expect("status change recorded");
    assert_eq!(snap.status, StateId::Sick);
    assert_eq!(snap.ignore_count, 3);
    assert_eq!(snap.max_ignored, 3);
}
