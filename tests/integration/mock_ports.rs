//! Mock port adapters for integration tests.
//!
//! Records every timer call and every emitted event so tests can assert on
//! the full history without a terminal or a clock.

use tamagotchi::app::events::{PetEvent, PetSnapshot};
use tamagotchi::app::ports::{EventSink, TimerPort};
use tamagotchi::request::RequestKind;

// ── Timer call record ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCall {
    StartRequest,
    StopRequest,
    StartLife,
    StopLife,
    StartCooldown(u32),
}

// ── MockTimers ────────────────────────────────────────────────

#[derive(Default)]
pub struct MockTimers {
    pub calls: Vec<TimerCall>,
}

#[allow(dead_code)]
impl MockTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the request timer is running after the recorded calls.
    pub fn request_running(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                TimerCall::StartRequest => Some(true),
                TimerCall::StopRequest => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn count(&self, call: TimerCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl TimerPort for MockTimers {
    fn start_request_timer(&mut self) {
        self.calls.push(TimerCall::StartRequest);
    }

    fn stop_request_timer(&mut self) {
        self.calls.push(TimerCall::StopRequest);
    }

    fn start_life_timer(&mut self) {
        self.calls.push(TimerCall::StartLife);
    }

    fn stop_life_timer(&mut self) {
        self.calls.push(TimerCall::StopLife);
    }

    fn start_cooldown(&mut self, duration_ms: u32) {
        self.calls.push(TimerCall::StartCooldown(duration_ms));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// Keeps every event together with the snapshot it was emitted with.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<(PetSnapshot, PetEvent)>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn count(&self, pred: impl Fn(&PetEvent) -> bool) -> usize {
        self.events.iter().filter(|(_, e)| pred(e)).count()
    }

    /// Kinds of every issued request, in order.
    pub fn issued(&self) -> Vec<RequestKind> {
        self.events
            .iter()
            .filter_map(|(_, e)| match e {
                PetEvent::RequestIssued { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn last_prompt(&self) -> Option<&'static str> {
        self.events.iter().rev().find_map(|(_, e)| match e {
            PetEvent::RequestIssued { message, .. } => Some(*message),
            _ => None,
        })
    }

    pub fn deaths(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|(_, e)| match e {
                PetEvent::Died { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, pet: &PetSnapshot, event: &PetEvent) {
        self.events.push((pet.clone(), event.clone()));
    }
}
