//! Pet service, the hexagonal core.
//!
//! [`PetService`] owns the FSM and the shared context. It exposes a clean,
//! console-agnostic API. All I/O flows through port traits injected at call
//! sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  PetInput ──▶ ┌────────────────────────┐ ──▶ EventSink
//!               │       PetService       │
//!  TimerPort ◀──│   FSM · PetContext     │
//!               └────────────────────────┘
//! ```
//!
//! Every input is one transaction: the FSM runs, then the queued events are
//! emitted and the queued timer commands applied, in that order.

use log::{debug, info};

use crate::config::PetConfig;
use crate::fsm::context::{PetContext, TimerCommand};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::request::RequestKind;

use super::commands::PetInput;
use super::events::{PetEvent, PetSnapshot};
use super::ports::{EventSink, TimerPort};

// ───────────────────────────────────────────────────────────────
// PetService
// ───────────────────────────────────────────────────────────────

/// The pet controller: the only owner of the pet's state.
pub struct PetService {
    fsm: Fsm,
    ctx: PetContext,
}

impl PetService {
    /// Construct the pet. Does **not** start its timers; call [`start`] next.
    ///
    /// [`start`]: Self::start
    pub fn new(name: impl Into<String>, config: PetConfig) -> Self {
        let ctx = PetContext::new(name.into(), config);
        let fsm = Fsm::new(build_state_table(), StateId::Healthy);
        Self { fsm, ctx }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Enter the initial state, start both timers and announce the birth.
    pub fn start(&mut self, timers: &mut impl TimerPort, sink: &mut impl EventSink) {
        if self.is_terminal() {
            return;
        }
        self.fsm.start(&mut self.ctx);
        timers.start_request_timer();
        timers.start_life_timer();
        sink.emit(&self.snapshot(), &PetEvent::Born);
        info!("PetService started: {}", self.ctx.name);
    }

    // ── Input handling ────────────────────────────────────────

    /// Run one input through the FSM and flush its outputs.
    pub fn handle(
        &mut self,
        input: PetInput,
        timers: &mut impl TimerPort,
        sink: &mut impl EventSink,
    ) {
        let prev_state = self.fsm.current_state();
        self.fsm.dispatch(input, &mut self.ctx);
        let new_state = self.fsm.current_state();

        let snapshot = self.snapshot();
        let notices = core::mem::take(&mut self.ctx.notices);
        for event in &notices {
            sink.emit(&snapshot, event);
        }

        if new_state != prev_state && new_state != StateId::Dead {
            let message = match new_state {
                StateId::Sick => format!("{} sick!", self.ctx.name),
                _ => format!("{} recovered!", self.ctx.name),
            };
            sink.emit(
                &snapshot,
                &PetEvent::StatusChanged {
                    from: prev_state,
                    to: new_state,
                    message,
                },
            );
        }

        self.apply_timer_commands(timers);
    }

    /// Interpret a raw console line as the answer to the pending prompt.
    pub fn answer(&mut self, line: &str, timers: &mut impl TimerPort, sink: &mut impl EventSink) {
        let satisfied = self.ctx.config.is_affirmative(line);
        debug!("answer {:?} -> satisfied={}", line.trim(), satisfied);
        self.handle(PetInput::Answered(satisfied), timers, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.ctx.name
    }

    /// Current health.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Consecutive ignored requests.
    pub fn ignore_count(&self) -> u8 {
        self.ctx.ignore_count
    }

    /// The request awaiting an answer, if any.
    pub fn pending(&self) -> Option<RequestKind> {
        self.ctx.pending
    }

    pub fn waiting_for_answer(&self) -> bool {
        self.ctx.waiting_for_answer()
    }

    /// `true` once the pet has died or reached the end of its lifespan.
    pub fn is_terminal(&self) -> bool {
        self.fsm.current_state() == StateId::Dead
    }

    pub fn config(&self) -> &PetConfig {
        &self.ctx.config
    }

    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            name: self.ctx.name.clone(),
            status: self.fsm.current_state(),
            ignore_count: self.ctx.ignore_count,
            max_ignored: self.ctx.config.max_ignored,
            pending: self.ctx.pending,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate FSM timer commands into port calls.
    fn apply_timer_commands(&mut self, timers: &mut impl TimerPort) {
        let commands = core::mem::take(&mut self.ctx.timer_commands);
        for cmd in commands {
            match cmd {
                TimerCommand::StartRequestTimer => timers.start_request_timer(),
                TimerCommand::StopRequestTimer => timers.stop_request_timer(),
                TimerCommand::StopLifeTimer => timers.stop_life_timer(),
                TimerCommand::StartCooldown { duration_ms } => timers.start_cooldown(duration_ms),
            }
        }
    }
}
