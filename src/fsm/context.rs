//! Shared mutable context threaded through every FSM handler.
//!
//! `PetContext` is the single struct that state handlers read from and
//! write to. It holds the pet's counters and pending request, the random
//! source, and two outboxes: events for the sinks and timer commands for
//! the scheduler. The service drains both after every input.

use log::warn;
use rand::rngs::StdRng;

use crate::app::events::PetEvent;
use crate::config::PetConfig;
use crate::request::RequestKind;

/// Upper bound on events produced by a single input.
const NOTICE_CAP: usize = 4;

/// Upper bound on timer commands produced by a single input.
const TIMER_CMD_CAP: usize = 4;

// ---------------------------------------------------------------------------
// Timer commands (written by state handlers; applied by the service)
// ---------------------------------------------------------------------------

/// Timer changes requested by state handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    StartRequestTimer,
    StopRequestTimer,
    StopLifeTimer,
    StartCooldown { duration_ms: u32 },
}

// ---------------------------------------------------------------------------
// PetContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct PetContext {
    // -- Identity --
    pub name: String,

    // -- Care state --
    /// Consecutive ignored requests since the last satisfied one.
    pub ignore_count: u8,
    /// The request awaiting an answer, if any.
    pub pending: Option<RequestKind>,
    /// Last randomly picked kind (forced Heals do not count).
    pub previous: Option<RequestKind>,
    /// Set on falling sick, cleared when the cooldown elapses.
    pub cooling_down: bool,

    // -- Configuration --
    pub config: PetConfig,

    // -- Outputs --
    /// Events to emit once the current input is fully handled.
    pub notices: heapless::Vec<PetEvent, NOTICE_CAP>,
    /// Timer changes to apply once the current input is fully handled.
    pub timer_commands: heapless::Vec<TimerCommand, TIMER_CMD_CAP>,

    rng: StdRng,
}

impl PetContext {
    /// Create a new context for a freshly born pet.
    pub fn new(name: String, config: PetConfig) -> Self {
        let rng = config.rng();
        Self {
            name,
            ignore_count: 0,
            pending: None,
            previous: None,
            cooling_down: false,
            config,
            notices: heapless::Vec::new(),
            timer_commands: heapless::Vec::new(),
            rng,
        }
    }

    /// `true` between issuing a request and receiving its answer.
    pub fn waiting_for_answer(&self) -> bool {
        self.pending.is_some()
    }

    /// Pick a random kind that differs from the previous pick.
    pub fn pick_request(&mut self) -> RequestKind {
        let kind = RequestKind::pick(&mut self.rng, self.previous);
        self.previous = Some(kind);
        kind
    }

    /// Mark `kind` pending and announce it.
    pub fn issue(&mut self, kind: RequestKind) {
        self.pending = Some(kind);
        self.notify(PetEvent::RequestIssued {
            kind,
            message: kind.prompt(),
        });
    }

    /// Consume the pending request, if any.
    pub fn take_pending(&mut self) -> Option<RequestKind> {
        self.pending.take()
    }

    /// Count one more ignored request and announce it.
    pub fn record_ignored(&mut self) {
        self.ignore_count = self.ignore_count.saturating_add(1);
        self.notify(PetEvent::RequestIgnored {
            ignored: self.ignore_count,
            max: self.config.max_ignored,
        });
    }

    pub fn notify(&mut self, event: PetEvent) {
        if let Err(event) = self.notices.push(event) {
            warn!("notice outbox full, dropping {:?}", event);
        }
    }

    pub fn command(&mut self, cmd: TimerCommand) {
        if self.timer_commands.push(cmd).is_err() {
            warn!("timer outbox full, dropping {:?}", cmd);
        }
    }
}
