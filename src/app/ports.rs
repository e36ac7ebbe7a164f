//! Port traits: the hexagonal boundary between the pet and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PetService (domain)
//! ```
//!
//! Driven adapters (console, log, timers) implement these traits. The
//! [`PetService`](super::service::PetService) consumes them via generics, so
//! the domain core never touches the terminal or the clock directly.

use super::events::{PetEvent, PetSnapshot};

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console / log / observers)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`PetEvent`]s through this port, each paired
/// with the pet's state after the transaction that produced it.
pub trait EventSink {
    fn emit(&mut self, pet: &PetSnapshot, event: &PetEvent);
}

// ───────────────────────────────────────────────────────────────
// Timer port (driven adapter: domain → scheduler)
// ───────────────────────────────────────────────────────────────

/// Identity of each timer the pet uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TimerId {
    /// Periodic: generates care requests.
    Request = 0,
    /// One-shot: the pet's lifespan.
    Life = 1,
    /// One-shot: pause between falling sick and the first Heal request.
    Cooldown = 2,
}

impl TimerId {
    /// Total number of timers, used to size the scheduler's slot array.
    pub const COUNT: usize = 3;

    /// Human-readable label for logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Life => "life",
            Self::Cooldown => "cooldown",
        }
    }
}

/// Starts and stops the pet's timers.
///
/// Starting an already running timer restarts its interval from zero.
/// Stopping a stopped timer is a no-op.
pub trait TimerPort {
    /// (Re)start the periodic request timer.
    fn start_request_timer(&mut self);

    /// Stop the periodic request timer.
    fn stop_request_timer(&mut self);

    /// Start the one-shot lifespan timer.
    fn start_life_timer(&mut self);

    /// Stop the lifespan timer.
    fn stop_life_timer(&mut self);

    /// Arm the one-shot sick cooldown.
    fn start_cooldown(&mut self, duration_ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from event system)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the scheduler invokes when a timer fires.
///
/// This decouples the [`Scheduler`](crate::scheduler::Scheduler) from the
/// event queue. The main loop implements this by forwarding to
/// [`push_event`](crate::events::push_event), but the scheduler itself
/// knows nothing about events or queues.
pub trait SchedulerDelegate {
    /// Called when a timer fires.
    fn on_timer_fired(&mut self, timer: TimerId, kind: ScheduleFiredKind);
}

/// Discriminant passed to [`SchedulerDelegate::on_timer_fired`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFiredKind {
    /// A recurring periodic timer fired.
    Periodic,
    /// A one-shot timer fired (auto-disarms after).
    OneShot,
}
