//! Inbound inputs to the pet service.
//!
//! These represent everything the outside world can do to the pet: the
//! timers firing and the player answering a prompt. The
//! [`PetService`](super::service::PetService) feeds them to the FSM one at
//! a time.

use super::ports::TimerId;

/// Inputs that adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetInput {
    /// The periodic request timer elapsed.
    RequestTimerFired,

    /// The one-shot lifespan timer elapsed.
    LifeTimerFired,

    /// The pause after falling sick is over; time to ask for a Heal.
    CooldownElapsed,

    /// The player answered the pending prompt (`true` = request satisfied).
    Answered(bool),
}

impl From<TimerId> for PetInput {
    fn from(timer: TimerId) -> Self {
        match timer {
            TimerId::Request => Self::RequestTimerFired,
            TimerId::Life => Self::LifeTimerFired,
            TimerId::Cooldown => Self::CooldownElapsed,
        }
    }
}
