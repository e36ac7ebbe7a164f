//! Outbound application events.
//!
//! The [`PetService`](super::service::PetService) emits these through the
//! [`EventSink`](super::ports::EventSink) port together with a
//! [`PetSnapshot`]. Adapters on the other side decide what to do with them:
//! redraw the console, write a log line, call a user callback.

use serde::Serialize;

use crate::fsm::StateId;
use crate::request::RequestKind;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetEvent {
    /// The pet was born and its timers are running.
    Born,

    /// A new care request is pending.
    RequestIssued {
        kind: RequestKind,
        message: &'static str,
    },

    /// The player satisfied the pending request.
    RequestSatisfied {
        kind: RequestKind,
        reply: &'static str,
    },

    /// The player ignored the pending request.
    RequestIgnored { ignored: u8, max: u8 },

    /// The pet fell sick or recovered.
    StatusChanged {
        from: StateId,
        to: StateId,
        message: String,
    },

    /// The pet died of neglect (ignored Heal while sick).
    Died { message: String },

    /// The lifespan elapsed while the pet was still alive.
    LifeEnded { message: String },
}

impl PetEvent {
    /// Whether this event ends the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Died { .. } | Self::LifeEnded { .. })
    }
}

/// A point-in-time view of the pet, handed to sinks with every event.
#[derive(Debug, Clone, Serialize)]
pub struct PetSnapshot {
    pub name: String,
    pub status: StateId,
    pub ignore_count: u8,
    pub max_ignored: u8,
    pub pending: Option<RequestKind>,
}
