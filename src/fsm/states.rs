//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers: no closures, no dynamic
//! dispatch.
//!
//! ```text
//!  HEALTHY ──[ignored × max]──▶ SICK ──[Heal ignored]──▶ DEAD
//!     ▲                           │
//!     └──────[Heal satisfied]─────┘
//!
//!  Any live state ──[life timer]──▶ DEAD (natural end)
//! ```

use super::context::{PetContext, TimerCommand};
use super::{StateDescriptor, StateId};
use crate::app::commands::PetInput;
use crate::app::events::PetEvent;
use crate::request::RequestKind;
use log::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the state table. Called once per pet.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Healthy
        StateDescriptor {
            id: StateId::Healthy,
            name: "Healthy",
            on_enter: Some(healthy_enter),
            on_exit: None,
            on_input: healthy_input,
        },
        // Index 1: Sick
        StateDescriptor {
            id: StateId::Sick,
            name: "Sick",
            on_enter: Some(sick_enter),
            on_exit: None,
            on_input: sick_input,
        },
        // Index 2: Dead
        StateDescriptor {
            id: StateId::Dead,
            name: "Dead",
            on_enter: Some(dead_enter),
            on_exit: None,
            on_input: dead_input,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  HEALTHY state
// ═══════════════════════════════════════════════════════════════════════════

fn healthy_enter(ctx: &mut PetContext) {
    info!("HEALTHY: {} is doing fine", ctx.name);
}

fn healthy_input(ctx: &mut PetContext, input: PetInput) -> Option<StateId> {
    match input {
        PetInput::RequestTimerFired => {
            if ctx.waiting_for_answer() {
                debug!("HEALTHY: request tick while waiting, skipped");
                return None;
            }
            let kind = ctx.pick_request();
            ctx.issue(kind);
            None
        }

        PetInput::Answered(satisfied) => {
            let kind = ctx.take_pending()?;
            if satisfied {
                ctx.ignore_count = 0;
                ctx.notify(PetEvent::RequestSatisfied {
                    kind,
                    reply: kind.reply(),
                });
                return None;
            }

            ctx.record_ignored();
            if ctx.ignore_count >= ctx.config.max_ignored {
                return Some(StateId::Sick);
            }
            None
        }

        // Cooldown outlived the Sick state it was armed for.
        PetInput::CooldownElapsed => {
            ctx.cooling_down = false;
            ctx.command(TimerCommand::StartRequestTimer);
            None
        }

        PetInput::LifeTimerFired => life_ended(ctx),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SICK state: only Heal requests, ignoring one is fatal
// ═══════════════════════════════════════════════════════════════════════════

fn sick_enter(ctx: &mut PetContext) {
    warn!(
        "SICK: {} ignored {} requests, cooling down {}ms",
        ctx.name, ctx.ignore_count, ctx.config.sick_cooldown_ms
    );
    ctx.cooling_down = true;
    ctx.command(TimerCommand::StopRequestTimer);
    ctx.command(TimerCommand::StartCooldown {
        duration_ms: ctx.config.sick_cooldown_ms,
    });
}

fn sick_input(ctx: &mut PetContext, input: PetInput) -> Option<StateId> {
    match input {
        // A tick queued before the request timer was stopped can still
        // arrive during the cooldown.
        PetInput::RequestTimerFired => {
            if ctx.waiting_for_answer() || ctx.cooling_down {
                debug!("SICK: request tick while waiting or cooling down, skipped");
                return None;
            }
            ctx.issue(RequestKind::Heal);
            None
        }

        PetInput::CooldownElapsed => {
            ctx.cooling_down = false;
            if !ctx.waiting_for_answer() {
                ctx.issue(RequestKind::Heal);
            }
            ctx.command(TimerCommand::StartRequestTimer);
            None
        }

        PetInput::Answered(satisfied) => {
            let kind = ctx.take_pending()?;
            if satisfied {
                ctx.ignore_count = 0;
                return (kind == RequestKind::Heal).then_some(StateId::Healthy);
            }

            ctx.record_ignored();
            if kind != RequestKind::Heal {
                return None;
            }
            info!("SICK: Heal ignored, {} starved", ctx.name);
            ctx.command(TimerCommand::StopLifeTimer);
            let message = format!("{} died", ctx.name);
            ctx.notify(PetEvent::Died { message });
            Some(StateId::Dead)
        }

        PetInput::LifeTimerFired => life_ended(ctx),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  DEAD state (absorbing)
// ═══════════════════════════════════════════════════════════════════════════

fn dead_enter(ctx: &mut PetContext) {
    ctx.pending = None;
    ctx.command(TimerCommand::StopRequestTimer);
    info!("DEAD: {} is gone", ctx.name);
}

fn dead_input(_ctx: &mut PetContext, input: PetInput) -> Option<StateId> {
    debug!("DEAD: ignoring {:?}", input);
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  Shared
// ═══════════════════════════════════════════════════════════════════════════

/// Natural end: the life timer is one-shot and already spent, so only the
/// request timer is stopped (by `dead_enter`).
fn life_ended(ctx: &mut PetContext) -> Option<StateId> {
    info!("LIFE: {} reached the end of its lifespan", ctx.name);
    let message = format!("{} lived a long and happy life! :)", ctx.name);
    ctx.notify(PetEvent::LifeEnded { message });
    Some(StateId::Dead)
}
