//! Timer/scheduler engine.
//!
//! Tick-driven software timers for the pet. The main loop advances the
//! scheduler with the measured elapsed time; the scheduler notifies a
//! [`SchedulerDelegate`] when a timer fires, and the main loop implements
//! the delegate to push events into the queue.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Timer slots                           │
//! │                                                              │
//! │   ┌────────────────┐  ┌────────────────┐  ┌────────────────┐ │
//! │   │ Request        │  │ Life           │  │ Cooldown       │ │
//! │   │ (periodic)     │  │ (one-shot)     │  │ (one-shot)     │ │
//! │   └───────┬────────┘  └───────┬────────┘  └───────┬────────┘ │
//! │           ▼                   ▼                   ▼          │
//! │   ┌────────────────────────────────────────────────────────┐ │
//! │   │              SchedulerDelegate                         │ │
//! │   │       (main loop pushes into Event Queue)              │ │
//! │   └───────────────────────┬────────────────────────────────┘ │
//! │                           ▼                                  │
//! │                    PetService.handle()                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::app::ports::{ScheduleFiredKind, SchedulerDelegate, TimerId};
use log::{debug, info};

// ═══════════════════════════════════════════════════════════════
//  Schedule types
// ═══════════════════════════════════════════════════════════════

/// The type of schedule determines how and when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Fire every `interval_ms` milliseconds until disarmed.
    Periodic { interval_ms: u32 },
    /// Fire once after `delay_ms`, then auto-disarm.
    OneShot { delay_ms: u32 },
}

/// Internal bookkeeping for an armed timer.
#[derive(Debug, Clone)]
struct ScheduleEntry {
    kind: ScheduleKind,
    /// Milliseconds accumulated since arming or the last periodic fire.
    elapsed_ms: u64,
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler engine
// ═══════════════════════════════════════════════════════════════

/// The scheduler engine.
///
/// One slot per [`TimerId`]. When a timer fires, the scheduler invokes the
/// [`SchedulerDelegate`] callback rather than pushing events itself, which
/// keeps it testable without the event queue.
pub struct Scheduler {
    slots: [Option<ScheduleEntry>; TimerId::COUNT],
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            slots: [None, None, None],
        }
    }

    /// Arm `timer`. Re-arming an armed timer restarts it from zero.
    pub fn arm(&mut self, timer: TimerId, kind: ScheduleKind) {
        info!("Scheduler: armed '{}' ({:?})", timer.label(), kind);
        self.slots[timer as usize] = Some(ScheduleEntry {
            kind,
            elapsed_ms: 0,
        });
    }

    /// Disarm `timer`. No-op when already disarmed.
    pub fn disarm(&mut self, timer: TimerId) {
        if self.slots[timer as usize].take().is_some() {
            info!("Scheduler: disarmed '{}'", timer.label());
        }
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.slots[timer as usize].is_some()
    }

    /// Advance every armed timer by `elapsed_ms`.
    ///
    /// A periodic timer fires at most once per tick even if `elapsed_ms`
    /// spans several intervals; the remainder carries over.
    pub fn tick(&mut self, elapsed_ms: u64, delegate: &mut dyn SchedulerDelegate) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let Some(entry) = slot else { continue };
            let timer = timer_from_index(idx);

            entry.elapsed_ms += elapsed_ms;

            match entry.kind {
                ScheduleKind::Periodic { interval_ms } => {
                    let interval = u64::from(interval_ms).max(1);
                    if entry.elapsed_ms >= interval {
                        debug!("Scheduler: '{}' periodic fire (every {}ms)", timer.label(), interval_ms);
                        delegate.on_timer_fired(timer, ScheduleFiredKind::Periodic);
                        entry.elapsed_ms = (entry.elapsed_ms - interval).min(interval - 1);
                    }
                }

                ScheduleKind::OneShot { delay_ms } => {
                    if entry.elapsed_ms >= u64::from(delay_ms) {
                        info!("Scheduler: '{}' one-shot fired (after {}ms)", timer.label(), delay_ms);
                        delegate.on_timer_fired(timer, ScheduleFiredKind::OneShot);
                        *slot = None; // Auto-disarm.
                    }
                }
            }
        }
    }

    /// Number of armed timers.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

fn timer_from_index(idx: usize) -> TimerId {
    match idx {
        0 => TimerId::Request,
        1 => TimerId::Life,
        _ => TimerId::Cooldown,
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
