//! Scheduler-backed timer adapter.
//!
//! Implements [`TimerPort`] on top of the tick-driven [`Scheduler`]. The
//! request interval and the lifespan are drawn once, when the pet is
//! created, from the ranges in [`PetConfig`].

use log::info;
use rand::Rng;

use crate::app::ports::{SchedulerDelegate, TimerId, TimerPort};
use crate::config::PetConfig;
use crate::scheduler::{ScheduleKind, Scheduler};

/// Adapter that maps the pet's timer commands onto scheduler slots.
pub struct SchedulerTimers {
    scheduler: Scheduler,
    request_interval_ms: u32,
    lifespan_ms: u32,
}

impl SchedulerTimers {
    pub fn new<R: Rng + ?Sized>(config: &PetConfig, rng: &mut R) -> Self {
        let request_interval_ms =
            rng.gen_range(config.request_interval_min_ms..config.request_interval_max_ms);
        let lifespan_ms = rng.gen_range(config.lifespan_min_ms..config.lifespan_max_ms);
        info!(
            "Timers: request every {}ms, lifespan {}ms",
            request_interval_ms, lifespan_ms
        );
        Self::with_intervals(request_interval_ms, lifespan_ms)
    }

    /// Fixed intervals, bypassing the random draw.
    pub fn with_intervals(request_interval_ms: u32, lifespan_ms: u32) -> Self {
        Self {
            scheduler: Scheduler::new(),
            request_interval_ms,
            lifespan_ms,
        }
    }

    pub fn request_interval_ms(&self) -> u32 {
        self.request_interval_ms
    }

    pub fn lifespan_ms(&self) -> u32 {
        self.lifespan_ms
    }

    pub fn is_running(&self, timer: TimerId) -> bool {
        self.scheduler.is_armed(timer)
    }

    /// Advance all timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u64, delegate: &mut dyn SchedulerDelegate) {
        self.scheduler.tick(elapsed_ms, delegate);
    }
}

impl TimerPort for SchedulerTimers {
    fn start_request_timer(&mut self) {
        self.scheduler.arm(
            TimerId::Request,
            ScheduleKind::Periodic {
                interval_ms: self.request_interval_ms,
            },
        );
    }

    fn stop_request_timer(&mut self) {
        self.scheduler.disarm(TimerId::Request);
    }

    fn start_life_timer(&mut self) {
        self.scheduler.arm(
            TimerId::Life,
            ScheduleKind::OneShot {
                delay_ms: self.lifespan_ms,
            },
        );
    }

    fn stop_life_timer(&mut self) {
        self.scheduler.disarm(TimerId::Life);
    }

    fn start_cooldown(&mut self, duration_ms: u32) {
        self.scheduler
            .arm(TimerId::Cooldown, ScheduleKind::OneShot { delay_ms: duration_ms });
    }
}
