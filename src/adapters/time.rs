//! Host time adapter.
//!
//! Monotonic time for the main loop, backed by `std::time::Instant`. The
//! loop asks for the time elapsed since its previous tick and feeds that to
//! the scheduler, so sleep jitter never accumulates into timer drift.

use std::time::{Duration, Instant};

/// Monotonic clock for the main loop.
pub struct HostClock {
    start: Instant,
    last_lap: Instant,
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_lap: now,
        }
    }

    /// Milliseconds since construction.
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Whole milliseconds since the previous lap (or construction). The
    /// sub-millisecond remainder carries into the next lap.
    pub fn lap_ms(&mut self) -> u64 {
        let lap = self.last_lap.elapsed().as_millis() as u64;
        self.last_lap += Duration::from_millis(lap);
        lap
    }
}
