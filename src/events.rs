//! Event queue feeding the main loop.
//!
//! Events are produced by:
//! - The scheduler delegate (timer fires, main-loop thread)
//! - The console input thread (answered prompts)
//!
//! Events are consumed by the main loop, which is the single owner of the
//! pet and processes them one at a time in FIFO order.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Scheduler   │────▶│  Event Queue │────▶│  Main Loop   │
//! │ Input thread│────▶│  (MPMC)      │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::ports::TimerId;

/// Maximum number of pending events.
const EVENT_QUEUE_CAP: usize = 16;

/// System events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A scheduler timer fired.
    Timer(TimerId),
    /// The player entered a line at the console.
    ConsoleLine(String),
}

/// Shared by the input thread (producer) and the main loop (both ends).
static EVENT_QUEUE: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_CAP> = Channel::new();

/// Push an event into the queue from any thread.
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: Event) -> bool {
    EVENT_QUEUE.try_send(event).is_ok()
}

/// Pop the next event, or `None` if the queue is empty.
pub fn pop_event() -> Option<Event> {
    EVENT_QUEUE.try_receive().ok()
}

/// Drain all pending events into a callback, in FIFO order.
pub fn drain_events(mut handler: impl FnMut(Event)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

/// Block the calling thread until an event arrives.
pub fn wait_event() -> Event {
    futures_lite::future::block_on(EVENT_QUEUE.receive())
}

/// Number of pending events.
pub fn queue_len() -> usize {
    EVENT_QUEUE.len()
}
