//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter     | Implements       | Connects to                       |
//! |-------------|------------------|-----------------------------------|
//! | `console`   | EventSink        | Terminal (crossterm redraw)       |
//! | `input`     | -                | stdin reader thread → event queue |
//! | `log_sink`  | EventSink        | `log` facade                      |
//! | `observers` | EventSink        | User callbacks, sink fan-out      |
//! | `time`      | -                | `std::time::Instant`              |
//! | `timers`    | TimerPort        | Tick-driven scheduler             |

pub mod console;
pub mod input;
pub mod log_sink;
pub mod observers;
pub mod time;
pub mod timers;
