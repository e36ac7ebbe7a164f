//! Console input thread → event queue.
//!
//! The line-request signal and the event queue are process-wide, so this
//! file holds the only test in the binary that touches them.

use std::io::Cursor;
use std::time::Duration;

use tamagotchi::adapters::input::ConsoleInput;
use tamagotchi::events::{self, Event};

#[test]
fn lines_are_read_one_per_request() {
    let mut input = ConsoleInput::spawn_reader(Cursor::new("y\n  так \r\nleft over\n"))
        .expect("spawn input thread");

    // Nothing is read until a line is requested.
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(events::pop_event(), None);

    input.request_line();
    input.request_line();
    assert!(input.is_awaiting());
    assert_eq!(events::wait_event(), Event::ConsoleLine("y".to_string()));
    input.line_received();
    assert!(!input.is_awaiting());

    // The duplicate request above must not have read a second line.
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(events::pop_event(), None);

    input.request_line();
    assert_eq!(events::wait_event(), Event::ConsoleLine("  так ".to_string()));
    input.line_received();

    input.request_line();
    assert_eq!(events::wait_event(), Event::ConsoleLine("left over".to_string()));
    input.line_received();

    // End of input reads as an empty answer.
    input.request_line();
    assert_eq!(events::wait_event(), Event::ConsoleLine(String::new()));
}
