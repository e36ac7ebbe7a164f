//! Console input adapter.
//!
//! A dedicated thread owns stdin. It sleeps on [`LINE_REQUEST`] and reads
//! exactly one line per request, posting it to the event queue as
//! [`Event::ConsoleLine`]. The main loop asks for a line only while a prompt
//! is pending, so stray keystrokes between prompts are never consumed as
//! answers, and the blocking read never stalls the timers.

use std::io::{self, BufRead, BufReader};
use std::thread;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use log::{debug, warn};

use crate::events::{push_event, Event};

/// Raised by the main loop, consumed by the input thread.
static LINE_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Handle to the input thread.
pub struct ConsoleInput {
    awaiting: bool,
}

impl ConsoleInput {
    /// Spawn the input thread on stdin.
    pub fn spawn() -> io::Result<Self> {
        Self::spawn_reader(BufReader::new(io::stdin()))
    }

    /// Spawn the input thread on an arbitrary line source.
    pub fn spawn_reader<R: BufRead + Send + 'static>(reader: R) -> io::Result<Self> {
        // Detached: the thread lives until the process exits.
        let _reader = thread::Builder::new()
            .name("console-input".into())
            .spawn(move || read_loop(reader))?;
        Ok(Self { awaiting: false })
    }

    /// Ask the thread for the next line. Repeated calls before the line
    /// arrives are no-ops.
    pub fn request_line(&mut self) {
        if self.awaiting {
            return;
        }
        self.awaiting = true;
        LINE_REQUEST.signal(());
    }

    /// Mark the outstanding request as answered.
    pub fn line_received(&mut self) {
        self.awaiting = false;
    }

    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }
}

fn read_loop<R: BufRead>(mut reader: R) {
    loop {
        futures_lite::future::block_on(LINE_REQUEST.wait());

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => debug!("Input: end of stream"),
            Ok(_) => {}
            Err(e) => warn!("Input: read failed ({}), treating as empty answer", e),
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if !push_event(Event::ConsoleLine(line)) {
            warn!("Input: event queue full, line dropped");
        }
    }
}
