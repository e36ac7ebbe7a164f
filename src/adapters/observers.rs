//! Observer adapters.
//!
//! | Type               | Role                                             |
//! |--------------------|--------------------------------------------------|
//! | `CallbackObserver` | request / status / death callbacks on messages   |
//! | `Observers`        | fan-out to every registered [`EventSink`]        |

use crate::app::events::{PetEvent, PetSnapshot};
use crate::app::ports::EventSink;

type Callback = Box<dyn FnMut(&str)>;

/// Calls one of three text callbacks for the events that carry a message
/// meant for the player. Other events are not forwarded.
pub struct CallbackObserver {
    on_request_issued: Callback,
    on_status_changed: Callback,
    on_death: Callback,
}

impl CallbackObserver {
    pub fn new(
        on_request_issued: impl FnMut(&str) + 'static,
        on_status_changed: impl FnMut(&str) + 'static,
        on_death: impl FnMut(&str) + 'static,
    ) -> Self {
        Self {
            on_request_issued: Box::new(on_request_issued),
            on_status_changed: Box::new(on_status_changed),
            on_death: Box::new(on_death),
        }
    }
}

impl EventSink for CallbackObserver {
    fn emit(&mut self, _pet: &PetSnapshot, event: &PetEvent) {
        match event {
            PetEvent::RequestIssued { message, .. } => (self.on_request_issued)(message),
            PetEvent::StatusChanged { message, .. } => (self.on_status_changed)(message),
            PetEvent::Died { message } => (self.on_death)(message),
            _ => {}
        }
    }
}

/// Ordered list of sinks; every event goes to each of them in
/// registration order.
#[derive(Default)]
pub struct Observers {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    #[must_use]
    pub fn with(mut self, sink: impl EventSink + 'static) -> Self {
        self.register(sink);
        self
    }

    pub fn register(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for Observers {
    fn emit(&mut self, pet: &PetSnapshot, event: &PetEvent) {
        for sink in &mut self.sinks {
            sink.emit(pet, event);
        }
    }
}
