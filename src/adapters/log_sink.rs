//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured pet events to the `log`
//! facade (stderr via `env_logger` in the binary). A debug-level JSON
//! snapshot follows every event for offline inspection.

use log::{debug, info, warn};

use crate::app::events::{PetEvent, PetSnapshot};
use crate::app::ports::EventSink;

/// Adapter that logs every [`PetEvent`].
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, pet: &PetSnapshot, event: &PetEvent) {
        match event {
            PetEvent::Born => {
                info!("BORN | name={}", pet.name);
            }
            PetEvent::RequestIssued { kind, .. } => {
                info!(
                    "REQUEST | {:?} | ignored={}/{}",
                    kind, pet.ignore_count, pet.max_ignored
                );
            }
            PetEvent::RequestSatisfied { kind, .. } => {
                info!("ANSWER | {:?} satisfied", kind);
            }
            PetEvent::RequestIgnored { ignored, max } => {
                info!("ANSWER | ignored ({}/{})", ignored, max);
            }
            PetEvent::StatusChanged { from, to, .. } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            PetEvent::Died { message } => {
                warn!("DEATH | {}", message);
            }
            PetEvent::LifeEnded { message } => {
                info!("END | {}", message);
            }
        }

        match serde_json::to_string(pet) {
            Ok(json) => debug!("SNAPSHOT | {}", json),
            Err(e) => warn!("SNAPSHOT | serialisation failed: {}", e),
        }
    }
}
