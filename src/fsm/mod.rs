//! Function-pointer finite state machine engine.
//!
//! Classic table-driven FSM:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  StateTable                                              │
//! │  ┌─────────┬───────────┬──────────┬──────────────────┐   │
//! │  │ StateId │ on_enter  │ on_exit  │ on_input         │   │
//! │  ├─────────┼───────────┼──────────┼──────────────────┤   │
//! │  │ Healthy │ fn(ctx)   │ -        │ fn(ctx,in)->Opt  │   │
//! │  │ Sick    │ fn(ctx)   │ -        │ fn(ctx,in)->Opt  │   │
//! │  │ Dead    │ fn(ctx)   │ -        │ fn(ctx,in)->Opt  │   │
//! │  └─────────┴───────────┴──────────┴──────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each input is handed to `on_input` of the **current** state. If it
//! returns `Some(next_id)`, the engine runs `on_exit` for the current
//! state, then `on_enter` for the next, and updates the current pointer.
//! All functions receive `&mut PetContext`, which holds the counters, the
//! pending request and the output queues.

pub mod context;
pub mod states;

use context::PetContext;
use log::info;
use serde::Serialize;

use crate::app::commands::PetInput;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// The pet's health.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum StateId {
    Healthy = 0,
    Sick = 1,
    Dead = 2,
}

impl StateId {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 3;

    /// Convert an index back to `StateId`. Asserts in debug builds;
    /// returns `Dead` in release (terminal, so nothing else can happen).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Healthy,
            1 => Self::Sick,
            2 => Self::Dead,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Dead
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each state transition.
pub type StateActionFn = fn(&mut PetContext);

/// Signature for the per-input handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateInputFn = fn(&mut PetContext, PetInput) -> Option<StateId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_input: StateInputFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns the state table (array of [`StateDescriptor`]); the mutable
/// [`PetContext`] is threaded through every handler call.
pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    /// Index of the currently active state.
    current: usize,
    /// Total inputs dispatched.
    input_count: u64,
    /// Input count at which the current state was entered.
    state_entry_input: u64,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, d)| d.id as usize == i),
            "state table out of order"
        );
        Self {
            table,
            current: initial as usize,
            input_count: 0,
            state_entry_input: 0,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `dispatch()`.
    pub fn start(&mut self, ctx: &mut PetContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Hand one input to the current state.
    ///
    /// 1. Call `on_input` for the current state.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    pub fn dispatch(&mut self, input: PetInput, ctx: &mut PetContext) {
        self.input_count += 1;

        let next = (self.table[self.current].on_input)(ctx, input);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// Force an immediate transition, bypassing `on_input`.
    pub fn force_transition(&mut self, next: StateId, ctx: &mut PetContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    /// How many inputs the FSM has handled in the current state.
    pub fn inputs_in_current_state(&self) -> u64 {
        self.input_count - self.state_entry_input
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: StateId, ctx: &mut PetContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {} (after {} inputs)",
            self.table[self.current].name,
            self.table[next_idx].name,
            self.inputs_in_current_state()
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;
        self.state_entry_input = self.input_count;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
