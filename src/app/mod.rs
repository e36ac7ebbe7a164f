//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the care rules for the pet: FSM orchestration,
//! request selection and the ignore counter. All interaction with the
//! terminal and the clock happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without a console.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
