//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. Everything runs on the host with no terminal
//! attached.

mod input_tests;
mod mock_ports;
mod pet_service_tests;
