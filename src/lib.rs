//! Tamagotchi library.
//!
//! A console virtual pet: a health state machine driven by a periodic
//! request timer, a one-shot lifespan timer and the player's answers.
//! Everything outside `adapters` is free of terminal and clock access, so
//! the whole game can be driven from tests with mock ports.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
pub mod request;
pub mod scheduler;
