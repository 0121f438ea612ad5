//! Microwave oven controller library.
//!
//! The controller core (`fsm`, `control`, `app`) is hardware-agnostic and
//! drives its collaborators through the port traits in [`app::ports`].
//! `drivers` and `adapters` bind those ports to `embedded-hal`
//! peripherals.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
