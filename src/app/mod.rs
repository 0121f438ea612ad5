//! Application core: pure controller logic, zero I/O.
//!
//! All interaction with the oven's collaborators happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
