//! Cook session control, driven by the interaction state machine.

pub mod cook;
