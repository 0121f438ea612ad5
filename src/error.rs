//! Unified error types for the microwave controller.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! dispatch path's error handling uniform.  All variants are `Copy` so
//! they pass through the controllers without allocation.
//!
//! None of these are runtime-recoverable: they signal a controller bug or
//! a broken actuator and are propagated to the caller, never retried.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A cook session was requested at a power outside 1–100 %.
    InvalidPower(u8),
    /// An actuator rejected a command.
    Actuator(ActuatorError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPower(p) => write!(f, "invalid power: {p}% (must be 1-100)"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// Power tube asked for a percentage outside 1–100.
    PowerOutOfRange(u8),
    /// Power tube is already energised.
    PowerTubeAlreadyOn,
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerOutOfRange(p) => write!(f, "power {p}% out of range 1-100"),
            Self::PowerTubeAlreadyOn => write!(f, "power tube is already on"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
