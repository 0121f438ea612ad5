//! Outbound oven events.
//!
//! The [`OvenService`](super::service::OvenService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::fsm::Phase;

/// Structured events emitted by the controller core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvenEvent {
    /// The service has started (carries initial phase).
    Started(Phase),

    /// The interaction controller moved between phases.
    PhaseChanged { from: Phase, to: Phase },

    /// A cook session began.
    CookingStarted { power_percent: u8, seconds: u32 },

    /// The cook session ended.
    CookingEnded(EndReason),
}

/// Why a cook session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The countdown expired.
    Completed,
    /// The start/cancel button was pressed mid-session.
    Cancelled,
    /// The door was opened mid-session.
    DoorOpened,
}
