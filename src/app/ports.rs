//! Port traits: the hexagonal boundary between controller logic and the
//! oven's collaborators.
//!
//! ```text
//!   Controllers ──▶ Port trait ──▶ Adapter (drivers / test doubles)
//! ```
//!
//! Driven adapters (timer, power tube, display, light, buzzer, event
//! sinks) implement these traits.  The controllers consume them via
//! generics passed at the call site, so the core never owns hardware
//! and never touches it directly.
//!
//! Method names are distinct across ports so a single adapter can
//! implement all of them without call-site ambiguity.

use crate::error::ActuatorError;

// ───────────────────────────────────────────────────────────────
// Timer port
// ───────────────────────────────────────────────────────────────

/// Countdown timer.  Its tick/expiry notifications arrive separately as
/// [`Event::TimerTick`](crate::events::Event::TimerTick) and
/// [`Event::TimerExpired`](crate::events::Event::TimerExpired).
pub trait TimerPort {
    /// Start counting down from `seconds`.
    fn start_timer(&mut self, seconds: u32);

    /// Stop counting.  No further tick/expiry notifications.
    fn stop_timer(&mut self);

    /// Seconds left on the countdown.
    fn time_remaining(&self) -> u32;

    /// Overwrite the seconds left on a running countdown.
    fn set_time_remaining(&mut self, seconds: u32);
}

// ───────────────────────────────────────────────────────────────
// Power tube port
// ───────────────────────────────────────────────────────────────

/// Heating element.
pub trait PowerTubePort {
    /// Energise at `percent` of full power.
    ///
    /// Fails with [`ActuatorError::PowerOutOfRange`] outside 1–100 and
    /// [`ActuatorError::PowerTubeAlreadyOn`] if already energised.
    fn power_on(&mut self, percent: u8) -> Result<(), ActuatorError>;

    /// De-energise.  Calling this while off is harmless.
    fn power_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Output sinks
// ───────────────────────────────────────────────────────────────

pub trait DisplayPort {
    fn show_power(&mut self, percent: u8);
    fn show_time(&mut self, minutes: u32, seconds: u32);
    fn clear_display(&mut self);
}

pub trait LightPort {
    fn light_on(&mut self);
    fn light_off(&mut self);
}

pub trait BuzzerPort {
    /// Sound `count` short beeps.  Zero is silent.
    fn short_beep(&mut self, count: u32);
}

/// Every collaborator the interaction controller drives.
pub trait OvenHardware: TimerPort + PowerTubePort + DisplayPort + LightPort + BuzzerPort {}

impl<T> OvenHardware for T where T: TimerPort + PowerTubePort + DisplayPort + LightPort + BuzzerPort {}

// ───────────────────────────────────────────────────────────────
// Event sink port (controller → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The service emits structured [`OvenEvent`](super::events::OvenEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::OvenEvent);
}
