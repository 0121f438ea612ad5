//! Pending user selections threaded through the phase handlers.
//!
//! `Settings` holds what the user has dialled in before a cook session
//! starts: a power level and a cook time in whole minutes.  It is reset
//! whenever the controller returns to `Ready`.

/// Power and time selected while setting up a cook session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Selected power (%).  Zero until the first power press.
    pub power_percent: u8,
    /// Selected cook time (minutes).  No upper clamp.
    pub minutes: u32,
}

impl Settings {
    /// Forget everything the user selected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the cyclic power dial by one step, wrapping from `max` back
    /// to `step`.  From zero the first press lands on `step`.
    pub fn step_power(&mut self, step: u8, max: u8) -> u8 {
        self.power_percent = if self.power_percent >= max {
            step
        } else {
            self.power_percent.saturating_add(step)
        };
        self.power_percent
    }

    /// One more minute.
    pub fn add_minute(&mut self) -> u32 {
        self.minutes = self.minutes.saturating_add(1);
        self.minutes
    }

    /// One minute less, never below zero.
    pub fn remove_minute(&mut self) -> u32 {
        self.minutes = self.minutes.saturating_sub(1);
        self.minutes
    }

    /// Total cook time in seconds.
    pub fn cook_secs(&self) -> u32 {
        self.minutes.saturating_mul(60)
    }
}
