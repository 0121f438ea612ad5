//! Oven configuration parameters
//!
//! All tunable parameters for the controller and its reference drivers.
//! Values can be loaded from a JSON document; call [`OvenConfig::validate`]
//! before handing a config to the controllers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core oven configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvenConfig {
    // --- Power dial ---
    /// Increment per power-button press (%)
    pub power_step_percent: u8,
    /// Highest selectable power before the dial wraps back to one step (%)
    pub max_power_percent: u8,

    // --- Power tube ---
    /// Output of the power tube at 100 % (W)
    pub power_tube_max_watts: u32,

    // --- Buzzer ---
    /// Short beeps sounded when a cook session completes
    pub completion_beeps: u32,
    /// Length of one beep, and of the gap after it (milliseconds)
    pub beep_duration_ms: u32,

    // --- Timing ---
    /// Countdown timer tick interval (milliseconds)
    pub tick_interval_ms: u32,
    /// Button/door debounce window (milliseconds)
    pub debounce_ms: u32,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            // Power dial: 10 % .. 100 % in 10 % steps
            power_step_percent: 10,
            max_power_percent: 100,

            // Power tube
            power_tube_max_watts: 700,

            // Buzzer
            completion_beeps: 3,
            beep_duration_ms: 100,

            // Timing
            tick_interval_ms: 1000, // 1 Hz
            debounce_ms: 50,
        }
    }
}

impl OvenConfig {
    /// Parse a config from JSON.  Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations the controllers cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.power_step_percent == 0 {
            return Err(Error::Config("power_step_percent must be non-zero"));
        }
        if self.max_power_percent > 100 {
            return Err(Error::Config("max_power_percent must be at most 100"));
        }
        if self.max_power_percent < self.power_step_percent {
            return Err(Error::Config("max_power_percent below power_step_percent"));
        }
        if self.max_power_percent % self.power_step_percent != 0 {
            return Err(Error::Config(
                "max_power_percent must be a multiple of power_step_percent",
            ));
        }
        if self.power_tube_max_watts == 0 {
            return Err(Error::Config("power_tube_max_watts must be non-zero"));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be non-zero"));
        }
        Ok(())
    }
}
