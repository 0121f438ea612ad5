//! Magnetron power tube driver.
//!
//! Output power is set as a PWM duty cycle (percent of the tube's rated
//! wattage).  The driver enforces the tube's contract itself:
//!
//! - power must be 1–100 %
//! - the tube cannot be turned on while already on
//!
//! Turning off is always allowed and is a no-op when already off.

use embedded_hal::pwm::SetDutyCycle;
use log::{error, info};

use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerTubeState {
    Off,
    On { percent: u8, watts: u32 },
}

pub struct PowerTubeDriver<P> {
    pwm: P,
    max_watts: u32,
    state: PowerTubeState,
}

impl<P: SetDutyCycle> PowerTubeDriver<P> {
    pub fn new(pwm: P, max_watts: u32) -> Self {
        Self {
            pwm,
            max_watts,
            state: PowerTubeState::Off,
        }
    }

    pub fn turn_on(&mut self, percent: u8) -> Result<(), ActuatorError> {
        if !(1..=100).contains(&percent) {
            return Err(ActuatorError::PowerOutOfRange(percent));
        }
        if self.is_on() {
            return Err(ActuatorError::PowerTubeAlreadyOn);
        }

        self.pwm
            .set_duty_cycle_percent(percent)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;

        let watts = (u64::from(self.max_watts) * u64::from(percent) / 100) as u32;
        self.state = PowerTubeState::On { percent, watts };
        info!("PowerTube works with {}W", watts);
        Ok(())
    }

    pub fn turn_off(&mut self) {
        if !self.is_on() {
            return;
        }
        if let Err(e) = self.pwm.set_duty_cycle_fully_off() {
            error!("PowerTube: PWM off write failed: {:?}", e);
        }
        self.state = PowerTubeState::Off;
        info!("PowerTube turned off");
    }

    pub fn state(&self) -> PowerTubeState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, PowerTubeState::On { .. })
    }

    /// Current output (W), zero when off.
    pub fn current_watts(&self) -> u32 {
        match self.state {
            PowerTubeState::On { watts, .. } => watts,
            PowerTubeState::Off => 0,
        }
    }

    /// Release the PWM channel.
    pub fn release(self) -> P {
        self.pwm
    }
}
