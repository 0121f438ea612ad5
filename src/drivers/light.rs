//! Cavity light driver.
//!
//! A single GPIO switching the lamp relay.  Logs only on actual state
//! changes so repeated on/off requests stay quiet.

use embedded_hal::digital::OutputPin;
use log::{error, info};

pub struct LightDriver<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> LightDriver<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn turn_on(&mut self) {
        if self.on {
            return;
        }
        if let Err(e) = self.pin.set_high() {
            error!("Light: GPIO write failed: {:?}", e);
            return;
        }
        self.on = true;
        info!("Light is turned on");
    }

    pub fn turn_off(&mut self) {
        if !self.on {
            return;
        }
        if let Err(e) = self.pin.set_low() {
            error!("Light: GPIO write failed: {:?}", e);
            return;
        }
        self.on = false;
        info!("Light is turned off");
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
