//! Piezo buzzer driver.
//!
//! Each short beep drives the pin high for `beep_ms`, then low for the
//! same gap.  Blocking: the delay provider is busy-waited.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{error, info};

pub struct BuzzerDriver<P, D> {
    pin: P,
    delay: D,
    beep_ms: u32,
    beeps_sounded: u64,
}

impl<P: OutputPin, D: DelayNs> BuzzerDriver<P, D> {
    pub fn new(pin: P, delay: D, beep_ms: u32) -> Self {
        Self {
            pin,
            delay,
            beep_ms,
            beeps_sounded: 0,
        }
    }

    /// Sound `count` short beeps.  Zero is silent.
    pub fn short_beep(&mut self, count: u32) {
        for _ in 0..count {
            if let Err(e) = self.pin.set_high() {
                error!("Buzzer: GPIO write failed: {:?}", e);
                return;
            }
            self.delay.delay_ms(self.beep_ms);
            if let Err(e) = self.pin.set_low() {
                error!("Buzzer: GPIO write failed: {:?}", e);
                return;
            }
            self.delay.delay_ms(self.beep_ms);
            self.beeps_sounded += 1;
            info!("Beep!");
        }
    }

    /// Total beeps since construction.
    pub fn beeps_sounded(&self) -> u64 {
        self.beeps_sounded
    }
}
