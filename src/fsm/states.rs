//! Per-event handlers for the interaction controller.
//!
//! Each handler matches on the current phase; arms that are not listed
//! are no-ops in that phase.
//!
//! ```text
//!  READY ──[power]──▶ SETTING_POWER ──[time]──▶ SETTING_TIME
//!    ▲                  │  ▲ [power: +10, 100→10]   │  ▲ [time: +1 min]
//!    │                  │  └──────┘                 │  └──────┘ [negative: -1 min]
//!    │  [cancel / door] │                  [start]  ▼
//!    ├──────────────────┘                        COOKING ── [time / negative: ±1 min]
//!    │                                              │
//!    └─────────[cancel / door / expiry]─────────────┘
//! ```

use log::debug;

use super::{InteractionController, Phase};
use crate::app::ports::OvenHardware;
use crate::error::Result;

impl InteractionController {
    pub(super) fn on_power_pressed(&mut self, hw: &mut impl OvenHardware) {
        match self.phase {
            Phase::Ready => {
                self.settings.reset();
                let power = self.settings.step_power(
                    self.config.power_step_percent,
                    self.config.max_power_percent,
                );
                hw.show_power(power);
                self.transition(Phase::SettingPower);
            }
            Phase::SettingPower => {
                let power = self.settings.step_power(
                    self.config.power_step_percent,
                    self.config.max_power_percent,
                );
                hw.show_power(power);
            }
            Phase::SettingTime | Phase::Cooking => {
                debug!("UI: power ignored in {}", self.phase.name());
            }
        }
    }

    pub(super) fn on_time_pressed(&mut self, hw: &mut impl OvenHardware) {
        match self.phase {
            Phase::SettingPower => {
                self.settings.minutes = 1;
                hw.show_time(1, 0);
                self.transition(Phase::SettingTime);
            }
            Phase::SettingTime => {
                let minutes = self.settings.add_minute();
                hw.show_time(minutes, 0);
            }
            Phase::Cooking => self.cook.add_time(hw),
            Phase::Ready => debug!("UI: time ignored in Ready"),
        }
    }

    /// Removes a minute from the pending time before cooking, or from the
    /// running session while cooking.  Both clamp at zero.
    pub(super) fn on_negative_time_pressed(&mut self, hw: &mut impl OvenHardware) {
        match self.phase {
            Phase::SettingTime => {
                let minutes = self.settings.remove_minute();
                hw.show_time(minutes, 0);
            }
            Phase::Cooking => self.cook.remove_time(hw),
            Phase::Ready | Phase::SettingPower => {
                debug!("UI: negative time ignored in {}", self.phase.name());
            }
        }
    }

    pub(super) fn on_start_cancel_pressed(&mut self, hw: &mut impl OvenHardware) -> Result<()> {
        match self.phase {
            Phase::SettingPower => {
                self.settings.reset();
                hw.clear_display();
                self.transition(Phase::Ready);
            }
            Phase::SettingTime => {
                hw.light_on();
                let started = self.cook.start_cooking(
                    self.settings.power_percent,
                    self.settings.cook_secs(),
                    hw,
                );
                if started.is_err() {
                    hw.light_off();
                }
                started?;
                self.transition(Phase::Cooking);
            }
            Phase::Cooking => {
                self.cook.stop(hw);
                self.settings.reset();
                hw.light_off();
                hw.clear_display();
                self.transition(Phase::Ready);
            }
            Phase::Ready => debug!("UI: start/cancel ignored in Ready"),
        }
        Ok(())
    }

    pub(super) fn on_door_opened(&mut self, hw: &mut impl OvenHardware) {
        if self.door_open {
            return;
        }
        self.door_open = true;

        match self.phase {
            Phase::Ready => hw.light_on(),
            Phase::SettingPower | Phase::SettingTime => {
                self.settings.reset();
                hw.clear_display();
                hw.light_on();
                self.transition(Phase::Ready);
            }
            Phase::Cooking => {
                // Light is already on from the start of cooking.
                self.cook.stop(hw);
                self.settings.reset();
                hw.clear_display();
                self.transition(Phase::Ready);
            }
        }
    }

    pub(super) fn on_door_closed(&mut self, hw: &mut impl OvenHardware) {
        if !self.door_open {
            return;
        }
        self.door_open = false;
        hw.light_off();
    }
}
