//! Mock hardware adapter for integration tests.
//!
//! Records every port call so tests can assert on the full command
//! history, and keeps a simulated countdown so time adjustments and
//! ticks read back realistic values.

use microwave::app::events::OvenEvent;
use microwave::app::ports::{
    BuzzerPort, DisplayPort, EventSink, LightPort, PowerTubePort, TimerPort,
};
use microwave::error::ActuatorError;
use microwave::events::Event;

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    StartTimer(u32),
    StopTimer,
    SetRemaining(u32),
    PowerOn(u8),
    PowerOff,
    ShowPower(u8),
    ShowTime(u32, u32),
    ClearDisplay,
    LightOn,
    LightOff,
    Beep(u32),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<HwCall>,
    pub remaining: u32,
    pub timer_running: bool,
    pub tube_on: bool,
    pub light_on: bool,
    /// When set, `power_on` fails with this error.
    pub fail_power_on: Option<ActuatorError>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            remaining: 0,
            timer_running: false,
            tube_on: false,
            light_on: false,
            fail_power_on: None,
        }
    }

    pub fn last_call(&self) -> Option<&HwCall> {
        self.calls.last()
    }

    pub fn take_calls(&mut self) -> Vec<HwCall> {
        core::mem::take(&mut self.calls)
    }

    /// Last `(minutes, seconds)` written to the display, if any.
    pub fn last_time_shown(&self) -> Option<(u32, u32)> {
        self.calls.iter().rev().find_map(|c| match c {
            HwCall::ShowTime(m, s) => Some((*m, *s)),
            _ => None,
        })
    }

    pub fn last_power_shown(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            HwCall::ShowPower(p) => Some(*p),
            _ => None,
        })
    }

    /// Advance the simulated countdown one second, returning the event
    /// a real timer would have raised.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.timer_running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.timer_running = false;
            Some(Event::TimerExpired)
        } else {
            Some(Event::TimerTick)
        }
    }

    pub fn beeps(&self) -> u32 {
        self.calls
            .iter()
            .map(|c| match c {
                HwCall::Beep(n) => *n,
                _ => 0,
            })
            .sum()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPort for MockHardware {
    fn start_timer(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.timer_running = true;
        self.calls.push(HwCall::StartTimer(seconds));
    }

    fn stop_timer(&mut self) {
        self.timer_running = false;
        self.calls.push(HwCall::StopTimer);
    }

    fn time_remaining(&self) -> u32 {
        self.remaining
    }

    fn set_time_remaining(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.calls.push(HwCall::SetRemaining(seconds));
    }
}

impl PowerTubePort for MockHardware {
    fn power_on(&mut self, percent: u8) -> Result<(), ActuatorError> {
        if let Some(err) = self.fail_power_on {
            return Err(err);
        }
        if self.tube_on {
            return Err(ActuatorError::PowerTubeAlreadyOn);
        }
        self.tube_on = true;
        self.calls.push(HwCall::PowerOn(percent));
        Ok(())
    }

    fn power_off(&mut self) {
        self.tube_on = false;
        self.calls.push(HwCall::PowerOff);
    }
}

impl DisplayPort for MockHardware {
    fn show_power(&mut self, percent: u8) {
        self.calls.push(HwCall::ShowPower(percent));
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.calls.push(HwCall::ShowTime(minutes, seconds));
    }

    fn clear_display(&mut self) {
        self.calls.push(HwCall::ClearDisplay);
    }
}

impl LightPort for MockHardware {
    fn light_on(&mut self) {
        self.light_on = true;
        self.calls.push(HwCall::LightOn);
    }

    fn light_off(&mut self) {
        self.light_on = false;
        self.calls.push(HwCall::LightOff);
    }
}

impl BuzzerPort for MockHardware {
    fn short_beep(&mut self, count: u32) {
        self.calls.push(HwCall::Beep(count));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<OvenEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &OvenEvent) {
        self.events.push(*event);
    }
}
