//! One-second countdown timer.
//!
//! The host calls [`CountdownTimer::tick`] once per tick interval (from a
//! periodic hardware timer or a sleep loop) and forwards the returned
//! signal into the event queue.  The timer itself never calls back.

use log::debug;

use crate::events::Event;

/// What one tick of the countdown produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    /// Still counting.
    Tick,
    /// Reached zero; the timer has stopped itself.
    Expired,
}

impl From<TimerSignal> for Event {
    fn from(signal: TimerSignal) -> Self {
        match signal {
            TimerSignal::Tick => Event::TimerTick,
            TimerSignal::Expired => Event::TimerExpired,
        }
    }
}

#[derive(Debug, Default)]
pub struct CountdownTimer {
    remaining_secs: u32,
    running: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, seconds: u32) {
        self.remaining_secs = seconds;
        self.running = true;
        debug!("Timer started: {}s", seconds);
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!("Timer stopped at {}s", self.remaining_secs);
        }
    }

    /// Advance one second.  `None` while stopped.
    pub fn tick(&mut self) -> Option<TimerSignal> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            Some(TimerSignal::Expired)
        } else {
            Some(TimerSignal::Tick)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining_secs
    }

    pub fn set_remaining(&mut self, seconds: u32) {
        self.remaining_secs = seconds;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
