//! Cook session controller.
//!
//! Runs exactly one cooking session at a time and keeps the timer, the
//! power tube, and the display in step.
//!
//! ```text
//!  start_cooking ──▶ power_on(p) ──▶ start_timer(s) ──▶ ACTIVE
//!                                                       │  ▲
//!                                   tick ──▶ show_time  │  │ add_time / remove_time
//!                                                       ▼  │
//!           expired ──▶ power_off ──▶ CompletionSink ──▶ IDLE ◀── stop
//! ```
//!
//! Expiry always turns the power tube off *before* reporting completion,
//! so no heating continues past the countdown even if the upward
//! notification is handled late.

use log::{debug, info, warn};

use crate::app::ports::{DisplayPort, PowerTubePort, TimerPort};
use crate::error::{Error, Result};

/// Seconds added or removed by one time-adjust press.
pub const TIME_ADJUST_SECS: u32 = 60;

/// Receives the one-shot "cooking has completed" notification.
pub trait CompletionSink {
    fn cooking_completed(&mut self);
}

/// One-shot latch used by the interaction controller to learn about
/// completion without handing the cook controller a reference to itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompletionLatch {
    fired: bool,
}

impl CompletionLatch {
    pub fn fired(&self) -> bool {
        self.fired
    }
}

impl CompletionSink for CompletionLatch {
    fn cooking_completed(&mut self) {
        self.fired = true;
    }
}

/// The active cooking run.  Remaining time is owned by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookSession {
    pub power_percent: u8,
    pub initial_secs: u32,
}

#[derive(Debug, Default)]
pub struct CookSessionController {
    session: Option<CookSession>,
}

impl CookSessionController {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Begin a session: power tube on at `power_percent`, then the timer
    /// for `seconds`.  A session already running is stopped first so the
    /// power tube is never asked to turn on twice.
    pub fn start_cooking(
        &mut self,
        power_percent: u8,
        seconds: u32,
        hw: &mut (impl TimerPort + PowerTubePort),
    ) -> Result<()> {
        if !(1..=100).contains(&power_percent) {
            return Err(Error::InvalidPower(power_percent));
        }
        if self.session.is_some() {
            self.stop(hw);
        }

        if let Err(e) = hw.power_on(power_percent) {
            warn!("COOK: power tube refused {}%: {}", power_percent, e);
            return Err(e.into());
        }
        hw.start_timer(seconds);

        self.session = Some(CookSession {
            power_percent,
            initial_secs: seconds,
        });
        info!("COOK: started at {}% for {}s", power_percent, seconds);
        Ok(())
    }

    /// End the session early.  No-op when nothing is running.
    pub fn stop(&mut self, hw: &mut (impl TimerPort + PowerTubePort)) {
        match self.session.take() {
            Some(_) => {
                hw.power_off();
                hw.stop_timer();
                info!("COOK: stopped with {}s remaining", hw.time_remaining());
            }
            None => debug!("COOK: stop requested with no active session"),
        }
    }

    /// Add one minute to the running countdown.
    pub fn add_time(&mut self, hw: &mut (impl TimerPort + DisplayPort)) {
        if self.session.is_none() {
            debug!("COOK: add_time ignored, no active session");
            return;
        }
        let remaining = hw.time_remaining().saturating_add(TIME_ADJUST_SECS);
        hw.set_time_remaining(remaining);
        Self::show_remaining(hw);
    }

    /// Remove one minute from the running countdown, clamped at zero.
    /// Reaching zero does not end the session; the timer's expiry does.
    pub fn remove_time(&mut self, hw: &mut (impl TimerPort + DisplayPort)) {
        if self.session.is_none() {
            debug!("COOK: remove_time ignored, no active session");
            return;
        }
        let remaining = hw.time_remaining().saturating_sub(TIME_ADJUST_SECS);
        hw.set_time_remaining(remaining);
        Self::show_remaining(hw);
    }

    /// Timer tick: refresh the remaining-time readout.
    pub fn on_timer_tick(&mut self, hw: &mut (impl TimerPort + DisplayPort)) {
        if self.session.is_some() {
            Self::show_remaining(hw);
        }
    }

    /// Timer expiry: power tube off, then report completion once.
    /// A stray expiry after the session ended is ignored.
    pub fn on_timer_expired(
        &mut self,
        hw: &mut impl PowerTubePort,
        sink: &mut impl CompletionSink,
    ) {
        match self.session.take() {
            Some(session) => {
                hw.power_off();
                info!(
                    "COOK: {}s at {}% complete",
                    session.initial_secs, session.power_percent
                );
                sink.cooking_completed();
            }
            None => debug!("COOK: expiry ignored, no active session"),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<CookSession> {
        self.session
    }

    fn show_remaining(hw: &mut (impl TimerPort + DisplayPort)) {
        let remaining = hw.time_remaining();
        hw.show_time(remaining / 60, remaining % 60);
    }
}
