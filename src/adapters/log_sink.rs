//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured oven events through the
//! `log` facade.  Whatever logger the host installs decides where they go.

use log::info;

use crate::app::events::{EndReason, OvenEvent};
use crate::app::ports::EventSink;

/// Adapter that logs every [`OvenEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink {
    emitted: u64,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events logged since construction.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &OvenEvent) {
        self.emitted += 1;
        match event {
            OvenEvent::Started(phase) => {
                info!("START | initial_phase={}", phase.name());
            }
            OvenEvent::PhaseChanged { from, to } => {
                info!("PHASE | {} -> {}", from.name(), to.name());
            }
            OvenEvent::CookingStarted {
                power_percent,
                seconds,
            } => {
                info!("COOK  | started power={}% time={}s", power_percent, seconds);
            }
            OvenEvent::CookingEnded(reason) => {
                let why = match reason {
                    EndReason::Completed => "completed",
                    EndReason::Cancelled => "cancelled",
                    EndReason::DoorOpened => "door opened",
                };
                info!("COOK  | ended ({})", why);
            }
        }
    }
}
