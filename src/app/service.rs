//! Application service: the hexagonal core.
//!
//! [`OvenService`] owns the interaction controller (which in turn owns
//! the cook session controller).  It exposes a hardware-agnostic API.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  EventSource ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                  │        OvenService         │
//! OvenHardware ◀── │  Interaction · CookSession │
//!                  └────────────────────────────┘
//! ```

use log::info;

use crate::config::OvenConfig;
use crate::error::Result;
use crate::events::{Event, EventSource};
use crate::fsm::context::Settings;
use crate::fsm::{InteractionController, Phase};

use super::events::{EndReason, OvenEvent};
use super::ports::{EventSink, OvenHardware};

// ───────────────────────────────────────────────────────────────
// OvenService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all controller logic.
pub struct OvenService {
    ui: InteractionController,
    events_handled: u64,
}

impl OvenService {
    /// Construct the service from configuration.
    ///
    /// Does **not** announce itself; call [`start`](Self::start) next.
    /// Rejects a config that fails [`OvenConfig::validate`].
    pub fn new(config: OvenConfig) -> Result<Self> {
        Ok(Self {
            ui: InteractionController::new(config)?,
            events_handled: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&OvenEvent::Started(self.ui.phase()));
        info!("OvenService started in {}", self.ui.phase().name());
    }

    // ── Event handling ────────────────────────────────────────

    /// Dispatch one event and emit whatever it changed.
    pub fn handle_event(
        &mut self,
        event: Event,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        self.events_handled += 1;
        let prev = self.ui.phase();

        self.ui.dispatch(event, hw)?;

        let next = self.ui.phase();
        if next == prev {
            return Ok(());
        }

        sink.emit(&OvenEvent::PhaseChanged {
            from: prev,
            to: next,
        });

        if next == Phase::Cooking {
            if let Some(session) = self.ui.cook_session() {
                sink.emit(&OvenEvent::CookingStarted {
                    power_percent: session.power_percent,
                    seconds: session.initial_secs,
                });
            }
        } else if prev == Phase::Cooking {
            let reason = match event {
                Event::DoorOpened => EndReason::DoorOpened,
                Event::StartCancelPressed => EndReason::Cancelled,
                _ => EndReason::Completed,
            };
            sink.emit(&OvenEvent::CookingEnded(reason));
        }
        Ok(())
    }

    /// Drain every pending event from `source`, oldest first.
    /// Stops at the first error; returns how many events were handled.
    pub fn run_pending(
        &mut self,
        source: &mut impl EventSource,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        let mut handled = 0;
        while let Some(event) = source.next_event() {
            self.handle_event(event, hw, sink)?;
            handled += 1;
        }
        Ok(handled)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.ui.phase()
    }

    pub fn settings(&self) -> Settings {
        self.ui.settings()
    }

    pub fn is_cooking(&self) -> bool {
        self.ui.is_cooking()
    }

    pub fn is_door_open(&self) -> bool {
        self.ui.is_door_open()
    }

    /// Total events dispatched since construction.
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    pub fn config(&self) -> &OvenConfig {
        self.ui.config()
    }
}
