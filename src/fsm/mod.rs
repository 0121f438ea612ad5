//! Interaction state machine.
//!
//! Tracks which phase of user interaction is active and routes every
//! input event to a handler chosen by matching on the current phase:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  dispatch(event)                                               │
//! │  ┌──────────────┬────────┬──────────┬──────────┬───────────┐   │
//! │  │ event        │ Ready  │ SetPower │ SetTime  │ Cooking   │   │
//! │  ├──────────────┼────────┼──────────┼──────────┼───────────┤   │
//! │  │ power        │ →SetPw │ step     │ -        │ -         │   │
//! │  │ time         │ -      │ →SetTime │ +1 min   │ add_time  │   │
//! │  │ negative     │ -      │ -        │ -1 min   │ remove_t. │   │
//! │  │ start/cancel │ -      │ →Ready   │ →Cooking │ →Ready    │   │
//! │  │ door opened  │ light  │ →Ready   │ →Ready   │ →Ready    │   │
//! │  │ timer expiry │ -      │ -        │ -        │ →Ready    │   │
//! │  └──────────────┴────────┴──────────┴──────────┴───────────┘   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cooking itself is delegated to the owned [`CookSessionController`].
//! Completion comes back through a [`CompletionLatch`], so the cook
//! controller never holds a reference to this one.
//!
//! Invariant: a cook session is active **iff** the phase is `Cooking`.

pub mod context;
pub mod states;

use context::Settings;
use log::{debug, info};

use crate::app::ports::{BuzzerPort, DisplayPort, LightPort, OvenHardware};
use crate::config::OvenConfig;
use crate::control::cook::{CompletionLatch, CookSession, CookSessionController};
use crate::error::Result;
use crate::events::Event;

// ---------------------------------------------------------------------------
// Phase identity
// ---------------------------------------------------------------------------

/// The four phases of user interaction.  No terminal phase: the machine
/// cycles back to `Ready` indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    Ready = 0,
    SettingPower = 1,
    SettingTime = 2,
    Cooking = 3,
}

impl Phase {
    /// Total number of phases.
    pub const COUNT: usize = 4;

    pub const ALL: [Phase; Self::COUNT] = [
        Self::Ready,
        Self::SettingPower,
        Self::SettingTime,
        Self::Cooking,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::SettingPower => "SettingPower",
            Self::SettingTime => "SettingTime",
            Self::Cooking => "Cooking",
        }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// The top-level state machine.
///
/// Owns the phase, the pending [`Settings`], the door flag, and the
/// [`CookSessionController`].  Collaborators are passed to
/// [`dispatch`](Self::dispatch) on each call.
pub struct InteractionController {
    phase: Phase,
    settings: Settings,
    /// Set by `DoorOpened`, cleared by `DoorClosed`.  Button presses are
    /// ignored while set.
    door_open: bool,
    cook: CookSessionController,
    config: OvenConfig,
}

impl InteractionController {
    /// Construct in `Ready` with the door closed.
    ///
    /// Fails with [`Error::Config`](crate::error::Error::Config) if
    /// `config` does not pass [`OvenConfig::validate`].
    pub fn new(config: OvenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            phase: Phase::Ready,
            settings: Settings::default(),
            door_open: false,
            cook: CookSessionController::new(),
            config,
        })
    }

    /// Handle one event to completion.
    ///
    /// Errors come from the cook session (invalid power, actuator
    /// failure) and are returned as-is; the phase is left where it was.
    pub fn dispatch(&mut self, event: Event, hw: &mut impl OvenHardware) -> Result<()> {
        if self.door_open && event.is_button() {
            debug!("UI: {:?} ignored while door is open", event);
            return Ok(());
        }

        let result = match event {
            Event::PowerPressed => {
                self.on_power_pressed(hw);
                Ok(())
            }
            Event::TimePressed => {
                self.on_time_pressed(hw);
                Ok(())
            }
            Event::NegativeTimePressed => {
                self.on_negative_time_pressed(hw);
                Ok(())
            }
            Event::StartCancelPressed => self.on_start_cancel_pressed(hw),
            Event::DoorOpened => {
                self.on_door_opened(hw);
                Ok(())
            }
            Event::DoorClosed => {
                self.on_door_closed(hw);
                Ok(())
            }
            Event::TimerTick => {
                self.cook.on_timer_tick(hw);
                Ok(())
            }
            Event::TimerExpired => {
                let mut latch = CompletionLatch::default();
                self.cook.on_timer_expired(hw, &mut latch);
                if latch.fired() {
                    self.cooking_is_done(hw);
                }
                Ok(())
            }
        };

        debug_assert_eq!(
            self.cook.is_active(),
            self.phase == Phase::Cooking,
            "cook session and phase disagree after {:?}",
            event
        );
        result
    }

    /// Completion notice from the cook session: back to `Ready`, light
    /// off, display cleared, completion beeps.
    pub fn cooking_is_done(&mut self, hw: &mut (impl LightPort + DisplayPort + BuzzerPort)) {
        if self.phase != Phase::Cooking {
            debug!("UI: completion ignored in {}", self.phase.name());
            return;
        }
        self.settings.reset();
        hw.light_off();
        hw.clear_display();
        hw.short_beep(self.config.completion_beeps);
        self.transition(Phase::Ready);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn is_door_open(&self) -> bool {
        self.door_open
    }

    pub fn is_cooking(&self) -> bool {
        self.cook.is_active()
    }

    pub fn cook_session(&self) -> Option<CookSession> {
        self.cook.session()
    }

    pub fn config(&self) -> &OvenConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn transition(&mut self, next: Phase) {
        if next != self.phase {
            info!("UI transition: {} -> {}", self.phase.name(), next.name());
            self.phase = next;
        }
    }
}
