//! Debounced front-panel button driver.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up.  The driver is
//! polled from the control loop; `poll()` runs a small debounce state
//! machine and yields the button's [`Event`] once per physical press.
//!
//! | State      | Pin low                         | Pin high   |
//! |------------|---------------------------------|------------|
//! | Released   | → Debouncing                    | stay       |
//! | Debouncing | held ≥ debounce → Pressed, emit | → Released |
//! | Pressed    | stay (no repeat)                | → Released |

use embedded_hal::digital::InputPin;
use log::warn;

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Released,
    Debouncing { since_ms: u32 },
    Pressed,
}

pub struct ButtonDriver<P> {
    pin: P,
    event: Event,
    debounce_ms: u32,
    state: DebounceState,
}

impl<P: InputPin> ButtonDriver<P> {
    /// `event` is what a press of this button means to the controller.
    pub fn new(pin: P, event: Event, debounce_ms: u32) -> Self {
        Self {
            pin,
            event,
            debounce_ms,
            state: DebounceState::Released,
        }
    }

    /// Call from the control loop.  `now_ms` is monotonic milliseconds.
    pub fn poll(&mut self, now_ms: u32) -> Option<Event> {
        let down = match self.pin.is_low() {
            Ok(level) => level,
            Err(e) => {
                warn!("Button {:?}: GPIO read failed: {:?}", self.event, e);
                false
            }
        };

        match (self.state, down) {
            (DebounceState::Released, true) => {
                self.state = DebounceState::Debouncing { since_ms: now_ms };
                None
            }
            (DebounceState::Debouncing { since_ms }, true) => {
                if now_ms.wrapping_sub(since_ms) >= self.debounce_ms {
                    self.state = DebounceState::Pressed;
                    Some(self.event)
                } else {
                    None
                }
            }
            (_, false) => {
                self.state = DebounceState::Released;
                None
            }
            (DebounceState::Pressed, true) => None,
        }
    }

    pub fn event(&self) -> Event {
        self.event
    }
}
