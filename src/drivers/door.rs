//! Door reed switch.
//!
//! Pin reads high while the magnet on the door is against the switch
//! (door closed).  A level change must hold for `debounce_ms` before it is
//! reported as [`Event::DoorOpened`] or [`Event::DoorClosed`].

use embedded_hal::digital::InputPin;
use log::warn;

use crate::events::Event;

pub struct DoorSwitch<P> {
    pin: P,
    debounce_ms: u32,
    /// Last reported position.
    open: bool,
    /// Opposite position seen but not yet stable.
    pending_since_ms: Option<u32>,
}

impl<P: InputPin> DoorSwitch<P> {
    /// Starts out reporting the door as closed.
    pub fn new(pin: P, debounce_ms: u32) -> Self {
        Self {
            pin,
            debounce_ms,
            open: false,
            pending_since_ms: None,
        }
    }

    pub fn poll(&mut self, now_ms: u32) -> Option<Event> {
        let open_now = match self.pin.is_low() {
            Ok(level) => level,
            Err(e) => {
                warn!("Door: GPIO read failed: {:?}", e);
                return None;
            }
        };

        if open_now == self.open {
            self.pending_since_ms = None;
            return None;
        }

        let since = *self.pending_since_ms.get_or_insert(now_ms);
        if now_ms.wrapping_sub(since) < self.debounce_ms {
            return None;
        }

        self.open = open_now;
        self.pending_since_ms = None;
        Some(if open_now {
            Event::DoorOpened
        } else {
            Event::DoorClosed
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
