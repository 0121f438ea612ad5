//! Control panel: the four buttons and the door switch.
//!
//! Aggregates the input drivers the same way the hardware adapter
//! aggregates the outputs.  `poll()` samples every input once and pushes
//! whatever they report onto the event queue, buttons first.

use embedded_hal::digital::InputPin;

use crate::config::OvenConfig;
use crate::drivers::button::ButtonDriver;
use crate::drivers::door::DoorSwitch;
use crate::events::{Event, EventProducer};

pub struct ControlPanel<Pp, Tp, Sp, Np, Dp> {
    power: ButtonDriver<Pp>,
    time: ButtonDriver<Tp>,
    start_cancel: ButtonDriver<Sp>,
    negative_time: ButtonDriver<Np>,
    door: DoorSwitch<Dp>,
}

impl<Pp, Tp, Sp, Np, Dp> ControlPanel<Pp, Tp, Sp, Np, Dp>
where
    Pp: InputPin,
    Tp: InputPin,
    Sp: InputPin,
    Np: InputPin,
    Dp: InputPin,
{
    pub fn new(
        config: &OvenConfig,
        power: Pp,
        time: Tp,
        start_cancel: Sp,
        negative_time: Np,
        door: Dp,
    ) -> Self {
        let ms = config.debounce_ms;
        Self {
            power: ButtonDriver::new(power, Event::PowerPressed, ms),
            time: ButtonDriver::new(time, Event::TimePressed, ms),
            start_cancel: ButtonDriver::new(start_cancel, Event::StartCancelPressed, ms),
            negative_time: ButtonDriver::new(negative_time, Event::NegativeTimePressed, ms),
            door: DoorSwitch::new(door, ms),
        }
    }

    /// Sample all inputs.  Returns how many events were queued.
    pub fn poll(&mut self, now_ms: u32, queue: &mut EventProducer<'_>) -> usize {
        let events = [
            self.power.poll(now_ms),
            self.time.poll(now_ms),
            self.start_cancel.poll(now_ms),
            self.negative_time.poll(now_ms),
            self.door.poll(now_ms),
        ];
        events
            .into_iter()
            .flatten()
            .filter(|&ev| queue.push(ev))
            .count()
    }

    pub fn is_door_open(&self) -> bool {
        self.door.is_open()
    }
}
