//! Input event system.
//!
//! Events are produced by:
//! - Button drivers (power, time, start/cancel, negative time)
//! - The door switch (opened / closed)
//! - The countdown timer (tick / expired)
//!
//! Events are consumed by the control loop, which hands them to the
//! [`OvenService`](crate::app::service::OvenService) one at a time in
//! FIFO order.  A handler always runs to completion before the next
//! event is dequeued, so at most one transition is in flight.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Buttons     │────▶│              │     │              │
//! │ Door switch │────▶│  Event Queue │────▶│ Control loop │
//! │ Timer tick  │────▶│  (SPSC)      │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use heapless::spsc::{Consumer, Producer, Queue};
use log::warn;

/// Slots in the ring buffer (one is always kept free by the SPSC queue).
pub const EVENT_QUEUE_CAP: usize = 32;

/// Everything the controllers react to.  None of the variants carry a
/// payload: the timer's remaining time is queried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Event {
    // ── User input ────────────────────────────────────────
    PowerPressed = 0,
    TimePressed = 1,
    StartCancelPressed = 2,
    NegativeTimePressed = 3,

    // ── Door ──────────────────────────────────────────────
    DoorOpened = 10,
    DoorClosed = 11,

    // ── Countdown timer ───────────────────────────────────
    /// Periodic countdown tick.
    TimerTick = 20,
    /// One-shot: the countdown reached zero.
    TimerExpired = 21,
}

impl Event {
    /// True for the four button presses.
    pub fn is_button(self) -> bool {
        matches!(
            self,
            Self::PowerPressed
                | Self::TimePressed
                | Self::StartCancelPressed
                | Self::NegativeTimePressed
        )
    }
}

/// Anything the control loop can pull events from.
pub trait EventSource {
    fn next_event(&mut self) -> Option<Event>;
}

// ── Owned queue ───────────────────────────────────────────────

/// Fixed-capacity FIFO of pending events.
///
/// Use it directly when producer and consumer share one context, or
/// [`split`](Self::split) it to hand the producer half to a timer or
/// interrupt context.
pub struct EventQueue {
    inner: Queue<Event, EVENT_QUEUE_CAP>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            inner: Queue::new(),
        }
    }

    /// Push an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: Event) -> bool {
        match self.inner.enqueue(event) {
            Ok(()) => true,
            Err(dropped) => {
                warn!("event queue full, dropping {:?}", dropped);
                false
            }
        }
    }

    /// Pop the oldest event, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Event> {
        self.inner.dequeue()
    }

    /// Drain all pending events into a callback, oldest first.
    pub fn drain(&mut self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Split into a producer half and a consumer half.
    pub fn split(&mut self) -> (EventProducer<'_>, EventConsumer<'_>) {
        let (producer, consumer) = self.inner.split();
        (EventProducer { inner: producer }, EventConsumer { inner: consumer })
    }
}

impl EventSource for EventQueue {
    fn next_event(&mut self) -> Option<Event> {
        self.pop()
    }
}

// ── Split halves ──────────────────────────────────────────────

/// Producer half: owned by whatever raises events (timer task, ISR glue).
pub struct EventProducer<'a> {
    inner: Producer<'a, Event, EVENT_QUEUE_CAP>,
}

impl EventProducer<'_> {
    /// Push an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: Event) -> bool {
        match self.inner.enqueue(event) {
            Ok(()) => true,
            Err(dropped) => {
                warn!("event queue full, dropping {:?}", dropped);
                false
            }
        }
    }
}

/// Consumer half: owned by the control loop.
pub struct EventConsumer<'a> {
    inner: Consumer<'a, Event, EVENT_QUEUE_CAP>,
}

impl EventConsumer<'_> {
    pub fn pop(&mut self) -> Option<Event> {
        self.inner.dequeue()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.inner.ready()
    }
}

impl EventSource for EventConsumer<'_> {
    fn next_event(&mut self) -> Option<Event> {
        self.pop()
    }
}
