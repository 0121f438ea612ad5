//! Hardware adapter: bridges real peripherals to the controller's ports.
//!
//! Owns the countdown and every actuator driver, exposing them through
//! [`TimerPort`], [`PowerTubePort`], [`DisplayPort`], [`LightPort`] and
//! [`BuzzerPort`].  This is the only module that touches output
//! peripherals.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::{debug, warn};

use crate::app::ports::{BuzzerPort, DisplayPort, LightPort, PowerTubePort, TimerPort};
use crate::config::OvenConfig;
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::countdown::CountdownTimer;
use crate::drivers::display::{DisplayContent, DisplayDriver};
use crate::drivers::light::LightDriver;
use crate::drivers::power_tube::PowerTubeDriver;
use crate::error::ActuatorError;
use crate::events::Event;

/// Concrete adapter that combines all output hardware behind port traits.
pub struct HardwareAdapter<Pwm, LightPin, BuzzerPin, Delay> {
    timer: CountdownTimer,
    tube: PowerTubeDriver<Pwm>,
    light: LightDriver<LightPin>,
    buzzer: BuzzerDriver<BuzzerPin, Delay>,
    display: DisplayDriver,
    tick_interval_ms: u32,
    /// Milliseconds accumulated towards the next countdown tick.
    elapsed_ms: u32,
}

impl<Pwm, LightPin, BuzzerPin, Delay> HardwareAdapter<Pwm, LightPin, BuzzerPin, Delay>
where
    Pwm: SetDutyCycle,
    LightPin: OutputPin,
    BuzzerPin: OutputPin,
    Delay: DelayNs,
{
    pub fn new(
        tube: PowerTubeDriver<Pwm>,
        light: LightDriver<LightPin>,
        buzzer: BuzzerDriver<BuzzerPin, Delay>,
        tick_interval_ms: u32,
    ) -> Self {
        Self {
            timer: CountdownTimer::new(),
            tube,
            light,
            buzzer,
            display: DisplayDriver::new(),
            tick_interval_ms,
            elapsed_ms: 0,
        }
    }

    /// Build every driver from raw peripherals using `config`'s ratings.
    pub fn from_config(
        config: &OvenConfig,
        pwm: Pwm,
        light_pin: LightPin,
        buzzer_pin: BuzzerPin,
        delay: Delay,
    ) -> Self {
        Self::new(
            PowerTubeDriver::new(pwm, config.power_tube_max_watts),
            LightDriver::new(light_pin),
            BuzzerDriver::new(buzzer_pin, delay, config.beep_duration_ms),
            config.tick_interval_ms,
        )
    }

    /// Feed `elapsed_ms` of wall time to the countdown.  Ticks at most
    /// once per call; returns the event to queue, if any.
    pub fn poll_timer(&mut self, elapsed_ms: u32) -> Option<Event> {
        if !self.timer.is_running() {
            self.elapsed_ms = 0;
            return None;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < self.tick_interval_ms {
            return None;
        }
        self.elapsed_ms -= self.tick_interval_ms;
        self.timer.tick().map(Event::from)
    }

    pub fn display_content(&self) -> DisplayContent {
        self.display.content()
    }

    pub fn is_light_on(&self) -> bool {
        self.light.is_on()
    }

    pub fn is_tube_on(&self) -> bool {
        self.tube.is_on()
    }

    pub fn tube_watts(&self) -> u32 {
        self.tube.current_watts()
    }

    pub fn beeps_sounded(&self) -> u64 {
        self.buzzer.beeps_sounded()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }
}

// ── TimerPort implementation ──────────────────────────────────

impl<Pwm, LightPin, BuzzerPin, Delay> TimerPort for HardwareAdapter<Pwm, LightPin, BuzzerPin, Delay> {
    fn start_timer(&mut self, seconds: u32) {
        self.elapsed_ms = 0;
        self.timer.start(seconds);
    }

    fn stop_timer(&mut self) {
        self.timer.stop();
    }

    fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    fn set_time_remaining(&mut self, seconds: u32) {
        if !self.timer.is_running() {
            warn!("Timer: adjusting a stopped countdown to {}s", seconds);
        }
        self.timer.set_remaining(seconds);
    }
}

// ── PowerTubePort implementation ──────────────────────────────

impl<Pwm, LightPin, BuzzerPin, Delay> PowerTubePort
    for HardwareAdapter<Pwm, LightPin, BuzzerPin, Delay>
where
    Pwm: SetDutyCycle,
{
    fn power_on(&mut self, percent: u8) -> Result<(), ActuatorError> {
        self.tube.turn_on(percent)
    }

    fn power_off(&mut self) {
        self.tube.turn_off();
    }
}

// ── Output sinks ──────────────────────────────────────────────

impl<Pwm, LightPin, BuzzerPin, Delay> DisplayPort
    for HardwareAdapter<Pwm, LightPin, BuzzerPin, Delay>
{
    fn show_power(&mut self, percent: u8) {
        self.display.show_power(percent);
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.display.show_time(minutes, seconds);
    }

    fn clear_display(&mut self) {
        self.display.clear();
    }
}

impl<Pwm, LightPin, BuzzerPin, Delay> LightPort for HardwareAdapter<Pwm, LightPin, BuzzerPin, Delay>
where
    LightPin: OutputPin,
{
    fn light_on(&mut self) {
        self.light.turn_on();
    }

    fn light_off(&mut self) {
        self.light.turn_off();
    }
}

impl<Pwm, LightPin, BuzzerPin, Delay> BuzzerPort for HardwareAdapter<Pwm, LightPin, BuzzerPin, Delay>
where
    BuzzerPin: OutputPin,
    Delay: DelayNs,
{
    fn short_beep(&mut self, count: u32) {
        debug!("Buzzer: {} beep(s)", count);
        self.buzzer.short_beep(count);
    }
}
