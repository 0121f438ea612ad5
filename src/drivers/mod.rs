//! Peripheral drivers for the oven's panel and actuators.
//!
//! Each driver wraps one `embedded-hal` peripheral (or none, for the
//! countdown and display model) and logs what it does.

pub mod button;
pub mod buzzer;
pub mod countdown;
pub mod display;
pub mod door;
pub mod light;
pub mod power_tube;
