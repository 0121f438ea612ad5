//! Front-panel display.
//!
//! Holds what is currently shown and mirrors every change to the log.

use core::fmt;

use log::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayContent {
    #[default]
    Blank,
    Power(u8),
    Time { minutes: u32, seconds: u32 },
}

impl fmt::Display for DisplayContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Power(p) => write!(f, "{p} %"),
            Self::Time { minutes, seconds } => write!(f, "{minutes:02}:{seconds:02}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct DisplayDriver {
    content: DisplayContent,
}

impl DisplayDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_power(&mut self, percent: u8) {
        self.content = DisplayContent::Power(percent);
        info!("Display shows: {}", self.content);
    }

    pub fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.content = DisplayContent::Time { minutes, seconds };
        info!("Display shows: {}", self.content);
    }

    pub fn clear(&mut self) {
        self.content = DisplayContent::Blank;
        info!("Display cleared");
    }

    pub fn content(&self) -> DisplayContent {
        self.content
    }
}
