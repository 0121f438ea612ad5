//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                   |
//! |------------|----------------|-------------------------------|
//! | `hardware` | TimerPort      | Countdown timer               |
//! |            | PowerTubePort  | PWM channel on the magnetron  |
//! |            | DisplayPort    | Front-panel display model     |
//! |            | LightPort      | Cavity lamp GPIO              |
//! |            | BuzzerPort     | Piezo GPIO + delay            |
//! | `panel`    | event producer | Button and door GPIOs         |
//! | `log_sink` | EventSink      | `log` facade                  |

pub mod hardware;
pub mod log_sink;
pub mod panel;
