//! Integration tests: CookSessionController against MockHardware.
//!
//! Exercises the session contract on its own, without the interaction
//! controller in front of it.

use microwave::control::cook::{CompletionSink, CookSession, CookSessionController};
use microwave::error::{ActuatorError, Error};
use microwave::events::Event;

use crate::mock_hw::{HwCall, MockHardware};

#[derive(Default)]
struct CountingSink {
    completions: u32,
}

impl CompletionSink for CountingSink {
    fn cooking_completed(&mut self) {
        self.completions += 1;
    }
}

/// Tick the mock timer until it expires, feeding ticks to the session.
fn run_to_expiry(cook: &mut CookSessionController, hw: &mut MockHardware, sink: &mut CountingSink) {
    while let Some(event) = hw.tick() {
        match event {
            Event::TimerTick => cook.on_timer_tick(hw),
            Event::TimerExpired => cook.on_timer_expired(hw, sink),
            _ => unreachable!(),
        }
    }
}

#[test]
fn session_runs_to_completion_once() {
    let mut cook = CookSessionController::new();
    let mut hw = MockHardware::new();
    let mut sink = CountingSink::default();

    cook.start_cooking(70, 3, &mut hw).unwrap();
    assert_eq!(
        cook.session(),
        Some(CookSession {
            power_percent: 70,
            initial_secs: 3,
        })
    );

    run_to_expiry(&mut cook, &mut hw, &mut sink);
    assert_eq!(sink.completions, 1);
    assert!(!cook.is_active());
    assert!(!hw.tube_on);
    assert_eq!(
        hw.calls,
        vec![
            HwCall::PowerOn(70),
            HwCall::StartTimer(3),
            HwCall::ShowTime(0, 2),
            HwCall::ShowTime(0, 1),
            HwCall::PowerOff,
        ]
    );

    // A late duplicate expiry changes nothing.
    cook.on_timer_expired(&mut hw, &mut sink);
    assert_eq!(sink.completions, 1);
}

#[test]
fn out_of_range_power_is_rejected_before_any_hardware() {
    let mut cook = CookSessionController::new();
    let mut hw = MockHardware::new();

    assert_eq!(cook.start_cooking(0, 60, &mut hw), Err(Error::InvalidPower(0)));
    assert_eq!(
        cook.start_cooking(101, 60, &mut hw),
        Err(Error::InvalidPower(101))
    );
    assert!(hw.calls.is_empty());
    assert!(!cook.is_active());
}

#[test]
fn refused_power_on_leaves_no_session() {
    let mut cook = CookSessionController::new();
    let mut hw = MockHardware::new();
    hw.fail_power_on = Some(ActuatorError::PowerTubeAlreadyOn);

    let err = cook.start_cooking(50, 60, &mut hw).unwrap_err();
    assert_eq!(err, Error::Actuator(ActuatorError::PowerTubeAlreadyOn));
    assert!(!cook.is_active());
    assert!(!hw.timer_running);
}

#[test]
fn restart_stops_previous_session_first() {
    let mut cook = CookSessionController::new();
    let mut hw = MockHardware::new();

    cook.start_cooking(30, 120, &mut hw).unwrap();
    cook.start_cooking(60, 60, &mut hw).unwrap();
    assert_eq!(
        hw.calls,
        vec![
            HwCall::PowerOn(30),
            HwCall::StartTimer(120),
            HwCall::PowerOff,
            HwCall::StopTimer,
            HwCall::PowerOn(60),
            HwCall::StartTimer(60),
        ]
    );
    assert_eq!(cook.session().map(|s| s.power_percent), Some(60));
}

#[test]
fn stop_then_expiry_does_not_complete() {
    let mut cook = CookSessionController::new();
    let mut hw = MockHardware::new();
    let mut sink = CountingSink::default();

    cook.start_cooking(40, 60, &mut hw).unwrap();
    cook.stop(&mut hw);
    cook.stop(&mut hw);
    hw.take_calls();

    cook.on_timer_expired(&mut hw, &mut sink);
    assert_eq!(sink.completions, 0);
    assert!(hw.calls.is_empty());
}

#[test]
fn remove_time_reaches_zero_then_expires() {
    let mut cook = CookSessionController::new();
    let mut hw = MockHardware::new();
    let mut sink = CountingSink::default();

    cook.start_cooking(90, 90, &mut hw).unwrap();
    cook.remove_time(&mut hw);
    assert_eq!(hw.remaining, 30);
    cook.remove_time(&mut hw);
    assert_eq!(hw.remaining, 0);
    assert_eq!(hw.last_time_shown(), Some((0, 0)));
    assert!(cook.is_active());

    run_to_expiry(&mut cook, &mut hw, &mut sink);
    assert_eq!(sink.completions, 1);
}

#[test]
fn adjustments_without_session_are_ignored() {
    let mut cook = CookSessionController::new();
    let mut hw = MockHardware::new();

    cook.add_time(&mut hw);
    cook.remove_time(&mut hw);
    cook.on_timer_tick(&mut hw);
    assert!(hw.calls.is_empty());
}
