//! Property tests for the pulse automaton.
//!
//! Random sequences of goal and speed changes interleaved with timer firings
//! must never move the position by more than one step per two phases, and
//! every change must be toward the goal in effect at that moment.

use embedded_hal::digital::OutputPin;
use proptest::prelude::*;
use pulse_stepper::{CompareTimer, PulsesPerSec, StepperAxis, Steps};

#[derive(Debug, Default)]
struct FakeTimer {
    armed: Option<u32>,
}

impl CompareTimer for FakeTimer {
    fn tick_rate(&self) -> f32 {
        6_000_000.0
    }

    fn max_ticks(&self) -> u32 {
        65_535
    }

    fn arm(&mut self, ticks: u32) {
        self.armed = Some(ticks);
    }

    fn disarm(&mut self) {
        self.armed = None;
    }
}

#[derive(Debug, Default)]
struct SilentPin;

impl embedded_hal::digital::ErrorType for SilentPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for SilentPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

type TestAxis = StepperAxis<SilentPin, SilentPin, FakeTimer>;

fn build_axis() -> TestAxis {
    StepperAxis::builder()
        .pulse_pin(SilentPin)
        .dir_pin(SilentPin)
        .timer(FakeTimer::default())
        .pulses_per_second(PulsesPerSec(1000.0))
        .build()
        .unwrap()
}

/// Fire once if an arm is outstanding, checking the per-firing invariants.
/// Returns false when the automaton is idle.
fn fire_checked(axis: &mut TestAxis) -> bool {
    if axis.scheduler().timer().armed.is_none() {
        return false;
    }

    let before = axis.current_pos().value();
    let goal = axis.goal_pos().value();
    axis.on_timer_interrupt().unwrap();
    let delta = axis.current_pos().value() - before;

    assert_unit_step(delta, before, goal);
    true
}

fn assert_unit_step(delta: i64, before: i64, goal: i64) {
    assert!(delta.abs() <= 1, "position jumped by {}", delta);
    if delta != 0 {
        assert_eq!(
            delta.signum(),
            (goal - before).signum(),
            "stepped away from the goal"
        );
    }
}

fn run_until_idle(axis: &mut TestAxis) -> usize {
    let mut firings = 0;
    while fire_checked(axis) {
        firings += 1;
        assert!(firings < 100_000, "automaton failed to go idle");
    }
    firings
}

proptest! {
    /// A single move of N steps is exactly 2*N firings and lands on the goal.
    #[test]
    fn move_takes_two_firings_per_step(goal in -200i64..200) {
        let mut axis = build_axis();
        axis.set_goal_pos(Steps(goal));
        axis.start();

        let firings = run_until_idle(&mut axis);

        prop_assert_eq!(firings, 2 * goal.unsigned_abs() as usize);
        prop_assert_eq!(axis.current_pos(), Steps(goal));
    }

    /// Goal changes at arbitrary points never break the one-step-at-a-time
    /// invariant and the axis always settles on the last goal.
    #[test]
    fn interleaved_goal_changes_settle_on_last_goal(
        ops in prop::collection::vec((0usize..6, -50i64..50), 1..20)
    ) {
        let mut axis = build_axis();
        axis.start();

        let mut last_goal = 0i64;
        for (firings, goal) in ops {
            axis.set_goal_pos(Steps(goal));
            last_goal = goal;
            for _ in 0..firings {
                if !fire_checked(&mut axis) {
                    break;
                }
            }
        }

        run_until_idle(&mut axis);
        prop_assert_eq!(axis.current_pos(), Steps(last_goal));
    }

    /// Speed changes between firings never corrupt position tracking.
    #[test]
    fn speed_changes_do_not_affect_position(
        goal in -100i64..100,
        rates in prop::collection::vec(1.0f32..20_000.0, 1..10)
    ) {
        let mut axis = build_axis();
        axis.set_goal_pos(Steps(goal));
        axis.start();

        let mut rates = rates.into_iter().cycle();
        let mut firings = 0usize;
        while fire_checked(&mut axis) {
            firings += 1;
            assert!(firings < 100_000);
            if firings % 3 == 0 {
                axis.set_speed(PulsesPerSec(rates.next().unwrap())).unwrap();
            }
        }

        prop_assert_eq!(axis.current_pos(), Steps(goal));
        prop_assert_eq!(firings, 2 * goal.unsigned_abs() as usize);
    }

    /// Every armed tick count respects the hardware bound.
    #[test]
    fn armed_ticks_never_exceed_maximum(rate in 0.001f32..50_000.0) {
        let mut axis = build_axis();
        axis.set_speed(PulsesPerSec(rate)).unwrap();
        axis.set_goal_pos(Steps(1));
        axis.start();

        let armed = axis.scheduler().timer().armed.unwrap();
        prop_assert!(armed >= 1);
        prop_assert!(armed <= 65_535);
    }
}
