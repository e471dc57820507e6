//! Stepper axis driver.
//!
//! Owns the motion state and the two-phase pulse automaton. All waveform
//! progress happens in [`StepperAxis::on_timer_interrupt`]; mainline code only
//! writes goals, speed, and the running flag, and arms the first wait.

use embedded_hal::digital::OutputPin;

use crate::config::units::{PulsesPerSec, Steps};
use crate::dispatch::TimerInterruptHandler;
use crate::error::{AxisError, ConfigError, Result};
use crate::timer::{CompareTimer, PulseScheduler};

use super::builder::StepperAxisBuilder;
use super::direction::StepDirection;
use super::position::PositionTracker;

/// Validate a pulse rate and convert it to a half-period in seconds.
pub(crate) fn half_period_for(rate: PulsesPerSec) -> core::result::Result<f32, ConfigError> {
    crate::config::validation::check_pulse_rate(rate.value())?;
    Ok(rate.half_period_secs())
}

/// Interrupt-driven stepper axis.
///
/// Generic over:
/// - `PULSE`: pulse pin type (must implement `OutputPin`)
/// - `DIR`: direction pin type (must implement `OutputPin`)
/// - `TIMER`: hardware compare timer (must implement `CompareTimer`)
///
/// Each armed timer firing is one *phase*: the pulse output toggles, and on
/// the falling edge only, the position steps one unit toward the goal and the
/// timer re-arms while motion continues. Rising edges always re-arm, so every
/// step is exactly two equal half-periods regardless of what mainline code
/// did in between.
pub struct StepperAxis<PULSE, DIR, TIMER>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    TIMER: CompareTimer,
{
    /// Pulse pin (one high/low cycle per step).
    pulse_pin: PULSE,

    /// Direction pin (low = forward, high = reverse, or inverted).
    dir_pin: DIR,

    /// Scheduler over the hardware compare timer.
    scheduler: PulseScheduler<TIMER>,

    /// Current/goal position pair.
    tracker: PositionTracker,

    /// Duration of one pulse phase in seconds.
    half_period_secs: f32,

    /// Whether the automaton re-arms after completing a step.
    running: bool,

    /// Last level driven on the pulse output.
    pulse_level: bool,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<StepDirection>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Axis name for logging/debugging.
    name: heapless::String<32>,
}

impl<PULSE, DIR, TIMER> StepperAxis<PULSE, DIR, TIMER>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    TIMER: CompareTimer,
{
    /// Start building an axis.
    pub fn builder() -> StepperAxisBuilder<PULSE, DIR, TIMER> {
        StepperAxisBuilder::new()
    }

    pub(crate) fn new(
        pulse_pin: PULSE,
        dir_pin: DIR,
        timer: TIMER,
        name: heapless::String<32>,
        half_period_secs: f32,
        invert_direction: bool,
    ) -> Self {
        Self {
            pulse_pin,
            dir_pin,
            scheduler: PulseScheduler::new(timer),
            tracker: PositionTracker::new(),
            half_period_secs,
            running: false,
            pulse_level: false,
            current_direction: None,
            invert_direction,
            name,
        }
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current position.
    #[inline]
    pub fn current_pos(&self) -> Steps {
        self.tracker.current()
    }

    /// Get the goal position.
    #[inline]
    pub fn goal_pos(&self) -> Steps {
        self.tracker.goal()
    }

    /// Signed distance from current to goal in steps.
    #[inline]
    pub fn distance_to_go(&self) -> i64 {
        self.tracker.distance_to_go()
    }

    /// Duration of one pulse phase in seconds (half the full pulse period).
    #[inline]
    pub fn step_time(&self) -> f32 {
        self.half_period_secs
    }

    /// Whether the automaton re-arms after completing a step.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the scheduler.
    #[inline]
    pub fn scheduler(&self) -> &PulseScheduler<TIMER> {
        &self.scheduler
    }

    /// Consume the axis, returning the pins and timer.
    pub fn release(self) -> (PULSE, DIR, TIMER) {
        (self.pulse_pin, self.dir_pin, self.scheduler.into_timer())
    }

    /// Overwrite the current position unconditionally.
    ///
    /// Intended for calibration before motion starts. Calling it while motion
    /// is in progress produces a position discontinuity: the automaton keeps
    /// stepping toward the goal from the new value.
    pub fn set_current_pos(&mut self, pos: Steps) {
        self.tracker.set_current(pos);
    }

    /// Set the goal position.
    ///
    /// If the axis is running and the goal differs from the current position,
    /// the timer is armed immediately. This resumes motion that had gone idle
    /// because the previous goal was reached; mid-motion it restarts the
    /// in-flight wait at a fresh half-period without touching the waveform.
    pub fn set_goal_pos(&mut self, pos: Steps) {
        self.tracker.set_goal(pos);
        if self.running && pos != self.tracker.current() {
            self.scheduler.arm_half_period(self.half_period_secs);
        }
    }

    /// Set the pulse rate.
    ///
    /// Takes effect on the next timer arm; an in-flight wait is not
    /// rescheduled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPulseRate` for a zero, negative, or
    /// non-finite rate, leaving the current rate in place.
    pub fn set_speed(&mut self, rate: PulsesPerSec) -> Result<()> {
        self.half_period_secs = half_period_for(rate).map_err(crate::error::Error::Config)?;
        Ok(())
    }

    /// Begin (or resume) motion toward the goal position.
    ///
    /// Idempotent while already running.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;

            if !self.tracker.at_goal() {
                self.scheduler.arm_half_period(self.half_period_secs);
            }
        }
    }

    /// Halt motion after the in-flight half-pulse completes.
    ///
    /// Does not cancel an already-armed wait; the automaton simply stops
    /// re-arming once it fires.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run one automaton phase. Call once per timer firing.
    ///
    /// # Errors
    ///
    /// Returns `AxisError::PinError` if a pin write fails; interrupt glue may
    /// ignore it, since there is nothing else to do in interrupt context.
    pub fn on_timer_interrupt(&mut self) -> Result<()> {
        // Quiet the timer while the handler runs; re-arming re-enables it.
        self.scheduler.cancel();

        self.pulse_level = !self.pulse_level;
        if self.pulse_level {
            self.pulse_pin.set_high().map_err(|_| AxisError::PinError)?;

            // Rising edge: always proceed to the falling-edge phase, so every
            // step gets two equal half-periods.
            self.scheduler.arm_half_period(self.half_period_secs);
            return Ok(());
        }

        self.pulse_pin.set_low().map_err(|_| AxisError::PinError)?;

        // Falling edge is the step's effective edge: position and direction
        // bookkeeping happens here only, which keeps the waveform at 50% duty
        // and counts each step exactly once.
        if let Some(direction) = self.tracker.advance_toward_goal() {
            self.drive_direction(direction)?;
        }

        if self.running && !self.tracker.at_goal() {
            self.scheduler.arm_half_period(self.half_period_secs);
        }

        Ok(())
    }

    fn drive_direction(&mut self, direction: StepDirection) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        // Forward drives the pin low on the original hardware encoding.
        let pin_high = match direction {
            StepDirection::Forward => self.invert_direction,
            StepDirection::Reverse => !self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| AxisError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| AxisError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }
}

impl<PULSE, DIR, TIMER> TimerInterruptHandler for StepperAxis<PULSE, DIR, TIMER>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    TIMER: CompareTimer,
{
    fn on_timer_interrupt(&mut self) -> Result<()> {
        StepperAxis::on_timer_interrupt(self)
    }
}
