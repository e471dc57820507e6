//! Pulse timer scheduler.
//!
//! Converts a requested half-period in seconds to a tick count the hardware
//! can express in one arm, and programs the compare timer with it. Knows
//! nothing about axis state.

use super::hardware::CompareTimer;

/// Tick count produced for one arm, with the clamping that was applied.
///
/// A wait longer than the timer's maximum count is silently saturated to the
/// longest wait one arm can express; very low pulse rates therefore run
/// faster than configured. The `saturated` flag makes that policy observable
/// so a future revision can chain multiple waits instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClampedTicks {
    /// Tick count that will be armed.
    pub ticks: u32,
    /// Whether the requested wait exceeded the timer maximum.
    pub saturated: bool,
}

/// Scheduler wrapping a hardware compare timer.
#[derive(Debug)]
pub struct PulseScheduler<T: CompareTimer> {
    timer: T,
}

impl<T: CompareTimer> PulseScheduler<T> {
    /// Create a scheduler over a compare timer.
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    /// Get the underlying timer.
    #[inline]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Get the underlying timer mutably.
    #[inline]
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Consume the scheduler, returning the timer.
    pub fn into_timer(self) -> T {
        self.timer
    }

    /// Compute the tick count for a half-period in seconds.
    ///
    /// Saturates at the timer maximum and floors at one tick so an armed
    /// timer always fires.
    pub fn ticks_for(&self, half_period_secs: f32) -> ClampedTicks {
        let max = self.timer.max_ticks();
        let raw = half_period_secs * self.timer.tick_rate();

        if raw >= max as f32 {
            ClampedTicks {
                ticks: max,
                saturated: true,
            }
        } else if raw >= 1.0 {
            ClampedTicks {
                ticks: raw as u32,
                saturated: false,
            }
        } else {
            // Sub-tick (or non-finite) requests still arm one tick
            ClampedTicks {
                ticks: 1,
                saturated: false,
            }
        }
    }

    /// Arm the timer to fire after one half-period.
    ///
    /// Returns the tick count that was armed.
    pub fn arm_half_period(&mut self, half_period_secs: f32) -> ClampedTicks {
        let clamped = self.ticks_for(half_period_secs);
        self.timer.arm(clamped.ticks);
        clamped
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.timer.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_RATE: f32 = 6_000_000.0;
    const MAX_TICKS: u32 = 65_535;

    #[derive(Debug, Default)]
    struct FakeTimer {
        armed: Option<u32>,
        disarms: u32,
    }

    impl CompareTimer for FakeTimer {
        fn tick_rate(&self) -> f32 {
            TICK_RATE
        }

        fn max_ticks(&self) -> u32 {
            MAX_TICKS
        }

        fn arm(&mut self, ticks: u32) {
            self.armed = Some(ticks);
        }

        fn disarm(&mut self) {
            self.armed = None;
            self.disarms += 1;
        }
    }

    #[test]
    fn test_tick_conversion() {
        let scheduler = PulseScheduler::new(FakeTimer::default());

        // 1000 pulses/sec -> 0.5 ms half-period -> 3000 ticks at 6 MHz
        let clamped = scheduler.ticks_for(0.0005);
        assert_eq!(clamped.ticks, 3000);
        assert!(!clamped.saturated);
    }

    #[test]
    fn test_saturates_at_max() {
        let scheduler = PulseScheduler::new(FakeTimer::default());

        // A half-second wait needs 3,000,000 ticks; one arm holds 65,535
        let clamped = scheduler.ticks_for(0.5);
        assert_eq!(clamped.ticks, MAX_TICKS);
        assert!(clamped.saturated);
    }

    #[test]
    fn test_floors_at_one_tick() {
        let scheduler = PulseScheduler::new(FakeTimer::default());

        let clamped = scheduler.ticks_for(1e-9);
        assert_eq!(clamped.ticks, 1);
        assert!(!clamped.saturated);
    }

    #[test]
    fn test_arm_programs_timer() {
        let mut scheduler = PulseScheduler::new(FakeTimer::default());

        let clamped = scheduler.arm_half_period(0.0005);
        assert_eq!(scheduler.timer().armed, Some(clamped.ticks));

        scheduler.cancel();
        assert_eq!(scheduler.timer().armed, None);
        assert_eq!(scheduler.timer().disarms, 1);
    }
}
