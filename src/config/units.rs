//! Unit types for physical quantities.
//!
//! Provides type-safe representations of axis positions and pulse rates to
//! prevent unit confusion at compile time.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Axis position in steps (absolute from an arbitrary origin).
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Pulse rate in full pulses per second.
///
/// One pulse is one position step; the output waveform spends half the pulse
/// period high and half low, so the armed wait is half of `1 / rate`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulsesPerSec(pub f32);

impl PulsesPerSec {
    /// Create a new PulsesPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Duration of one pulse phase (half the full pulse period) in seconds.
    ///
    /// Only meaningful for positive rates; validation lives in
    /// [`crate::config::validate_config`] and the axis setters.
    #[inline]
    pub fn half_period_secs(self) -> f32 {
        1.0 / (2.0 * self.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// The unit type this primitive converts into.
    type Unit;

    /// Wrap the raw value in its unit type.
    fn into_unit(self) -> Self::Unit;
}

impl UnitExt for i64 {
    type Unit = Steps;

    #[inline]
    fn into_unit(self) -> Steps {
        Steps(self)
    }
}

impl UnitExt for f32 {
    type Unit = PulsesPerSec;

    #[inline]
    fn into_unit(self) -> PulsesPerSec {
        PulsesPerSec(self)
    }
}
