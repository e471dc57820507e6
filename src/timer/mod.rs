//! Timer module for pulse-stepper.
//!
//! Provides the hardware compare-timer contract and the pulse scheduler that
//! translates half-periods into armed tick counts.

mod hardware;
mod scheduler;

pub use hardware::CompareTimer;
pub use scheduler::{ClampedTicks, PulseScheduler};
