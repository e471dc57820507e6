//! # pulse-stepper
//!
//! Interrupt-driven stepper pulse generation with embedded-hal 1.0 support.
//!
//! Drives a single stepper axis by emitting evenly-spaced pulses on a digital
//! output. Timing comes from a hardware countdown/compare timer rather than
//! busy-waiting: the axis arms the timer for one half-period, the timer fires
//! its interrupt, and the handler toggles the pulse output, advances the
//! tracked position on falling edges, and re-arms for the next half-period.
//! Mainline code stays free between pulses and may change the goal position,
//! speed, or running state at any time.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: Uses `OutputPin` for the pulse and direction outputs
//! - **Timer abstraction**: [`CompareTimer`] trait for the hardware timer, so
//!   tests run against fakes and firmware plugs in real registers
//! - **Two-phase waveform**: every step is exactly two equal half-periods
//!   (50% duty), with position bookkeeping on falling edges only
//! - **Configuration-driven**: Define axes in TOML files (`std` feature)
//! - **no_std compatible**: Core library works without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pulse_stepper::{PulsesPerSec, StepperAxis, Steps};
//!
//! // Create an axis with embedded-hal pins and a platform compare timer
//! let mut axis = StepperAxis::builder()
//!     .name("auger")
//!     .pulse_pin(pulse_pin)
//!     .dir_pin(dir_pin)
//!     .timer(timer)
//!     .pulses_per_second(PulsesPerSec(800.0))
//!     .build()?;
//!
//! axis.set_goal_pos(Steps(1600));
//! axis.start();
//! // ... the timer ISR forwards each firing to axis.on_timer_interrupt()
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod axis;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod timer;

// Re-exports for ergonomic API
pub use axis::{PositionTracker, StepDirection, StepperAxis, StepperAxisBuilder};
pub use config::{validate_config, AxisConfig, SystemConfig};
pub use dispatch::{ActiveAxis, TimerInterruptHandler};
pub use error::{Error, Result};
pub use timer::{ClampedTicks, CompareTimer, PulseScheduler};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{PulsesPerSec, Steps, UnitExt};
