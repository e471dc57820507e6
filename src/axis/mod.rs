//! Axis module for pulse-stepper.
//!
//! Provides the stepper axis driver with its two-phase pulse automaton and
//! position tracking.

mod builder;
mod direction;
mod driver;
mod position;

pub use builder::StepperAxisBuilder;
pub use direction::StepDirection;
pub use driver::StepperAxis;
pub use position::PositionTracker;
