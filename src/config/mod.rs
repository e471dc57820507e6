//! Configuration module for pulse-stepper.
//!
//! Provides types for loading and validating axis configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod axis;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
pub(crate) mod validation;

pub use axis::AxisConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{PulsesPerSec, Steps};
