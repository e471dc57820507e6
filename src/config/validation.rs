//! Configuration validation.
//!
//! Pulse rates are validated here and in the axis setters, never in the
//! interrupt path.

use crate::error::{ConfigError, Error, Result};

use super::system::SystemConfig;

/// Check that a pulse rate is usable for timing computations.
///
/// A zero, negative, or non-finite rate would produce a meaningless
/// half-period, so it is rejected rather than clamped.
pub(crate) fn check_pulse_rate(rate: f32) -> core::result::Result<(), ConfigError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPulseRate(rate))
    }
}

/// Validate a complete system configuration.
///
/// # Errors
///
/// Returns the first `ConfigError` encountered.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, axis) in config.axes.iter() {
        check_pulse_rate(axis.pulse_rate.value()).map_err(Error::Config)?;
    }
    Ok(())
}
