//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::PulsesPerSec;

/// Complete axis configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Pulse rate in full pulses per second.
    #[serde(rename = "pulses_per_second")]
    pub pulse_rate: PulsesPerSec,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

impl AxisConfig {
    /// Duration of one pulse phase in seconds at the configured rate.
    #[inline]
    pub fn half_period_secs(&self) -> f32 {
        self.pulse_rate.half_period_secs()
    }
}
