//! Builder pattern for StepperAxis.

use embedded_hal::digital::OutputPin;

use crate::config::units::PulsesPerSec;
use crate::config::{AxisConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::timer::CompareTimer;

use super::driver::{half_period_for, StepperAxis};

/// Builder for creating StepperAxis instances.
pub struct StepperAxisBuilder<PULSE, DIR, TIMER>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    TIMER: CompareTimer,
{
    pulse_pin: Option<PULSE>,
    dir_pin: Option<DIR>,
    timer: Option<TIMER>,
    name: Option<heapless::String<32>>,
    pulse_rate: Option<PulsesPerSec>,
    invert_direction: bool,
}

impl<PULSE, DIR, TIMER> Default for StepperAxisBuilder<PULSE, DIR, TIMER>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    TIMER: CompareTimer,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PULSE, DIR, TIMER> StepperAxisBuilder<PULSE, DIR, TIMER>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    TIMER: CompareTimer,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pulse_pin: None,
            dir_pin: None,
            timer: None,
            name: None,
            pulse_rate: None,
            invert_direction: false,
        }
    }

    /// Set the pulse pin.
    pub fn pulse_pin(mut self, pin: PULSE) -> Self {
        self.pulse_pin = Some(pin);
        self
    }

    /// Set the direction pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the hardware compare timer.
    pub fn timer(mut self, timer: TIMER) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Set the axis name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the pulse rate in full pulses per second.
    pub fn pulses_per_second(mut self, rate: PulsesPerSec) -> Self {
        self.pulse_rate = Some(rate);
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Configure from an AxisConfig.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.name = Some(config.name.clone());
        self.pulse_rate = Some(config.pulse_rate);
        self.invert_direction = config.invert_direction;
        self
    }

    /// Configure from SystemConfig by axis name.
    pub fn from_config(self, config: &SystemConfig, axis_name: &str) -> Result<Self> {
        let axis_config = config.axis(axis_name).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                heapless::String::try_from(axis_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_axis_config(axis_config))
    }

    /// Build the StepperAxis.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the pulse rate is
    /// not a positive, finite value.
    pub fn build(self) -> Result<StepperAxis<PULSE, DIR, TIMER>> {
        let pulse_pin = self
            .pulse_pin
            .ok_or(Error::Config(ConfigError::MissingField("pulse_pin")))?;

        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;

        let timer = self
            .timer
            .ok_or(Error::Config(ConfigError::MissingField("timer")))?;

        let rate = self
            .pulse_rate
            .ok_or(Error::Config(ConfigError::MissingField("pulses_per_second")))?;

        let half_period_secs = half_period_for(rate).map_err(Error::Config)?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("axis").unwrap_or_default());

        Ok(StepperAxis::new(
            pulse_pin,
            dir_pin,
            timer,
            name,
            half_period_secs,
            self.invert_direction,
        ))
    }
}
