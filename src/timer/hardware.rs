//! Hardware compare-timer contract.
//!
//! The scheduler drives any countdown/compare timer through this trait, the
//! same way the pin outputs go through `embedded_hal::digital::OutputPin`.
//! Firmware implements it over the platform's timer registers; tests implement
//! it over plain fields.

/// A one-shot-armable countdown/compare timer with an interrupt source.
///
/// The contract assumes a timer mode that resets the counter automatically on
/// compare match, so each armed period starts from zero. Register writes are
/// infallible on every supported platform, so the methods return nothing.
pub trait CompareTimer {
    /// Ticks the counter advances per second (clock after prescaler).
    ///
    /// Fixed characteristic of the chosen clock source; 6 MHz on the original
    /// AVR target.
    fn tick_rate(&self) -> f32;

    /// Largest compare target a single arm can express.
    fn max_ticks(&self) -> u32;

    /// Reset the counter to zero, program the compare target, and enable the
    /// interrupt source so it fires once `ticks` have elapsed.
    fn arm(&mut self, ticks: u32);

    /// Disable the interrupt source and clear the timer configuration.
    ///
    /// Called on interrupt entry so the source stays quiet while the handler
    /// runs; a later `arm` re-enables it.
    fn disarm(&mut self);
}
