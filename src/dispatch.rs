//! Interrupt dispatch / active-instance registry.
//!
//! The hardware exposes one compare timer and one interrupt vector, so at most
//! one axis may receive timer callbacks at a time. Rather than a bare global,
//! the slot is an explicit value the application wraps in its platform's
//! interrupt-safe cell and forwards to from the ISR. Tests can hold as many
//! slots as they like and swap handlers freely.

use crate::error::Result;

/// Receiver of hardware timer compare interrupts.
///
/// Object-safe so a registry slot can hold any axis regardless of its pin and
/// timer types.
pub trait TimerInterruptHandler {
    /// Run one automaton phase in response to a timer firing.
    fn on_timer_interrupt(&mut self) -> Result<()>;
}

/// Single-slot registry for the one axis currently receiving interrupts.
///
/// Registering overwrites any previous occupant; the displaced axis simply
/// stops receiving callbacks, mirroring the original hardware behavior.
#[derive(Default)]
pub struct ActiveAxis<'a> {
    slot: Option<&'a mut dyn TimerInterruptHandler>,
}

impl<'a> ActiveAxis<'a> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Register a handler as the active instance, replacing any previous one.
    pub fn register(&mut self, handler: &'a mut dyn TimerInterruptHandler) {
        self.slot = Some(handler);
    }

    /// Empty the slot.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Whether a handler currently occupies the slot.
    #[inline]
    pub fn is_registered(&self) -> bool {
        self.slot.is_some()
    }

    /// Forward a timer firing to the registered handler.
    ///
    /// Returns `None` when the slot is empty, otherwise the handler's result.
    pub fn dispatch(&mut self) -> Option<Result<()>> {
        self.slot.as_mut().map(|h| h.on_timer_interrupt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHandler {
        fired: u32,
    }

    impl TimerInterruptHandler for CountingHandler {
        fn on_timer_interrupt(&mut self) -> Result<()> {
            self.fired += 1;
            Ok(())
        }
    }

    #[test]
    fn test_empty_slot_dispatches_nothing() {
        let mut slot = ActiveAxis::new();
        assert!(!slot.is_registered());
        assert!(slot.dispatch().is_none());
    }

    #[test]
    fn test_dispatch_reaches_handler() {
        let mut handler = CountingHandler::default();
        let mut slot = ActiveAxis::new();

        slot.register(&mut handler);
        assert!(slot.is_registered());
        assert!(matches!(slot.dispatch(), Some(Ok(()))));
        assert!(matches!(slot.dispatch(), Some(Ok(()))));

        drop(slot);
        assert_eq!(handler.fired, 2);
    }

    #[test]
    fn test_register_overwrites() {
        let mut first = CountingHandler::default();
        let mut second = CountingHandler::default();

        {
            let mut slot = ActiveAxis::new();
            slot.register(&mut first);
            slot.dispatch();
            slot.register(&mut second);
            slot.dispatch();
        }

        assert_eq!(first.fired, 1);
        assert_eq!(second.fired, 1);
    }

    #[test]
    fn test_clear_goes_quiet() {
        let mut handler = CountingHandler::default();

        {
            let mut slot = ActiveAxis::new();
            slot.register(&mut handler);
            slot.clear();
            assert!(slot.dispatch().is_none());
        }

        assert_eq!(handler.fired, 0);
    }
}
