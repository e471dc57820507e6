//! Basic axis control example.
//!
//! Builds a stepper axis over mock hardware and simulates the timer interrupt
//! loop by hand: whenever the fake timer holds an armed wait, the "interrupt"
//! fires and the automaton runs one phase.

use pulse_stepper::{ActiveAxis, CompareTimer, PulsesPerSec, StepperAxis, Steps};

/// Mock compare timer for demonstration.
#[derive(Default)]
struct MockTimer {
    armed: Option<u32>,
}

impl CompareTimer for MockTimer {
    fn tick_rate(&self) -> f32 {
        6_000_000.0
    }

    fn max_ticks(&self) -> u32 {
        65_535
    }

    fn arm(&mut self, ticks: u32) {
        self.armed = Some(ticks);
    }

    fn disarm(&mut self) {
        self.armed = None;
    }
}

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn main() {
    println!("=== Basic Axis Control Example ===\n");

    let mut axis = StepperAxis::builder()
        .name("demo_axis")
        .pulse_pin(MockPin::new())
        .dir_pin(MockPin::new())
        .timer(MockTimer::default())
        .pulses_per_second(PulsesPerSec(800.0))
        .build()
        .expect("Failed to build axis");

    println!("Axis created: {}", axis.name());
    println!(
        "Half-period: {:.1} us per phase\n",
        axis.step_time() * 1_000_000.0
    );

    // Move 8 steps forward, firing the "interrupt" whenever armed
    axis.set_goal_pos(Steps(8));
    axis.start();

    let mut firings = 0;
    while axis.scheduler().timer().armed.is_some() {
        axis.on_timer_interrupt().expect("pin write failed");
        firings += 1;
        if firings % 2 == 0 {
            println!(
                "  step complete: position = {} (to go: {})",
                axis.current_pos().value(),
                axis.distance_to_go()
            );
        }
    }
    println!("Move finished after {} timer firings\n", firings);

    // The same firings can be routed through the single-slot registry,
    // the way firmware ISR glue would do it
    axis.set_goal_pos(Steps(5));
    let mut slot = ActiveAxis::new();
    slot.register(&mut axis);
    for _ in 0..6 {
        slot.dispatch().expect("slot is registered").expect("pin write failed");
    }
    drop(slot);

    println!(
        "After dispatching 6 firings through the registry: position = {}",
        axis.current_pos().value()
    );
}
