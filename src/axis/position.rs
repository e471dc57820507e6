//! Position tracking for a stepper axis.
//!
//! Maintains the current and goal positions in steps and advances the current
//! position one step at a time toward the goal.

use crate::config::units::Steps;

use super::direction::StepDirection;

/// Current/goal position pair for one axis.
///
/// Both fields start at zero; the axis origin is wherever the motor happens
/// to be at construction (or wherever calibration put it).
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionTracker {
    /// Current position in steps (from origin).
    current: Steps,
    /// Goal position in steps.
    goal: Steps,
}

impl PositionTracker {
    /// Create a tracker with current and goal at the origin.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker at a specific current position.
    #[inline]
    pub fn at(current: Steps) -> Self {
        Self {
            current,
            goal: current,
        }
    }

    /// Get the current position.
    #[inline]
    pub fn current(&self) -> Steps {
        self.current
    }

    /// Get the goal position.
    #[inline]
    pub fn goal(&self) -> Steps {
        self.goal
    }

    /// Overwrite the current position unconditionally.
    #[inline]
    pub fn set_current(&mut self, pos: Steps) {
        self.current = pos;
    }

    /// Set the goal position.
    #[inline]
    pub fn set_goal(&mut self, pos: Steps) {
        self.goal = pos;
    }

    /// Whether the current position has reached the goal.
    #[inline]
    pub fn at_goal(&self) -> bool {
        self.current == self.goal
    }

    /// Signed distance from current to goal in steps.
    #[inline]
    pub fn distance_to_go(&self) -> i64 {
        self.goal.value() - self.current.value()
    }

    /// Move the current position one step toward the goal.
    ///
    /// Returns the direction stepped, or `None` when already at the goal.
    pub fn advance_toward_goal(&mut self) -> Option<StepDirection> {
        if self.current < self.goal {
            self.current = Steps(self.current.value() + 1);
            Some(StepDirection::Forward)
        } else if self.current > self.goal {
            self.current = Steps(self.current.value() - 1);
            Some(StepDirection::Reverse)
        } else {
            None
        }
    }
}
