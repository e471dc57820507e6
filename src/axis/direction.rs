//! Step direction.

/// Direction of axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepDirection {
    /// Toward larger positions (position increments).
    Forward,
    /// Toward smaller positions (position decrements).
    Reverse,
}

impl StepDirection {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            StepDirection::Forward => 1,
            StepDirection::Reverse => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(StepDirection::Forward.sign(), 1);
        assert_eq!(StepDirection::Reverse.sign(), -1);
    }
}

