use super::AbortCause;

/// Remaining attempts for one gate run. Only ever decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateState {
    attempts_remaining: u32,
}

impl GateState {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts_remaining: max_attempts,
        }
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts_remaining == 0
    }

    /// Consumes one attempt and returns what is left.
    pub fn record_rejection(&mut self) -> u32 {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.attempts_remaining
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Prompting,
    Accepted,
    Exhausted,
    Aborted(AbortCause),
}

impl GatePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GatePhase::Prompting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_never_goes_below_zero() {
        let mut state = GateState::new(2);
        assert_eq!(state.record_rejection(), 1);
        assert_eq!(state.record_rejection(), 0);
        assert!(state.is_exhausted());
        assert_eq!(state.record_rejection(), 0);
    }

    #[test]
    fn only_prompting_is_non_terminal() {
        assert!(!GatePhase::Prompting.is_terminal());
        assert!(GatePhase::Accepted.is_terminal());
        assert!(GatePhase::Exhausted.is_terminal());
        assert!(GatePhase::Aborted(AbortCause::Interrupted).is_terminal());
    }
}
