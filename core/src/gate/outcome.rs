pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_EXHAUSTED: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortCause {
    /// The user typed the exit sentinel.
    ExitSentinel,
    /// Ctrl-C while waiting for input.
    Interrupted,
    /// Input channel reached end of file.
    InputClosed,
}

impl AbortCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbortCause::ExitSentinel => "exit_sentinel",
            AbortCause::Interrupted => "interrupted",
            AbortCause::InputClosed => "input_closed",
        }
    }
}

/// Terminal disposition of a gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Accepted { attempts_remaining: u32 },
    Exhausted,
    Aborted { cause: AbortCause },
}

impl GateOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            GateOutcome::Accepted { .. } | GateOutcome::Aborted { .. } => EXIT_SUCCESS,
            GateOutcome::Exhausted => EXIT_EXHAUSTED,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            GateOutcome::Accepted { .. } => "accepted",
            GateOutcome::Exhausted => "exhausted",
            GateOutcome::Aborted { .. } => "aborted",
        }
    }
}
