use crate::acceptance::VerdictReason;

use super::AbortCause;

/// Presentation-facing events emitted by the gate loop.
///
/// Core stays UI-agnostic: a [`super::GateReporter`] decides how (or
/// whether) each event is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    Prompting {
        attempt: u32,
        attempts_remaining: u32,
    },
    Rejected {
        reason: VerdictReason,
        attempts_remaining: u32,
    },
    Accepted,
    Exhausted,
    Aborted {
        cause: AbortCause,
    },
}
