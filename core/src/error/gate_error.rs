// core/src/error/gate_error.rs
use thiserror::Error;

/// Faults raised while driving the gate.
///
/// Rejections, exhaustion and aborts are outcomes, not errors; see
/// [`crate::gate::GateOutcome`].
#[derive(Debug, Error)]
pub enum GateError {
    #[error("failed to read from input channel")]
    Input(#[source] std::io::Error),

    #[error("failed to write to output channel")]
    Output(#[source] std::io::Error),

    #[error("protected feature failed: {0}")]
    Feature(String),
}
