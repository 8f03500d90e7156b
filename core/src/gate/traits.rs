use async_trait::async_trait;

use crate::error::GateError;

use super::GateEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Interrupted,
    Closed,
}

/// Line-oriented user input channel.
#[async_trait]
pub trait LineInput: Send {
    /// Shows `prompt` and blocks until a full line, an interrupt, or end
    /// of input. The returned line is untrimmed.
    async fn read_line(&mut self, prompt: &str) -> Result<InputEvent, GateError>;
}

pub trait GateReporter: Send {
    fn report(&mut self, event: &GateEvent) -> Result<(), GateError>;
}

/// The feature set unlocked by an accepted key.
#[async_trait]
pub trait ProtectedFeature: Send {
    fn name(&self) -> &str;

    /// Runs until the feature itself decides to stop.
    async fn run(&mut self) -> Result<(), GateError>;
}
