//! In-memory doubles for the gate's collaborators, for tests and
//! non-interactive drivers.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::GateError;

use super::{GateEvent, GateReporter, InputEvent, LineInput, ProtectedFeature};

/// Replays a fixed list of input events, then reports `Closed`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(|l| InputEvent::Line(l.into())))
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl LineInput for ScriptedInput {
    async fn read_line(&mut self, prompt: &str) -> Result<InputEvent, GateError> {
        self.prompts.push(prompt.to_string());
        Ok(self.events.pop_front().unwrap_or(InputEvent::Closed))
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub events: Vec<GateEvent>,
}

impl GateReporter for RecordingReporter {
    fn report(&mut self, event: &GateEvent) -> Result<(), GateError> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Protected feature that only counts how often it was entered.
#[derive(Debug, Default, Clone)]
pub struct CountingFeature {
    pub runs: usize,
}

#[async_trait]
impl ProtectedFeature for CountingFeature {
    fn name(&self) -> &str {
        "counting"
    }

    async fn run(&mut self) -> Result<(), GateError> {
        self.runs += 1;
        Ok(())
    }
}
