use std::sync::Arc;

use crate::acceptance::{AcceptanceTest, AcceptanceVerdict};
use crate::config::GateConfig;
use crate::error::GateError;

use super::{
    AbortCause, GateEvent, GateOutcome, GatePhase, GateReporter, GateState, InputEvent, LineInput,
    ProtectedFeature,
};

pub const KEY_PROMPT: &str = "Please enter your access key: ";

/// Result of feeding one input line to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Aborted,
    Accepted,
    Retry(AcceptanceVerdict),
    Exhausted(AcceptanceVerdict),
}

/// Attempt-bounded loop around an [`AcceptanceTest`].
pub struct GateController {
    acceptance: Arc<dyn AcceptanceTest>,
    exit_sentinel: String,
    state: GateState,
    phase: GatePhase,
    attempt: u32,
}

impl GateController {
    pub fn new(acceptance: Arc<dyn AcceptanceTest>, cfg: &GateConfig) -> Self {
        Self {
            acceptance,
            exit_sentinel: cfg.exit_sentinel.trim().to_string(),
            state: GateState::new(cfg.max_attempts),
            phase: GatePhase::Prompting,
            attempt: 0,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<GateOutcome> {
        match self.phase {
            GatePhase::Prompting => None,
            GatePhase::Accepted => Some(GateOutcome::Accepted {
                attempts_remaining: self.state.attempts_remaining(),
            }),
            GatePhase::Exhausted => Some(GateOutcome::Exhausted),
            GatePhase::Aborted(cause) => Some(GateOutcome::Aborted { cause }),
        }
    }

    /// Applies one raw input line to the state machine. No I/O.
    ///
    /// Must only be called while prompting.
    pub fn submit(&mut self, raw: &str) -> Transition {
        debug_assert_eq!(self.phase, GatePhase::Prompting);
        let candidate = raw.trim();

        if candidate.eq_ignore_ascii_case(&self.exit_sentinel) {
            self.phase = GatePhase::Aborted(AbortCause::ExitSentinel);
            return Transition::Aborted;
        }

        let verdict = self.acceptance.evaluate(candidate);
        tracing::debug!(
            target: "keygate.gate",
            rule = self.acceptance.name(),
            candidate_len = candidate.chars().count(),
            accepted = verdict.accepted(),
            reason = ?verdict.reason(),
            "candidate evaluated"
        );

        if verdict.accepted() {
            self.phase = GatePhase::Accepted;
            return Transition::Accepted;
        }

        if self.state.record_rejection() == 0 {
            self.phase = GatePhase::Exhausted;
            Transition::Exhausted(verdict)
        } else {
            Transition::Retry(verdict)
        }
    }

    /// Drives the gate to a terminal phase. On acceptance the protected
    /// feature is entered exactly once and its completion ends the run.
    pub async fn run(
        &mut self,
        input: &mut dyn LineInput,
        reporter: &mut dyn GateReporter,
        feature: &mut dyn ProtectedFeature,
    ) -> Result<GateOutcome, GateError> {
        while self.phase == GatePhase::Prompting {
            self.attempt += 1;
            reporter.report(&GateEvent::Prompting {
                attempt: self.attempt,
                attempts_remaining: self.state.attempts_remaining(),
            })?;

            let line = match input.read_line(KEY_PROMPT).await? {
                InputEvent::Line(line) => line,
                InputEvent::Interrupted => {
                    self.abort(AbortCause::Interrupted, reporter)?;
                    break;
                }
                InputEvent::Closed => {
                    self.abort(AbortCause::InputClosed, reporter)?;
                    break;
                }
            };

            match self.submit(&line) {
                Transition::Aborted => {
                    tracing::info!(target: "keygate.gate", "exit sentinel received");
                    reporter.report(&GateEvent::Aborted {
                        cause: AbortCause::ExitSentinel,
                    })?;
                }
                Transition::Accepted => {
                    tracing::info!(
                        target: "keygate.gate",
                        attempt = self.attempt,
                        attempts_remaining = self.state.attempts_remaining(),
                        feature = feature.name(),
                        "key accepted, entering protected feature"
                    );
                    reporter.report(&GateEvent::Accepted)?;
                    feature.run().await?;
                    tracing::info!(target: "keygate.gate", feature = feature.name(), "protected feature finished");
                }
                Transition::Retry(verdict) => {
                    tracing::warn!(
                        target: "keygate.gate",
                        reason = ?verdict.reason(),
                        attempts_remaining = self.state.attempts_remaining(),
                        "key rejected"
                    );
                    reporter.report(&GateEvent::Rejected {
                        reason: verdict.reason(),
                        attempts_remaining: self.state.attempts_remaining(),
                    })?;
                }
                Transition::Exhausted(verdict) => {
                    tracing::warn!(
                        target: "keygate.gate",
                        reason = ?verdict.reason(),
                        "key rejected, no attempts left"
                    );
                    reporter.report(&GateEvent::Rejected {
                        reason: verdict.reason(),
                        attempts_remaining: 0,
                    })?;
                    reporter.report(&GateEvent::Exhausted)?;
                }
            }
        }

        self.outcome()
            .ok_or_else(|| GateError::Feature("gate stopped while still prompting".to_string()))
    }

    fn abort(&mut self, cause: AbortCause, reporter: &mut dyn GateReporter) -> Result<(), GateError> {
        tracing::info!(target: "keygate.gate", cause = cause.as_str(), "gate aborted");
        self.phase = GatePhase::Aborted(cause);
        reporter.report(&GateEvent::Aborted { cause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceptance::{DigestRule, VerdictReason};
    use crate::gate::{CountingFeature, RecordingReporter, ScriptedInput};
    use pretty_assertions::assert_eq;

    const GOOD: &str = "AbCdEfGhIjKlMnOpQrStUv07";
    const BAD_KEY: &str = "AbCdEfGhIjKlMnOpQrStUv00";

    fn controller() -> GateController {
        GateController::new(Arc::new(DigestRule::default()), &GateConfig::default())
    }

    #[test]
    fn submit_trims_before_evaluating() {
        let mut gate = controller();
        assert_eq!(gate.submit(&format!("  {GOOD}\t\n")), Transition::Accepted);
        assert_eq!(gate.state().attempts_remaining(), 3);
    }

    #[test]
    fn submit_counts_down_to_exhaustion() {
        let mut gate = controller();
        assert!(matches!(gate.submit("nope"), Transition::Retry(v) if v.reason() == VerdictReason::InvalidFormat));
        assert!(matches!(gate.submit(BAD_KEY), Transition::Retry(v) if v.reason() == VerdictReason::InvalidKey));
        assert!(matches!(gate.submit(""), Transition::Exhausted(_)));
        assert_eq!(gate.state().attempts_remaining(), 0);
        assert_eq!(gate.phase(), GatePhase::Exhausted);
    }

    #[test]
    fn sentinel_is_case_insensitive_and_free() {
        for sentinel in ["exit", "EXIT", " Exit ", "eXiT"] {
            let mut gate = controller();
            assert_eq!(gate.submit(sentinel), Transition::Aborted);
            assert_eq!(gate.state().attempts_remaining(), 3);
            assert_eq!(
                gate.outcome(),
                Some(GateOutcome::Aborted {
                    cause: AbortCause::ExitSentinel
                })
            );
        }
    }

    #[test]
    fn custom_sentinel_and_attempts_from_config() {
        let cfg = GateConfig {
            max_attempts: 1,
            exit_sentinel: "quit".to_string(),
        };
        let mut gate = GateController::new(Arc::new(DigestRule::default()), &cfg);
        assert!(matches!(gate.submit("exit"), Transition::Exhausted(_)));

        let mut gate = GateController::new(Arc::new(DigestRule::default()), &cfg);
        assert_eq!(gate.submit("QUIT"), Transition::Aborted);
    }

    #[tokio::test]
    async fn run_reports_events_in_order() {
        let mut gate = controller();
        let mut input = ScriptedInput::lines(["bad", GOOD]);
        let mut reporter = RecordingReporter::default();
        let mut feature = CountingFeature::default();

        let outcome = gate
            .run(&mut input, &mut reporter, &mut feature)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            GateOutcome::Accepted {
                attempts_remaining: 2
            }
        );
        assert_eq!(
            reporter.events,
            vec![
                GateEvent::Prompting {
                    attempt: 1,
                    attempts_remaining: 3
                },
                GateEvent::Rejected {
                    reason: VerdictReason::InvalidFormat,
                    attempts_remaining: 2
                },
                GateEvent::Prompting {
                    attempt: 2,
                    attempts_remaining: 2
                },
                GateEvent::Accepted,
            ]
        );
        assert_eq!(input.prompts(), &[KEY_PROMPT, KEY_PROMPT]);
        assert_eq!(feature.runs, 1);
    }

    #[tokio::test]
    async fn interrupt_aborts_without_consuming_attempts() {
        let mut gate = controller();
        let mut input = ScriptedInput::new([
            InputEvent::Line("bad".to_string()),
            InputEvent::Interrupted,
            InputEvent::Line(GOOD.to_string()),
        ]);
        let mut reporter = RecordingReporter::default();
        let mut feature = CountingFeature::default();

        let outcome = gate
            .run(&mut input, &mut reporter, &mut feature)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            GateOutcome::Aborted {
                cause: AbortCause::Interrupted
            }
        );
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(gate.state().attempts_remaining(), 2);
        assert_eq!(input.remaining(), 1);
        assert_eq!(feature.runs, 0);
    }

    #[tokio::test]
    async fn closed_input_aborts_cleanly() {
        let mut gate = controller();
        let mut input = ScriptedInput::default();
        let mut reporter = RecordingReporter::default();
        let mut feature = CountingFeature::default();

        let outcome = gate
            .run(&mut input, &mut reporter, &mut feature)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            GateOutcome::Aborted {
                cause: AbortCause::InputClosed
            }
        );
        assert_eq!(
            reporter.events.last(),
            Some(&GateEvent::Aborted {
                cause: AbortCause::InputClosed
            })
        );
    }

    #[tokio::test]
    async fn feature_failure_propagates() {
        struct Failing;

        #[async_trait::async_trait]
        impl ProtectedFeature for Failing {
            fn name(&self) -> &str {
                "failing"
            }

            async fn run(&mut self) -> Result<(), GateError> {
                Err(GateError::Feature("boom".to_string()))
            }
        }

        let mut gate = controller();
        let mut input = ScriptedInput::lines([GOOD]);
        let mut reporter = RecordingReporter::default();

        let err = gate
            .run(&mut input, &mut reporter, &mut Failing)
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::Feature(msg) if msg == "boom"));
        assert_eq!(gate.phase(), GatePhase::Accepted);
    }
}
