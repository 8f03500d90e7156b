mod controller;
mod events;
mod outcome;
mod scripted;
mod state;
mod traits;

pub use controller::{GateController, Transition, KEY_PROMPT};
pub use events::GateEvent;
pub use outcome::{AbortCause, GateOutcome, EXIT_EXHAUSTED, EXIT_SUCCESS};
pub use scripted::{CountingFeature, RecordingReporter, ScriptedInput};
pub use state::{GatePhase, GateState};
pub use traits::{GateReporter, InputEvent, LineInput, ProtectedFeature};
