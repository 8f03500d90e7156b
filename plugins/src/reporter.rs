use std::io::Write;

use keygate_core::api::{AbortCause, GateError, GateEvent, GateReporter};

const BANNER: &str = r#"
    +-----------------------------------------------+
    |                SECURE PROGRAM                 |
    |             Protected by keygate              |
    +-----------------------------------------------+
"#;

/// Renders gate events as plain terminal text.
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &GateEvent) -> std::io::Result<()> {
        match event {
            GateEvent::Prompting {
                attempt,
                attempts_remaining,
            } => {
                if *attempt == 1 {
                    writeln!(self.out, "{BANNER}")?;
                    writeln!(self.out, "This program is protected by an access key.")?;
                    writeln!(self.out, "You must have a valid key to access the content.")?;
                    writeln!(self.out, "Type 'exit' to quit.\n")?;
                }
                writeln!(self.out, "Attempts remaining: {attempts_remaining}")?;
            }
            GateEvent::Rejected {
                reason,
                attempts_remaining,
            } => {
                writeln!(self.out, "Validating key... x")?;
                writeln!(self.out, "Error: {reason}")?;
                if *attempts_remaining > 0 {
                    let noun = if *attempts_remaining == 1 {
                        "attempt"
                    } else {
                        "attempts"
                    };
                    writeln!(self.out, "\nYou have {attempts_remaining} {noun} remaining.")?;
                }
            }
            GateEvent::Accepted => {
                writeln!(self.out, "Validating key... ok")?;
                writeln!(self.out, "Access granted! Loading protected program...")?;
            }
            GateEvent::Exhausted => {
                writeln!(self.out, "\nYou have exceeded the maximum number of attempts.")?;
                writeln!(self.out, "Please generate a new key and try again.")?;
            }
            GateEvent::Aborted { cause } => match cause {
                AbortCause::ExitSentinel => writeln!(self.out, "Goodbye.")?,
                AbortCause::Interrupted => writeln!(self.out, "\n\nProgram terminated by user.")?,
                AbortCause::InputClosed => writeln!(self.out, "\nInput closed. Exiting.")?,
            },
        }
        self.out.flush()
    }
}

impl<W: Write + Send> GateReporter for ConsoleReporter<W> {
    fn report(&mut self, event: &GateEvent) -> Result<(), GateError> {
        self.render(event).map_err(GateError::Output)
    }
}
