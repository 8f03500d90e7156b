//! Line input from stdin, raced against Ctrl-C.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use keygate_core::api::{GateError, InputEvent, LineInput};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Clonable handle over one shared buffered reader, so the gate and the
/// protected menu never split buffered lines between two readers.
pub struct Console<R> {
    lines: Arc<Mutex<Lines<R>>>,
}

impl<R> Clone for Console<R> {
    fn clone(&self) -> Self {
        Self {
            lines: Arc::clone(&self.lines),
        }
    }
}

pub type StdConsole = Console<BufReader<Stdin>>;

impl StdConsole {
    /// The blocking read behind tokio's stdin cannot be cancelled; callers
    /// should leave via `std::process::exit` after an interrupt.
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> Console<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: Arc::new(Mutex::new(reader.lines())),
        }
    }
}

#[async_trait]
impl<R> LineInput for Console<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn read_line(&mut self, prompt: &str) -> Result<InputEvent, GateError> {
        print!("{prompt}");
        std::io::stdout().flush().map_err(GateError::Output)?;

        let mut lines = self.lines.lock().await;
        tokio::select! {
            res = lines.next_line() => match res {
                Ok(Some(line)) => Ok(InputEvent::Line(line)),
                Ok(None) => {
                    tracing::debug!(target: "keygate.console", "stdin closed");
                    Ok(InputEvent::Closed)
                }
                Err(e) => Err(GateError::Input(e)),
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!(target: "keygate.console", "interrupt received");
                Ok(InputEvent::Interrupted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(text: &'static str) -> Console<BufReader<&'static [u8]>> {
        Console::from_reader(BufReader::new(text.as_bytes()))
    }

    #[tokio::test]
    async fn reads_lines_then_reports_closed() {
        let mut c = console("first\r\n  second  \n");
        assert_eq!(
            c.read_line("> ").await.unwrap(),
            InputEvent::Line("first".to_string())
        );
        assert_eq!(
            c.read_line("> ").await.unwrap(),
            InputEvent::Line("  second  ".to_string())
        );
        assert_eq!(c.read_line("> ").await.unwrap(), InputEvent::Closed);
    }

    #[tokio::test]
    async fn clones_share_one_reader() {
        let mut gate_side = console("a\nb\n");
        let mut menu_side = gate_side.clone();
        assert_eq!(
            gate_side.read_line("").await.unwrap(),
            InputEvent::Line("a".to_string())
        );
        assert_eq!(
            menu_side.read_line("").await.unwrap(),
            InputEvent::Line("b".to_string())
        );
    }
}
