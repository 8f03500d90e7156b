//! The feature set behind the gate: a small dispatch-on-command loop.

use std::io::Write;

use anyhow::Context;
use async_trait::async_trait;
use keygate_core::api::{GateError, InputEvent, LineInput, ProtectedFeature};

pub const MENU_PROMPT: &str = "\nEnter your choice (1-3): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ShowInfo,
    Calculate,
    Exit,
}

impl MenuCommand {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuCommand::ShowInfo),
            "2" => Some(MenuCommand::Calculate),
            "3" => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

pub struct ProtectedMenu<I, W> {
    input: I,
    out: W,
}

impl<I, W> ProtectedMenu<I, W>
where
    I: LineInput,
    W: Write + Send,
{
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// `None` when the user interrupted or input ended.
    async fn next_line(&mut self, prompt: &str) -> Result<Option<String>, GateError> {
        match self.input.read_line(prompt).await? {
            InputEvent::Line(line) => Ok(Some(line)),
            InputEvent::Interrupted | InputEvent::Closed => Ok(None),
        }
    }

    fn show_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "\nProtected Program Menu:")?;
        writeln!(self.out, "1. Show Important Information")?;
        writeln!(self.out, "2. Calculate Something")?;
        writeln!(self.out, "3. Exit Program")?;
        self.out.flush()
    }

    fn show_info(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "\nImportant Information:")?;
        writeln!(
            self.out,
            "This is secret information only available to users with valid keys."
        )?;
        writeln!(
            self.out,
            "Your access to this information will expire in 24 hours."
        )
    }

    /// Returns `false` when input ended mid-calculation.
    async fn calculate(&mut self) -> Result<bool, GateError> {
        writeln!(self.out, "\nCalculation Module:").map_err(GateError::Output)?;
        let Some(first) = self.next_line("Enter first number: ").await? else {
            return Ok(false);
        };
        let Some(second) = self.next_line("Enter second number: ").await? else {
            return Ok(false);
        };

        match parse_operands(&first, &second) {
            Ok((a, b)) => write_results(&mut self.out, a, b).map_err(GateError::Output)?,
            Err(e) => {
                tracing::debug!(target: "keygate.menu", error = %e, "bad calculator input");
                writeln!(self.out, "Invalid input. Please enter numbers only.")
                    .map_err(GateError::Output)?;
            }
        }
        Ok(true)
    }
}

fn parse_operands(first: &str, second: &str) -> anyhow::Result<(f64, f64)> {
    let a = first
        .trim()
        .parse::<f64>()
        .with_context(|| format!("first operand {first:?}"))?;
    let b = second
        .trim()
        .parse::<f64>()
        .with_context(|| format!("second operand {second:?}"))?;
    Ok((a, b))
}

fn write_results(out: &mut impl Write, a: f64, b: f64) -> std::io::Result<()> {
    writeln!(out, "\nResults:")?;
    writeln!(out, "Addition: {a} + {b} = {}", a + b)?;
    writeln!(out, "Subtraction: {a} - {b} = {}", a - b)?;
    writeln!(out, "Multiplication: {a} x {b} = {}", a * b)?;
    if b != 0.0 {
        writeln!(out, "Division: {a} / {b} = {}", a / b)
    } else {
        writeln!(out, "Division: Cannot divide by zero")
    }
}

#[async_trait]
impl<I, W> ProtectedFeature for ProtectedMenu<I, W>
where
    I: LineInput,
    W: Write + Send,
{
    fn name(&self) -> &str {
        "menu"
    }

    async fn run(&mut self) -> Result<(), GateError> {
        writeln!(self.out, "\nWelcome to the protected program!").map_err(GateError::Output)?;

        loop {
            self.show_menu().map_err(GateError::Output)?;
            let Some(choice) = self.next_line(MENU_PROMPT).await? else {
                tracing::info!(target: "keygate.menu", "menu input ended");
                return Ok(());
            };

            match MenuCommand::parse(&choice) {
                Some(MenuCommand::ShowInfo) => self.show_info().map_err(GateError::Output)?,
                Some(MenuCommand::Calculate) => {
                    if !self.calculate().await? {
                        return Ok(());
                    }
                }
                Some(MenuCommand::Exit) => {
                    writeln!(
                        self.out,
                        "Thank you for using the protected program. Goodbye!"
                    )
                    .map_err(GateError::Output)?;
                    return Ok(());
                }
                None => writeln!(self.out, "Invalid choice. Please try again.")
                    .map_err(GateError::Output)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keygate_core::gate::ScriptedInput;
    use pretty_assertions::assert_eq;

    async fn run_menu(lines: &[&str]) -> String {
        let mut menu = ProtectedMenu::new(ScriptedInput::lines(lines.to_vec()), Vec::new());
        menu.run().await.unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(MenuCommand::parse(" 1 "), Some(MenuCommand::ShowInfo));
        assert_eq!(MenuCommand::parse("2"), Some(MenuCommand::Calculate));
        assert_eq!(MenuCommand::parse("3"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("4"), None);
        assert_eq!(MenuCommand::parse(""), None);
    }

    #[tokio::test]
    async fn info_then_exit() {
        let text = run_menu(&["1", "3"]).await;
        assert!(text.contains("only available to users with valid keys"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn calculation_prints_all_operations() {
        let text = run_menu(&["2", "6", "3", "3"]).await;
        assert!(text.contains("Addition: 6 + 3 = 9"));
        assert!(text.contains("Subtraction: 6 - 3 = 3"));
        assert!(text.contains("Multiplication: 6 x 3 = 18"));
        assert!(text.contains("Division: 6 / 3 = 2"));
    }

    #[tokio::test]
    async fn division_by_zero_is_reported() {
        let text = run_menu(&["2", "1.5", "0", "3"]).await;
        assert!(text.contains("Addition: 1.5 + 0 = 1.5"));
        assert!(text.contains("Division: Cannot divide by zero"));
    }

    #[tokio::test]
    async fn non_numeric_operand_is_rejected() {
        let text = run_menu(&["2", "one", "2", "3"]).await;
        assert!(text.contains("Invalid input. Please enter numbers only."));
        assert!(!text.contains("Results:"));
    }

    #[tokio::test]
    async fn unknown_choice_loops() {
        let text = run_menu(&["9", "3"]).await;
        assert_eq!(text.matches("Protected Program Menu:").count(), 2);
        assert!(text.contains("Invalid choice. Please try again."));
    }

    #[tokio::test]
    async fn interrupt_ends_menu_cleanly() {
        let mut menu = ProtectedMenu::new(
            ScriptedInput::new([InputEvent::Line("1".to_string()), InputEvent::Interrupted]),
            Vec::new(),
        );
        menu.run().await.unwrap();
        let text = String::from_utf8(menu.into_output()).unwrap();
        assert!(!text.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn closed_input_mid_calculation_ends_menu() {
        let text = run_menu(&["2", "4"]).await;
        assert!(text.contains("Calculation Module:"));
        assert!(!text.contains("Results:"));
    }

    #[test]
    fn parse_operands_trims_whitespace() {
        assert_eq!(parse_operands(" 2.5 ", "-1").unwrap(), (2.5, -1.0));
        assert!(parse_operands("x", "1").is_err());
    }
}
