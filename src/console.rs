//! Line-oriented console prompter.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use tracing::warn;

use crate::error::PromptError;
use crate::participant::check_bet;
use crate::prompt::{Prompter, TableEvent};

/// A [`Prompter`] that asks questions on a writer and reads answers line by
/// line from a reader.
///
/// Unrecognized answers get an explanatory message and the question is asked
/// again. Reaching the end of input yields [`PromptError::Closed`].
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, Stdout> {
    /// Creates a prompter over the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Creates a prompter over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter and returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes a line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Asks a question and returns the trimmed answer line.
    ///
    /// # Errors
    ///
    /// Returns an error at end of input or if the console fails.
    pub fn ask_text(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_owned())
    }

    fn ask_parsed(&mut self, question: &str) -> Result<usize, PromptError> {
        loop {
            let answer = self.ask_text(question)?;
            match answer.parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.ask_text(&format!("{question} (y/n)? "))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    fn ask_number(
        &mut self,
        question: &str,
        low: usize,
        high: usize,
    ) -> Result<usize, PromptError> {
        loop {
            let value = self.ask_parsed(&format!("{question} ({low} - {high}): "))?;
            if (low..=high).contains(&value) {
                return Ok(value);
            }
            self.say(&format!("Please enter a number from {low} to {high}."))?;
        }
    }

    fn ask_bet(&mut self, question: &str, capital: usize) -> Result<usize, PromptError> {
        loop {
            let value = self.ask_parsed(&format!("{question}: "))?;
            match check_bet(value, capital) {
                Ok(()) => return Ok(value),
                Err(error) => self.say(&format!("Invalid bet: {error}."))?,
            }
        }
    }

    fn notify(&mut self, event: &TableEvent<'_>) {
        if let Err(err) = writeln!(self.output, "{event}") {
            warn!(%err, "failed to write table event");
        }
    }
}
