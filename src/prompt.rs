//! Interactive prompts: print a question, read a line, retry until valid.
//!
//! `Prompter` is generic over its input and output so sessions can be driven
//! from a buffer in tests and from the terminal in `main`.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{InputError, PromptError};
use crate::fields::Priority;
use crate::validate::*;

/// Line-oriented console wrapper around the validators.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Write a line of output.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Write text as-is, without adding a newline.
    pub fn write_raw(&mut self, text: &str) -> Result<(), PromptError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with its terminator removed.
    pub fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Print `question` and read the answer.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.say(question)?;
        self.read_line()
    }

    /// Ask until `parse` accepts the answer. Rejections print their message
    /// when `report` is set; otherwise only the question repeats.
    fn ask_until<T>(
        &mut self,
        question: &str,
        report: bool,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("rejected {answer:?}: {e}");
                    if report {
                        self.say(&e.to_string())?;
                    }
                }
            }
        }
    }

    pub fn priority(&mut self) -> Result<Priority, PromptError> {
        self.ask_until("Input the task priority (C, H, N, L):", false, parse_priority)
    }

    pub fn date(&mut self) -> Result<NaiveDate, PromptError> {
        self.ask_until("Input the date (yyyy-mm-dd):", true, parse_date)
    }

    pub fn time(&mut self) -> Result<String, PromptError> {
        self.ask_until("Input the time (hh:mm):", true, parse_time)
    }

    /// Read description lines until a blank one. `None` if nothing was entered.
    ///
    /// End of input terminates the description like a blank line would.
    pub fn description(&mut self) -> Result<Option<String>, PromptError> {
        self.say("Input a new task (enter a blank line to end):")?;
        let mut lines = Vec::new();
        loop {
            match self.read_line() {
                Ok(line) if line.trim().is_empty() => break,
                Ok(line) => lines.push(line),
                Err(PromptError::Closed) if !lines.is_empty() => break,
                Err(e) => return Err(e),
            }
        }
        match collect_description(&lines) {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                self.say(&e.to_string())?;
                Ok(None)
            }
        }
    }

    /// Ask for a task number in `1..=count` and return the 0-based position.
    pub fn task_number(&mut self, count: usize) -> Result<usize, PromptError> {
        let question = format!("Input the task number (1-{count}):");
        self.ask_until(&question, true, |s| parse_task_number(s, count))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
