//! Line-oriented questions to the user.
//!
//! The create and no-match flows need answers from a person. They talk to a
//! [`Prompt`] rather than to stdin/stdout directly, so tests can script the
//! conversation.

use crate::error::{DefsError, Result};
use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Shows `question` and reads one line of input with the line ending
    /// removed. Returns `None` when the input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Shows a line that expects no answer.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Like [`Prompt::ask`], but end of input is an error.
    fn ask_required(&mut self, question: &str) -> Result<String> {
        self.ask(question)?.ok_or(DefsError::InputClosed)
    }
}

/// Prompts on any reader/writer pair. [`ConsolePrompt::stdio`] wires it to
/// the terminal.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", question).map_err(DefsError::Io)?;
        self.output.flush().map_err(DefsError::Io)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(DefsError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(DefsError::Io)
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Answers questions from a fixed script and records everything shown.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub questions: Vec<String>,
        pub said: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Self::default()
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<Option<String>> {
            self.questions.push(question.to_string());
            Ok(self.answers.pop_front())
        }

        fn say(&mut self, line: &str) -> Result<()> {
            self.said.push(line.to_string());
            Ok(())
        }
    }
}
