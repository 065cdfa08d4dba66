use std::io::{self, BufRead, IsTerminal, Write};

use inquire::Text;

use crate::error::AppError;

/// Source of line-oriented answers to prompts
pub trait Prompter {
    /// Shows `message` and returns the raw answer, untrimmed
    fn ask(&mut self, message: &str) -> Result<String, AppError>;
}

/// Reads answers from standard input
///
/// Uses `inquire` when stdin is a terminal, plain line reads when it is piped or redirected.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> Result<String, AppError> {
        if io::stdin().is_terminal() {
            return Ok(Text::new(message).prompt()?);
        }

        let mut stdout = io::stdout();
        write!(stdout, "{} ", message)?;
        stdout.flush()?;
        read_answer(&mut io::stdin().lock())
    }
}

/// Reads one line, dropping only the line terminator
fn read_answer<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Replays canned answers and records every prompt shown
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> Result<String, AppError> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted answers exhausted",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn answers_are_read_line_by_line() {
        let mut input = Cursor::new("Jane Doe\n5551234567\r\nlast");

        assert_eq!(read_answer(&mut input).unwrap(), "Jane Doe");
        assert_eq!(read_answer(&mut input).unwrap(), "5551234567");
        assert_eq!(read_answer(&mut input).unwrap(), "last");
    }

    #[test]
    fn surrounding_whitespace_is_kept() {
        let mut input = Cursor::new(" y \n\n");

        assert_eq!(read_answer(&mut input).unwrap(), " y ");
        assert_eq!(read_answer(&mut input).unwrap(), "");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = Cursor::new("");

        match read_answer(&mut input) {
            Err(AppError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
