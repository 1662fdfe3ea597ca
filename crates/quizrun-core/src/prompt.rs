//! Interactive Y/N prompting over any reader/writer pair.

use std::io::{BufRead, Write};

use crate::error::QuizError;
use crate::model::{Answer, Question};
use crate::traits::AnswerSource;

/// Shown after input that is not a recognized Y/N token.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Please only enter Y or N.";

/// Asks questions on a writer and reads answers from a reader, re-prompting
/// until a recognized answer arrives.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Ask a free-standing yes/no question (e.g. a confirmation).
    pub fn confirm(&mut self, prompt: &str) -> Result<Answer, QuizError> {
        self.ask_text(0, prompt)
    }

    /// Consume the prompter and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask_text(&mut self, position: usize, prompt: &str) -> Result<Answer, QuizError> {
        write!(self.output, "{prompt} (Y/N): ")?;
        self.output.flush()?;

        loop {
            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                writeln!(self.output)?;
                return Err(QuizError::InputClosed(position));
            }
            // Undecodable bytes become an ordinary unrecognized answer.
            match String::from_utf8_lossy(&self.line).parse::<Answer>() {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    tracing::debug!("rejected answer for question {position}: {e}");
                    writeln!(self.output, "{INVALID_INPUT_MESSAGE}")?;
                    self.output.flush()?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsolePrompter<R, W> {
    fn ask(&mut self, position: usize, question: &Question) -> Result<Answer, QuizError> {
        self.ask_text(position, question.text())
    }
}
