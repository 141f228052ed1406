//! Terminal seam for the two user-facing stages.
//!
//! `main` constructs a `Console` over locked stdin/stdout; tests run the
//! same stages over in-memory cursors. All reads trim the trailing newline.

use std::io::{BufRead, Write};

use crate::errors::CoachError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints a line to the user.
    pub fn say(&mut self, text: &str) -> Result<(), CoachError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints a prompt and reads one line, trimmed.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, CoachError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Consumes the console, returning the output sink. Used by tests to
    /// inspect what was printed.
    #[allow(dead_code)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads lines until a blank line or end of input, joined with newlines.
    /// The blank line is the turn-termination signal and is not included.
    pub fn read_until_blank(&mut self) -> Result<String, CoachError> {
        let mut lines: Vec<String> = Vec::new();
        loop {
            let mut line = String::new();
            let read = self.input.read_line(&mut line)?;
            let trimmed = line.trim_end_matches(['\n', '\r']);
            if read == 0 || trimmed.trim().is_empty() {
                break;
            }
            lines.push(trimmed.to_string());
        }
        Ok(lines.join("\n").trim().to_string())
    }
}
