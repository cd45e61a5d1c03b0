//! Interactive capture of word sizes and grid rows
//!
//! Generic over the input and output streams so sessions can be scripted.

use std::io::{BufRead, Write};

use crate::analysis::sizes::WordSizes;
use crate::io::error::{Result, SolverError};

/// Prompt shown before reading word sizes
pub const SIZES_PROMPT: &str = "Word sizes > ";

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for comma separated word sizes until a valid list is entered
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal cannot be used
    pub fn word_sizes(&mut self) -> Result<WordSizes> {
        loop {
            let answer = self.ask(SIZES_PROMPT)?;
            match WordSizes::parse(&answer) {
                Ok(sizes) => return Ok(sizes),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Ask for `size` rows of exactly `size` characters each
    ///
    /// A row of the wrong length is rejected and asked for again. Spaces count
    /// as cells, so only the line terminator is stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal cannot be used
    pub fn grid_rows(&mut self, size: usize) -> Result<Vec<String>> {
        let mut rows = Vec::with_capacity(size);
        for index in 1..=size {
            let prompt = format!("Grid Row {index} > ");
            loop {
                let row = self.ask(&prompt)?;
                if row.chars().count() == size {
                    rows.push(row);
                    break;
                }
                writeln!(self.output, "Not enough letters - need {size} per row")?;
            }
        }
        Ok(rows)
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| SolverError::Console {
                operation: "read answer",
                source,
            })?;
        if read == 0 {
            return Err(SolverError::InputClosed {
                prompt: prompt.to_string(),
            });
        }

        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(answer.to_string())
    }
}
