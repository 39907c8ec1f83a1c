//! # Console
//!
//! Line-based prompting over any reader/writer pair.
//!
//! ## Ask Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ask("Entrez la quantité : ", parse_quantity)                           │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  print prompt ──► read bytes ──► EOF? ──► Err(InputClosed)              │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                  parse(line) ──► Err(e) ──► print e, ask again          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                     Ok(value)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests can script a whole session from a
//! byte slice and inspect everything printed.

use std::fmt::Display;
use std::io::{BufRead, Write};

use caddie_core::validation::ValidationResult;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// A prompt/answer channel.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Prints `prompt` and re-asks until `parse` accepts the answer.
    ///
    /// Each rejection prints the error's message on its own line. Only a
    /// closed input or an I/O failure ends the loop without a value.
    pub fn ask<T, F>(&mut self, prompt: &str, mut parse: F) -> CliResult<T>
    where
        F: FnMut(&str) -> ValidationResult<T>,
    {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let mut raw = Vec::new();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                return Err(CliError::InputClosed {
                    prompt: prompt.to_string(),
                });
            }
            // Undecodable bytes become U+FFFD, which every parser rejects.
            let line = String::from_utf8_lossy(&raw);

            match parse(&*line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(field = err.field(), input = line.trim(), "input rejected");
                    writeln!(self.writer, "{err}")?;
                }
            }
        }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> CliResult<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Prints a blank line.
    pub fn blank(&mut self) -> CliResult<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Gives back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
