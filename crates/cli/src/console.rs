//! Line-oriented prompting over any `BufRead` / `Write` pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line.
    pub fn say(&mut self, line: impl AsRef<str>) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line.as_ref()).context("failed to write to console")
    }

    /// Show `prompt` (no newline) and read one line without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}").context("failed to write to console")?;
        self.output.flush().context("failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Re-prompt until the line parses as `T` and satisfies `accept`, printing
    /// `invalid` after each rejected attempt.
    ///
    /// Returns `None` once input is exhausted.
    pub fn ask_until<T: FromStr>(
        &mut self,
        prompt: &str,
        invalid: &str,
        accept: impl Fn(&T) -> bool,
    ) -> anyhow::Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => {
                    tracing::debug!(input = %line, "rejected console input");
                    self.say(invalid)?;
                }
            }
        }
    }
}
