//! Human bowler entering pin counts at a terminal.

use crate::games::bowling::{InputError, ThrowSource};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Reads pin counts and roster answers line by line, re-prompting on bad input.
///
/// Generic over the reader and writer so it can run on stdin/stdout or on
/// in-memory buffers.
pub struct ConsoleBowler<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleBowler<R, W> {
    /// Creates a console bowler over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one trimmed line. End of input is an error.
    fn read_line(&mut self) -> Result<String, InputError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::new("Input closed"));
        }
        Ok(line.trim().to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), InputError> {
        write!(self.output, "{}", text)?;
        Ok(())
    }
}

impl ConsoleBowler<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Creates a console bowler on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ThrowSource for ConsoleBowler<R, W> {
    #[instrument(skip(self))]
    fn request_pins_knocked_down(&mut self, pins_standing: u8) -> Result<u8, InputError> {
        self.write(&format!(
            "Pins knocked down (0 to {}): ",
            pins_standing
        ))?;
        loop {
            let line = self.read_line()?;
            match line.parse::<u8>() {
                Ok(pins) if pins <= pins_standing => {
                    debug!(pins, "Pins entered");
                    return Ok(pins);
                }
                _ => {
                    warn!(input = %line, pins_standing, "Rejected pin count");
                    self.write(&format!(
                        "Invalid input! Pins knocked down (0 to {}): ",
                        pins_standing
                    ))?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn request_player_count(&mut self) -> Result<usize, InputError> {
        loop {
            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(count) if count >= 1 => return Ok(count),
                _ => {
                    warn!(input = %line, "Rejected player count");
                    self.write("Invalid input. The player count must be at least 1: ")?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn request_player_name(&mut self, ordinal: usize) -> Result<String, InputError> {
        loop {
            let name = self.read_line()?;
            if !name.is_empty() {
                return Ok(name);
            }
            warn!(ordinal, "Rejected empty name");
            self.write(&format!(
                "The name of player {} must not be empty. Please enter a valid name: ",
                ordinal
            ))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bowler(input: &str) -> ConsoleBowler<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleBowler::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_valid_pins() {
        let mut b = bowler("7\n");
        assert_eq!(b.request_pins_knocked_down(10).unwrap(), 7);
    }

    #[test]
    fn test_reprompts_until_in_range() {
        let mut b = bowler("abc\n9\n-1\n3\n");
        assert_eq!(b.request_pins_knocked_down(4).unwrap(), 3);
        let written = String::from_utf8(b.output).unwrap();
        assert_eq!(written.matches("Invalid input!").count(), 3);
    }

    #[test]
    fn test_eof_is_error() {
        let mut b = bowler("");
        assert!(b.request_pins_knocked_down(10).is_err());
    }

    #[test]
    fn test_player_count_rejects_zero() {
        let mut b = bowler("0\ntwo\n2\n");
        assert_eq!(b.request_player_count().unwrap(), 2);
    }

    #[test]
    fn test_name_rejects_blank() {
        let mut b = bowler("\n   \n  Alice \n");
        assert_eq!(b.request_player_name(1).unwrap(), "Alice");
    }
}
