//! Field acquisition
//!
//! One generic prompt, parse and validate loop shared by every collected
//! field, plus the error type for the whole intake layer. The display string
//! of a recoverable error doubles as the re-prompt diagnostic shown to the
//! user; the structured fields carry the detail for logs.

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

/// Intake error types
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Token is not a number where one is required
    #[error("Invalid input. Please enter a number.")]
    Parse { field: &'static str, input: String },

    /// Parsed value is outside its field's closed bound
    #[error("{diagnostic}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        diagnostic: &'static str,
    },

    /// Sex token matches neither recognized category
    #[error("Please enter 'male' or 'female'.")]
    UnrecognizedSex { token: String },

    /// Activity selection outside the 1-5 menu
    #[error("Invalid number.")]
    UnknownActivityLevel { value: i64 },

    /// Input channel closed before the field was provided
    #[error("input ended before {field} was provided")]
    UnexpectedEof { field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntakeError {
    /// Whether the interactive loop can recover by re-prompting
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, IntakeError::UnexpectedEof { .. } | IntakeError::Io(_))
    }
}

/// Result type for intake operations
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Prompt for one field until the parser accepts a line.
///
/// Writes the prompt, reads a trimmed line and hands it to `parse`. A
/// recoverable rejection prints its diagnostic and prompts again; channel
/// errors (EOF, I/O) are returned to the caller.
pub fn prompt_until_valid<R, W, T, P>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &'static str,
    mut parse: P,
) -> IntakeResult<T>
where
    R: BufRead,
    W: Write,
    P: FnMut(&str) -> IntakeResult<T>,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let line = match read_trimmed_line(input)? {
            Some(line) => line,
            None => return Err(IntakeError::UnexpectedEof { field }),
        };

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_recoverable() => {
                tracing::debug!("rejected {} input '{}'", field, line);
                writeln!(output, "{}", err)?;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Parse a token into an integer field type
pub(crate) fn parse_field<T: FromStr>(field: &'static str, token: &str) -> IntakeResult<T> {
    token.parse::<T>().map_err(|_| IntakeError::Parse {
        field,
        input: token.to_string(),
    })
}

/// Read one line, trimmed; `None` when the channel is closed
pub(crate) fn read_trimmed_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
