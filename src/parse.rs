//! Turning a line of text into an integer to classify.
use core::fmt;
use core::num::IntErrorKind;

/// Input outside of the domain of the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// Nothing but whitespace.
    Empty,
    /// Not a decimal integer, e.g. a fraction or a word.
    NotAnInteger,
    /// A decimal integer that does not fit into an `i64`.
    OutOfRange,
    /// The line was not valid UTF-8.
    Encoding,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidInput::Empty => "empty line",
            InvalidInput::NotAnInteger => "not an integer",
            InvalidInput::OutOfRange => "integer out of range",
            InvalidInput::Encoding => "line is not valid utf-8",
        })
    }
}

impl std::error::Error for InvalidInput {}

/// Parse one line, ignoring surrounding whitespace.
pub fn parse(line: &str) -> Result<i64, InvalidInput> {
    let line = line.trim();

    if line.is_empty() {
        return Err(InvalidInput::Empty);
    }

    line.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InvalidInput::OutOfRange,
        _ => InvalidInput::NotAnInteger,
    })
}
