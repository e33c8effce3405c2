//! Classify a stream of lines, one integer per line.
use core::fmt;
use std::io::{self, BufRead, Write};

use crate::classify::Record;
use crate::parse::{self, InvalidInput};

/// What to do with a line that is not an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// Write an empty result for the line and carry on.
    #[default]
    Lenient,
    /// Stop at the line with an error.
    Strict,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// The bare classification, e.g. `Fizz`.
    #[default]
    Text,
    /// A json object per line, `{"n":3,"value":"Fizz"}`. Rejected lines are `null`.
    #[cfg(feature = "json")]
    Json,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Filter {
    pub policy: Policy,
    pub format: Format,
}

/// Counters of one filter run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// All lines read, including rejected ones.
    pub lines: u64,
    /// Lines that were not an integer, only non-zero in lenient mode.
    pub rejected: u64,
}

#[derive(Debug)]
pub enum FilterError {
    Io(io::Error),
    /// A rejected line in strict mode. Lines are counted from 1.
    Invalid { line: u64, err: InvalidInput },
}

impl Filter {
    /// Read `input` to its end, writing one result line per input line to `output`.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<Summary, FilterError> {
        let mut summary = Summary::default();

        for line in input.lines() {
            summary.lines += 1;

            let num = match line {
                Ok(line) => parse::parse(&line),
                // `lines` already consumed the offending line, this is recoverable.
                Err(err) if err.kind() == io::ErrorKind::InvalidData => Err(InvalidInput::Encoding),
                Err(err) => return Err(FilterError::Io(err)),
            };

            match num {
                Ok(num) => self.write_record(&mut output, Record::from(num))?,
                Err(err) => {
                    if let Policy::Strict = self.policy {
                        return Err(FilterError::Invalid {
                            line: summary.lines,
                            err,
                        });
                    }

                    log::debug!("Skipping line {}: {}", summary.lines, err);
                    summary.rejected += 1;
                    self.write_rejected(&mut output)?;
                }
            }
        }

        output.flush()?;
        Ok(summary)
    }

    /// Write a single record in the configured format, terminated by a newline.
    pub fn write_record<W: Write>(&self, output: &mut W, record: Record) -> io::Result<()> {
        match self.format {
            Format::Text => writeln!(output, "{}", record.value),
            #[cfg(feature = "json")]
            Format::Json => {
                serde_json::to_writer(&mut *output, &record)?;
                writeln!(output)
            }
        }
    }

    fn write_rejected<W: Write>(&self, output: &mut W) -> io::Result<()> {
        match self.format {
            Format::Text => writeln!(output),
            #[cfg(feature = "json")]
            Format::Json => writeln!(output, "null"),
        }
    }
}

impl From<io::Error> for FilterError {
    fn from(err: io::Error) -> Self {
        FilterError::Io(err)
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::Io(err) => write!(f, "{}", err),
            FilterError::Invalid { line, err } => write!(f, "line {}: {}", line, err),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Io(err) => Some(err),
            FilterError::Invalid { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_encoding_is_a_rejected_line() {
        let input: &[u8] = b"3\n\xff\xfe\n5\n";
        let mut out = Vec::new();

        let summary = Filter::default().run(input, &mut out).unwrap();
        assert_eq!(summary, Summary { lines: 3, rejected: 1 });
        assert_eq!(out, b"Fizz\n\nBuzz\n");
    }
}
