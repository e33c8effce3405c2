use core::fmt;
use core::ops::RangeInclusive;

/// The fizzbuzz class of an integer.
///
/// The `Display` representation is the classic output string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Fizz,
    Buzz,
    FizzBuzz,
    /// Divisible by neither 3 nor 5.
    Number(i64),
}

/// An integer together with its classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Record {
    pub n: i64,
    pub value: Classification,
}

impl Classification {
    /// Classify `n`, checking both divisors before either one.
    ///
    /// Every `i64` is accepted. Zero is divisible by everything, negative numbers classify like
    /// their absolute value.
    pub fn of(n: i64) -> Self {
        // `%` by a positive constant can not overflow, not even for `i64::MIN`.
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => Classification::FizzBuzz,
            (true, false) => Classification::Fizz,
            (false, true) => Classification::Buzz,
            (false, false) => Classification::Number(n),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Classification::Number(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Fizz => f.write_str("Fizz"),
            Classification::Buzz => f.write_str("Buzz"),
            Classification::FizzBuzz => f.write_str("FizzBuzz"),
            Classification::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for Classification {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<i64> for Record {
    fn from(n: i64) -> Self {
        Record {
            n,
            value: Classification::of(n),
        }
    }
}

/// Map an integer to `"Fizz"`, `"Buzz"`, `"FizzBuzz"` or its own decimal representation.
pub fn classify(n: i64) -> String {
    Classification::of(n).to_string()
}

/// Records for all of `start..=end`, ascending.
///
/// Empty when `start > end`.
pub fn range(start: i64, end: i64) -> Range {
    Range {
        inner: start..=end,
    }
}

/// Iterator returned by [`range`].
#[derive(Clone, Debug)]
pub struct Range {
    inner: RangeInclusive<i64>,
}

impl Iterator for Range {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        self.inner.next().map(Record::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Range {
    fn next_back(&mut self) -> Option<Record> {
        self.inner.next_back().map(Record::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_break_prefers_both() {
        assert_eq!(Classification::of(15), Classification::FizzBuzz);
        assert_eq!(Classification::of(45), Classification::FizzBuzz);
        assert_eq!(Classification::of(0), Classification::FizzBuzz);
    }

    #[test]
    fn extremes() {
        // i64::MAX = 2^63 - 1 is divisible by 7 and 73 but not by 3 or 5.
        assert_eq!(Classification::of(i64::MAX), Classification::Number(i64::MAX));
        // i64::MIN = -2^63 has no odd divisors.
        assert_eq!(classify(i64::MIN), i64::MIN.to_string());
    }

    #[test]
    fn range_bounds() {
        let all: Vec<_> = range(14, 16).map(|r| r.value).collect();
        assert_eq!(
            all,
            [
                Classification::Number(14),
                Classification::FizzBuzz,
                Classification::Number(16),
            ]
        );

        assert_eq!(range(2, 1).count(), 0);
        assert_eq!(range(i64::MAX, i64::MAX).count(), 1);
        assert_eq!(range(-5, 5).rev().next().map(|r| r.n), Some(5));
    }
}
