//! Classify integers by the fizzbuzz rule.
//!
//! The core is a single pure function, [`classify`]. Around it sit the pieces a line oriented
//! tool needs: [`parse::parse`] for textual input, a [`Filter`](filter::Filter) that streams a
//! reader into a writer, and [`range`] for the classic "one to a hundred" listing.
//!
//! ```
//! assert_eq!(fizz_buzz::classify(9), "Fizz");
//! assert_eq!(fizz_buzz::classify(10), "Buzz");
//! assert_eq!(fizz_buzz::classify(30), "FizzBuzz");
//! assert_eq!(fizz_buzz::classify(-7), "-7");
//! ```
pub mod classify;
pub mod filter;
pub mod parse;

pub use classify::{classify, range, Classification, Record};
pub use parse::InvalidInput;
