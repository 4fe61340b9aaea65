//! Spring arrangement counting.
//!
//! Each input line describes a row of springs, some known to work (`.`), some
//! known to be broken (`#`) and some unknown (`?`), followed by the lengths of
//! the contiguous broken runs the row must contain, left to right:
//!
//! ```text
//! ?###???????? 3,2,1
//! ```
//!
//! This crate counts how many ways the unknown cells can be filled so that the
//! runs come out exactly as listed, and sums that over a file, either for the
//! rows as given or for rows unfolded five times.
//!
//! ## Core idea
//! 1. Parse a line into a [`Record`] and a [`RunSpec`].
//! 2. Pick an [`ArrangementCounter`] strategy.
//! 3. Let [`Session`] drive it over every line, one fresh working set per line.
//!
//! ## Quick start
//! ```
//! use spring_arrangements::{counters::memo::MemoCounter, parse_line, ArrangementCounter};
//!
//! let (record, runs) = parse_line("?###???????? 3,2,1").unwrap();
//! assert_eq!(MemoCounter.count(&record, &runs), Ok(10));
//! ```
//!
//! ## Strategies
//! The `counters` module contains:
//! - memoized top-down recursion over `(position, runs closed, open run)`
//! - the equivalent bottom-up layered table
//! - an exhaustive reference for small records

pub mod builder;
pub mod counters;
pub mod error;
pub mod record;
pub mod session;
pub mod traits;

pub use crate::builder::SessionBuilder;
pub use crate::error::{CountOverflow, Error, LineError, ParseError};
pub use crate::record::{expand, parse_line, unfold, Cell, Record, RunSpec};
pub use crate::session::{Report, Session, Variant};
pub use crate::traits::{ArrangementCounter, Count};
