//! Error types for parsing records and driving a counting session.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// A single input line could not be turned into a `(Record, RunSpec)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected `<record> <runs>`, found {found} field(s)")]
    FieldCount { found: usize },
    #[error("invalid cell symbol {0:?}")]
    InvalidSymbol(char),
    #[error("invalid run length {token:?}")]
    InvalidRun {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// Zero is a valid integer but not a run: every run holds at least one
    /// broken cell, so a zero target could never be matched.
    #[error("run lengths must be positive")]
    ZeroRun,
}

/// A completion count did not fit in [`Count`](crate::traits::Count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arrangement count overflowed")]
pub struct CountOverflow;

/// Why a single line could not be counted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Overflow(#[from] CountOverflow),
}

/// Failure of a whole session run. The first error aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number within the input.
        line: usize,
        #[source]
        source: ParseError,
    },
    /// A line's count, or the running total, overflowed.
    #[error("line {line}: arrangement count overflowed")]
    Overflow { line: usize },
}

impl Error {
    pub(crate) fn at_line(line: usize, err: LineError) -> Self {
        match err {
            LineError::Parse(source) => Error::Parse { line, source },
            LineError::Overflow(CountOverflow) => Error::Overflow { line },
        }
    }
}
