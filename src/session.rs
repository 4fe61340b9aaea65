//! Session driver.
//!
//! A [`Session`] turns input lines into totals. Each line is parsed, unfolded
//! if the [`Variant`] asks for it, and handed to the configured
//! [`ArrangementCounter`], which owns its working storage for that line only.
//! The first malformed line aborts the run; no partial total is returned.
//!
//! The session is generic over the counting strategy.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::counters::Strategy;
use crate::error::{Error, LineError};
use crate::record::{parse_line, unfold, DEFAULT_UNFOLD_COPIES};
use crate::traits::{ArrangementCounter, Count};

/// Which form of each line is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Record and runs as given.
    Folded,
    /// Record and runs repeated, records joined by an unknown cell.
    Unfolded,
}

/// Counting session for a given strategy `C`.
///
/// Typical usage:
/// ```
/// use spring_arrangements::{Session, Variant};
///
/// let session = Session::default();
/// let input = "???.### 1,1,3\n.??..??...?##. 1,1,3\n";
/// assert_eq!(session.run(input.lines(), Variant::Folded).unwrap(), 5);
/// ```
pub struct Session<C: ArrangementCounter> {
    counter: C,
    copies: usize,
}

impl Default for Session<Strategy> {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl<C: ArrangementCounter> Session<C> {
    /// Create a session unfolding five times.
    pub fn new(counter: C) -> Self {
        Self::with_copies(counter, DEFAULT_UNFOLD_COPIES)
    }

    /// Create a session with an explicit unfold factor.
    ///
    /// # Panics
    /// Panics if `copies == 0`.
    pub fn with_copies(counter: C, copies: usize) -> Self {
        assert!(copies > 0, "copies must be positive");
        Self { counter, copies }
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Count a single `<record> <runs>` line.
    pub fn count_line(&self, line: &str, variant: Variant) -> Result<Count, LineError> {
        let (record, runs) = parse_line(line)?;
        let count = match variant {
            Variant::Folded => self.counter.count(&record, &runs)?,
            Variant::Unfolded => {
                let (record, runs) = unfold(&record, &runs, self.copies);
                self.counter.count(&record, &runs)?
            }
        };
        Ok(count)
    }

    /// Sum of per-line counts. Every line, blank ones included, must parse.
    pub fn run<'a, I>(&self, lines: I, variant: Variant) -> Result<Count, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("session_run", ?variant, copies = self.copies);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut total: Count = 0;
        for (idx, line) in lines.into_iter().enumerate() {
            let count = self
                .count_line(line, variant)
                .map_err(|err| Error::at_line(idx + 1, err))?;
            #[cfg(feature = "tracing")]
            tracing::trace!(line = idx + 1, count, "counted line");
            total = total
                .checked_add(count)
                .ok_or(Error::Overflow { line: idx + 1 })?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(total, "session finished");
        Ok(total)
    }

    /// Read `path` and [`run`](Self::run) over its lines.
    pub fn run_file(&self, path: &Path, variant: Variant) -> Result<Count, Error> {
        let contents = read(path)?;
        self.run(contents.lines(), variant)
    }

    /// Both variants over both files. Fails before producing anything if
    /// either file is missing or malformed.
    pub fn report(&self, example: &Path, input: &Path) -> Result<Report, Error> {
        let example_text = read(example)?;
        let input_text = read(input)?;
        Ok(Report {
            example_folded: self.run(example_text.lines(), Variant::Folded)?,
            input_folded: self.run(input_text.lines(), Variant::Folded)?,
            example_unfolded: self.run(example_text.lines(), Variant::Unfolded)?,
            input_unfolded: self.run(input_text.lines(), Variant::Unfolded)?,
        })
    }
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// The four totals, printed one per line in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub example_folded: Count,
    pub input_folded: Count,
    pub example_unfolded: Count,
    pub input_unfolded: Count,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.example_folded)?;
        writeln!(f, "{}", self.input_folded)?;
        writeln!(f, "{}", self.example_unfolded)?;
        write!(f, "{}", self.input_unfolded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::memo::MemoCounter;
    use crate::error::ParseError;

    const EXAMPLE: &str = "???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1";

    #[test]
    fn example_totals() {
        let session = Session::new(MemoCounter);
        assert_eq!(session.run(EXAMPLE.lines(), Variant::Folded).unwrap(), 21);
        assert_eq!(
            session.run(EXAMPLE.lines(), Variant::Unfolded).unwrap(),
            525152
        );
    }

    #[test]
    fn single_copy_unfold_matches_folded() {
        let session = Session::with_copies(MemoCounter, 1);
        assert_eq!(session.run(EXAMPLE.lines(), Variant::Unfolded).unwrap(), 21);
    }

    #[test]
    fn blank_line_aborts_the_run() {
        let session = Session::default();
        let input = "???.### 1,1,3\n   \n?###???????? 3,2,1\n";
        match session.run(input.lines(), Variant::Folded) {
            Err(Error::Parse { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, ParseError::FieldCount { found: 0 });
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        let session = Session::default();
        let input = "???.### 1,1,3\n";
        assert_eq!(session.run(input.lines(), Variant::Folded).unwrap(), 1);
    }

    #[test]
    fn totals_past_u64_are_exact() {
        let session = Session::new(MemoCounter);
        let input = "???????????????????? 1,1,1,1,1,1,1";
        assert_eq!(
            session.run(input.lines(), Variant::Unfolded).unwrap(),
            112_186_277_816_662_845_432
        );
    }

    #[test]
    fn overflowing_line_aborts_with_line_number() {
        let wide = format!("{} {}", "?".repeat(39), ["1"; 10].join(","));
        let input = format!("???.### 1,1,3\n{wide}\n");
        for session in [Session::new(Strategy::Memo), Session::new(Strategy::Table)] {
            match session.run(input.lines(), Variant::Unfolded) {
                Err(Error::Overflow { line }) => assert_eq!(line, 2),
                other => panic!("expected overflow, got {other:?}"),
            }
        }
    }

    #[test]
    fn overflowing_total_aborts_with_line_number() {
        // Each line fits on its own; the sum of two does not.
        struct Huge;
        impl ArrangementCounter for Huge {
            fn count(
                &self,
                _record: &crate::record::Record,
                _runs: &crate::record::RunSpec,
            ) -> Result<Count, crate::error::CountOverflow> {
                Ok(Count::MAX / 2 + 1)
            }
        }
        let session = Session::new(Huge);
        match session.run("? 1\n? 1\n".lines(), Variant::Folded) {
            Err(Error::Overflow { line }) => assert_eq!(line, 2),
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn traced_run_matches_untraced_total() {
        let subscriber = tracing::subscriber::NoSubscriber::default();
        let total = tracing::subscriber::with_default(subscriber, || {
            Session::default().run(EXAMPLE.lines(), Variant::Unfolded)
        });
        assert_eq!(total.unwrap(), 525152);
    }

    #[test]
    fn malformed_line_aborts_with_line_number() {
        let session = Session::default();
        let input = "???.### 1,1,3\n???.###\n?###???????? 3,2,1";
        match session.run(input.lines(), Variant::Folded) {
            Err(Error::Parse { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, ParseError::FieldCount { found: 1 });
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn report_prints_four_lines() {
        let report = Report {
            example_folded: 21,
            input_folded: 7,
            example_unfolded: 525152,
            input_unfolded: 9,
        };
        assert_eq!(report.to_string(), "21\n7\n525152\n9");
    }

    #[test]
    #[should_panic]
    fn zero_copies_panics() {
        let _ = Session::with_copies(MemoCounter, 0);
    }
}
