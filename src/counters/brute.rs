//! Exhaustive reference counter.
//!
//! Tries every assignment of the unknown cells and checks the literal run
//! scan against the target. Exponential in the number of unknowns; only
//! meant for small instances and for cross-checking the other strategies.

use crate::record::{Cell, Record, RunSpec};
use crate::error::CountOverflow;
use crate::traits::{ArrangementCounter, Count};

/// Largest number of unknown cells accepted.
pub const MAX_UNKNOWNS: usize = 63;

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl ArrangementCounter for BruteForce {
    /// # Panics
    /// Panics if the record has more than [`MAX_UNKNOWNS`] unknown cells.
    fn count(&self, record: &Record, runs: &RunSpec) -> Result<Count, CountOverflow> {
        let unknowns: Vec<usize> = record
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Cell::Unknown)
            .map(|(i, _)| i)
            .collect();
        assert!(
            unknowns.len() <= MAX_UNKNOWNS,
            "brute force refuses {} unknown cells",
            unknowns.len()
        );

        let mut cells = record.cells().to_vec();
        let mut total: Count = 0;
        for mask in 0..(1u64 << unknowns.len()) {
            for (bit, &i) in unknowns.iter().enumerate() {
                cells[i] = if (mask >> bit) & 1 == 1 {
                    Cell::Broken
                } else {
                    Cell::Working
                };
            }
            let candidate = Record::new(cells.clone());
            if candidate.run_lengths().as_deref() == Some(runs.as_slice()) {
                total += 1;
            }
        }
        Ok(total)
    }
}
