//! Counting strategies implementing [`ArrangementCounter`](crate::traits::ArrangementCounter).
//!
//! - [`memo`]  : top-down recursion with a per-instance memo table.
//! - [`table`] : bottom-up layered frontiers, no recursion.
//! - [`brute`] : exhaustive enumeration, for small inputs and tests.

pub mod brute;
pub mod memo;
pub mod table;

use crate::error::CountOverflow;
use crate::record::{Record, RunSpec};
use crate::traits::{ArrangementCounter, Count};

/// Strategy chosen at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Memo,
    Table,
}

impl ArrangementCounter for Strategy {
    fn count(&self, record: &Record, runs: &RunSpec) -> Result<Count, CountOverflow> {
        match self {
            Strategy::Memo => memo::MemoCounter.count(record, runs),
            Strategy::Table => table::TableCounter.count(record, runs),
        }
    }
}
