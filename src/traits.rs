//! Core trait for counting strategies.
//!
//! Every strategy answers the same question for a fixed instance: in how many
//! ways can the unknown cells of a [`Record`] be filled so that the literal
//! run-length sequence equals the [`RunSpec`]?
//!
//! Strategies differ only in how they explore the state space
//! `(position, runs closed, open run length)`. Any working storage (memo
//! tables, frontiers) must be created inside [`ArrangementCounter::count`] and
//! dropped before it returns, so no state is shared between instances.

use crate::error::CountOverflow;
use crate::record::{Record, RunSpec};

/// Completion count. Unfolded rows routinely pass `u64::MAX`.
pub type Count = u128;

/// Trait for a strategy counting valid completions of one instance.
pub trait ArrangementCounter {
    /// Number of completions of `record` whose broken runs are exactly `runs`.
    ///
    /// Fails with [`CountOverflow`] rather than wrapping if the count does not
    /// fit in [`Count`].
    fn count(&self, record: &Record, runs: &RunSpec) -> Result<Count, CountOverflow>;
}
