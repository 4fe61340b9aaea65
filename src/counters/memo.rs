//! Memoized recursive counting.
//!
//! The recursion walks the record left to right. A [`SearchState`] says which
//! cells are already decided (`pos`), how many runs are closed (`run_idx`) and
//! how long the run currently being built is (`open_len`). Each state's count
//! is cached in a [`MemoTable`] that belongs to exactly one instance; the same
//! triple means something different under another `(record, runs)` pair.
//!
//! Recursion depth is bounded by the record length, since `pos` grows by one
//! on every call.

use rustc_hash::FxHashMap;

use crate::error::CountOverflow;
use crate::record::{Cell, Record, RunSpec};
use crate::traits::{ArrangementCounter, Count};

/// Memoization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SearchState {
    /// Cells before this position are decided; in `0..=record.len()`.
    pub pos: usize,
    /// Runs already closed; in `0..=runs.len()`.
    pub run_idx: usize,
    /// Length of the open run, 0 if none.
    pub open_len: usize,
}

impl SearchState {
    pub fn new(pos: usize, run_idx: usize, open_len: usize) -> Self {
        Self {
            pos,
            run_idx,
            open_len,
        }
    }
}

/// Per-instance cache from [`SearchState`] to completion count.
#[derive(Debug, Default)]
pub struct MemoTable {
    counts: FxHashMap<SearchState, Count>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, state: &SearchState) -> Option<Count> {
        self.counts.get(state).copied()
    }

    /// Number of states evaluated so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn states(&self) -> impl Iterator<Item = &SearchState> + '_ {
        self.counts.keys()
    }
}

/// Number of ways to complete `record[state.pos..]` given `state`.
///
/// `memo` must be fresh for this `(record, runs)` pair or hold only entries
/// produced by earlier calls on the same pair.
pub fn count_from(
    record: &Record,
    runs: &RunSpec,
    state: SearchState,
    memo: &mut MemoTable,
) -> Result<Count, CountOverflow> {
    if let Some(hit) = memo.get(&state) {
        return Ok(hit);
    }

    let cells = record.cells();
    let targets = runs.as_slice();
    let SearchState {
        pos,
        run_idx,
        open_len,
    } = state;

    let total = if pos == cells.len() {
        let all_closed = run_idx == targets.len() && open_len == 0;
        // End of record closes the last run if it has the right length.
        let last_closes = run_idx + 1 == targets.len() && open_len == targets[run_idx];
        Count::from(all_closed || last_closes)
    } else {
        let cell = cells[pos];
        let mut working = 0;
        let mut broken = 0;

        if cell.admits(Cell::Working) {
            if open_len == 0 {
                working = count_from(record, runs, SearchState::new(pos + 1, run_idx, 0), memo)?;
            } else if targets.get(run_idx) == Some(&open_len) {
                working = count_from(
                    record,
                    runs,
                    SearchState::new(pos + 1, run_idx + 1, 0),
                    memo,
                )?;
            }
        }

        if cell.admits(Cell::Broken) {
            // Over-long runs die when they try to close.
            broken = count_from(
                record,
                runs,
                SearchState::new(pos + 1, run_idx, open_len + 1),
                memo,
            )?;
        }

        working.checked_add(broken).ok_or(CountOverflow)?
    };

    memo.counts.insert(state, total);
    Ok(total)
}

/// Top-down strategy: one fresh [`MemoTable`] per instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoCounter;

impl MemoCounter {
    /// Count and hand back the populated table, for inspection.
    pub fn count_with_table(
        &self,
        record: &Record,
        runs: &RunSpec,
    ) -> Result<(Count, MemoTable), CountOverflow> {
        let mut memo = MemoTable::new();
        let count = count_from(record, runs, SearchState::default(), &mut memo)?;
        Ok((count, memo))
    }
}

impl ArrangementCounter for MemoCounter {
    fn count(&self, record: &Record, runs: &RunSpec) -> Result<Count, CountOverflow> {
        self.count_with_table(record, runs).map(|(count, _)| count)
    }
}
