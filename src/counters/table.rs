//! Bottom-up layered counting.
//!
//! Layers are record positions `0..=n`. The frontier at layer `pos` holds the
//! completion count of every `(run_idx, open_len)` pair, i.e. the same values
//! the memoized recursion would compute for `(pos, run_idx, open_len)`. We
//! start from the terminal frontier at `pos = n` and step back to `pos = 0`,
//! keeping only two frontiers live. No recursion, so record length is not
//! limited by stack depth.

use crate::error::CountOverflow;
use crate::record::{Cell, Record, RunSpec};
use crate::traits::{ArrangementCounter, Count};

/// Counts for every `(run_idx, open_len)` at one layer.
///
/// `None` marks a count that overflowed. Most pairs are unreachable from the
/// start state, so an overflow only matters once it reaches `(0, 0)`.
#[derive(Clone, Debug)]
struct Frontier {
    /// `open_len` ranges over `0..width`.
    width: usize,
    counts: Vec<Option<Count>>, // length = (runs.len() + 1) * width
}

impl Frontier {
    fn zeroed(runs: usize, width: usize) -> Self {
        Self {
            width,
            counts: vec![Some(0); (runs + 1) * width],
        }
    }

    #[inline]
    fn get(&self, run_idx: usize, open_len: usize) -> Option<Count> {
        if open_len >= self.width {
            Some(0)
        } else {
            self.counts[run_idx * self.width + open_len]
        }
    }

    #[inline]
    fn set(&mut self, run_idx: usize, open_len: usize, value: Option<Count>) {
        self.counts[run_idx * self.width + open_len] = value;
    }
}

/// Bottom-up strategy over layered frontiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableCounter;

impl TableCounter {
    fn terminal_frontier(targets: &[usize], width: usize) -> Frontier {
        let mut f = Frontier::zeroed(targets.len(), width);
        f.set(targets.len(), 0, Some(1));
        if let Some(&last) = targets.last() {
            if last < width {
                f.set(targets.len() - 1, last, Some(1));
            }
        }
        f
    }

    /// Layer `pos` from layer `pos + 1`, where `cell = record[pos]`.
    fn step_back(cell: Cell, targets: &[usize], next: &Frontier, out: &mut Frontier) {
        for run_idx in 0..=targets.len() {
            for open_len in 0..next.width {
                let mut working = Some(0);
                if cell.admits(Cell::Working) {
                    if open_len == 0 {
                        working = next.get(run_idx, 0);
                    } else if targets.get(run_idx) == Some(&open_len) {
                        working = next.get(run_idx + 1, 0);
                    }
                }
                let broken = if cell.admits(Cell::Broken) {
                    next.get(run_idx, open_len + 1)
                } else {
                    Some(0)
                };
                let total = working.zip(broken).and_then(|(w, b)| w.checked_add(b));
                out.set(run_idx, open_len, total);
            }
        }
    }
}

impl ArrangementCounter for TableCounter {
    fn count(&self, record: &Record, runs: &RunSpec) -> Result<Count, CountOverflow> {
        let targets = runs.as_slice();
        let width = record.len() + 1;

        let mut next = Self::terminal_frontier(targets, width);
        let mut curr = Frontier::zeroed(targets.len(), width);
        for &cell in record.cells().iter().rev() {
            Self::step_back(cell, targets, &next, &mut curr);
            std::mem::swap(&mut next, &mut curr);
        }

        next.get(0, 0).ok_or(CountOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::memo::MemoCounter;
    use crate::record::{expand, parse_line};

    #[test]
    fn terminal_frontier_matches_base_case() {
        let f = TableCounter::terminal_frontier(&[1, 3], 4);
        assert_eq!(f.get(2, 0), Some(1));
        assert_eq!(f.get(1, 3), Some(1));
        assert_eq!(f.get(1, 2), Some(0));
        assert_eq!(f.get(0, 0), Some(0));
        assert_eq!(f.get(0, 9), Some(0));

        // Target longer than the record can never be pending at the end.
        let f = TableCounter::terminal_frontier(&[5], 3);
        assert_eq!(f.counts.iter().flatten().sum::<Count>(), 1);
    }

    #[test]
    fn agrees_with_memo_on_examples() {
        let lines = [
            "???.### 1,1,3",
            ".??..??...?##. 1,1,3",
            "?#?#?#?#?#?#?#? 1,3,1,6",
            "????.#...#... 4,1,1",
            "????.######..#####. 1,6,5",
            "?###???????? 3,2,1",
        ];
        for line in lines {
            let (record, runs) = parse_line(line).unwrap();
            assert_eq!(
                TableCounter.count(&record, &runs),
                MemoCounter.count(&record, &runs),
                "{line}"
            );
            let (record, runs) = expand(&record, &runs);
            assert_eq!(
                TableCounter.count(&record, &runs),
                MemoCounter.count(&record, &runs),
                "{line} unfolded"
            );
        }
    }

    #[test]
    fn empty_record() {
        let record: Record = "".parse().unwrap();
        assert_eq!(TableCounter.count(&record, &RunSpec::new(vec![])), Ok(1));
        assert_eq!(TableCounter.count(&record, &RunSpec::new(vec![1])), Ok(0));
    }

    #[test]
    fn wide_counts_past_u64() {
        let (record, runs) = parse_line("???????????????????? 1,1,1,1,1,1,1").unwrap();
        let (record, runs) = expand(&record, &runs);
        assert_eq!(
            TableCounter.count(&record, &runs),
            Ok(112_186_277_816_662_845_432)
        );
    }

    #[test]
    fn overflow_is_reported() {
        // C(150, 50) completions, well past u128.
        let line = format!("{} {}", "?".repeat(39), ["1"; 10].join(","));
        let (record, runs) = parse_line(&line).unwrap();
        let (record, runs) = expand(&record, &runs);
        assert_eq!(TableCounter.count(&record, &runs), Err(CountOverflow));
    }

    #[test]
    fn unreachable_pairs_may_overflow() {
        // 100 runs of 1 in 200 unknown cells: only C(101, 100) completions,
        // but pairs such as 50 runs closed at the first layer count
        // C(151, 50) and overflow.
        let record: Record = "?".repeat(200).parse().unwrap();
        let runs = RunSpec::new(vec![1; 100]);
        assert_eq!(TableCounter.count(&record, &runs), Ok(101));
        assert_eq!(MemoCounter.count(&record, &runs), Ok(101));
    }
}
