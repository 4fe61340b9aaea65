//! Spring records and their run-length targets.
//!
//! A line of input such as `???.### 1,1,3` carries a [`Record`] (the cells,
//! some of them unknown) and a [`RunSpec`] (the lengths of the contiguous
//! broken runs, left to right). Both are immutable once parsed.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Number of copies used by the unfolded variant.
pub const DEFAULT_UNFOLD_COPIES: usize = 5;

/// One cell of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `.`
    Working,
    /// `#`
    Broken,
    /// `?`
    Unknown,
}

impl Cell {
    /// Whether `self` may be read as `concrete` (which must be known).
    #[inline]
    pub fn admits(self, concrete: Cell) -> bool {
        self == concrete || self == Cell::Unknown
    }

    fn symbol(self) -> char {
        match self {
            Cell::Working => '.',
            Cell::Broken => '#',
            Cell::Unknown => '?',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Cell::Working),
            '#' => Ok(Cell::Broken),
            '?' => Ok(Cell::Unknown),
            other => Err(ParseError::InvalidSymbol(other)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    cells: Vec<Cell>,
}

impl Record {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Unknown).count()
    }

    /// Literal run-length sequence of a fully known record.
    ///
    /// Returns `None` if any cell is still [`Cell::Unknown`].
    pub fn run_lengths(&self) -> Option<Vec<usize>> {
        let mut runs = Vec::new();
        let mut open = 0usize;
        for &cell in &self.cells {
            match cell {
                Cell::Broken => open += 1,
                Cell::Working => {
                    if open > 0 {
                        runs.push(open);
                        open = 0;
                    }
                }
                Cell::Unknown => return None,
            }
        }
        if open > 0 {
            runs.push(open);
        }
        Some(runs)
    }

    /// `copies` copies of this record joined by single unknown cells.
    pub fn unfold(&self, copies: usize) -> Record {
        let mut cells = Vec::with_capacity(copies * (self.len() + 1));
        for i in 0..copies {
            if i > 0 {
                cells.push(Cell::Unknown);
            }
            cells.extend_from_slice(&self.cells);
        }
        Record { cells }
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s.chars().map(Cell::try_from).collect::<Result<_, _>>()?;
        Ok(Record { cells })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cells.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Required lengths of the broken runs, in order. Every entry is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunSpec {
    runs: Vec<usize>,
}

impl RunSpec {
    /// # Panics
    /// Panics if any run length is zero.
    pub fn new(runs: Vec<usize>) -> Self {
        assert!(runs.iter().all(|&r| r > 0), "run lengths must be positive");
        Self { runs }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The sequence repeated `copies` times back to back.
    pub fn unfold(&self, copies: usize) -> RunSpec {
        RunSpec {
            runs: self.runs.repeat(copies),
        }
    }
}

impl FromStr for RunSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let runs = s
            .split(',')
            .map(|token| -> Result<usize, ParseError> {
                let len = token
                    .parse::<usize>()
                    .map_err(|source| ParseError::InvalidRun {
                        token: token.to_string(),
                        source,
                    })?;
                if len == 0 {
                    return Err(ParseError::ZeroRun);
                }
                Ok(len)
            })
            .collect::<Result<_, _>>()?;
        Ok(RunSpec { runs })
    }
}

impl fmt::Display for RunSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

/// Split `<record> <runs>` into its two typed halves.
pub fn parse_line(line: &str) -> Result<(Record, RunSpec), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[record, runs] = &fields[..] else {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    };
    Ok((record.parse()?, runs.parse()?))
}

/// Unfold both halves of an instance `copies` times.
pub fn unfold(record: &Record, runs: &RunSpec, copies: usize) -> (Record, RunSpec) {
    (record.unfold(copies), runs.unfold(copies))
}

/// The unfolded variant: five copies.
pub fn expand(record: &Record, runs: &RunSpec) -> (Record, RunSpec) {
    unfold(record, runs, DEFAULT_UNFOLD_COPIES)
}
