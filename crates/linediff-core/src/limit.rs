//! Input size guard for callers
//!
//! The engine itself accepts any input. Building the LCS table costs
//! O(m·n), so callers that take untrusted or very large input check it
//! here first and decide what to do with the error.

use crate::lines::split_lines;
use std::fmt;
use thiserror::Error;

/// Which input a limit error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LimitError {
    #[error("{side} input has {lines} lines, limit is {max_lines}")]
    TooManyLines {
        side: Side,
        lines: usize,
        max_lines: usize,
    },
    #[error("comparison needs {cells} table cells, limit is {max_cells}")]
    TooManyCells { cells: usize, max_cells: usize },
}

/// Line count limit per side, and a bound on the size of the LCS table the
/// pair would need. A limit of zero disables that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLimit {
    pub max_lines: usize,
    pub max_cells: usize,
}

impl LineLimit {
    pub const DEFAULT_MAX_LINES: usize = 10_000;
    /// 16M cells, 128 MiB of table on 64-bit targets
    pub const DEFAULT_MAX_CELLS: usize = 16_000_000;

    pub fn new(max_lines: usize) -> Self {
        Self {
            max_lines,
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub fn unlimited() -> Self {
        Self {
            max_lines: 0,
            max_cells: 0,
        }
    }

    pub fn check(&self, old: &str, new: &str) -> Result<(), LimitError> {
        let old_lines = split_lines(old).len();
        let new_lines = split_lines(new).len();
        self.check_side(Side::Old, old_lines)?;
        self.check_side(Side::New, new_lines)?;
        self.check_cells(old_lines, new_lines)
    }

    fn check_side(&self, side: Side, lines: usize) -> Result<(), LimitError> {
        if self.max_lines != 0 && lines > self.max_lines {
            return Err(LimitError::TooManyLines {
                side,
                lines,
                max_lines: self.max_lines,
            });
        }
        Ok(())
    }

    fn check_cells(&self, old_lines: usize, new_lines: usize) -> Result<(), LimitError> {
        if self.max_cells == 0 {
            return Ok(());
        }
        // same shape as LcsMatrix::build
        let cells = (old_lines + 1).saturating_mul(new_lines + 1);
        if cells > self.max_cells {
            return Err(LimitError::TooManyCells {
                cells,
                max_cells: self.max_cells,
            });
        }
        Ok(())
    }
}

impl Default for LineLimit {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LINES)
    }
}
