//! Longest common subsequence table and edit-script backtracking

/// Dynamic-programming table of LCS lengths between two line sequences.
///
/// `get(i, j)` is the LCS length of `old[..i]` and `new[..j]`. The table
/// holds `(old.len() + 1) * (new.len() + 1)` cells, so building it is
/// O(m·n) in both time and memory.
#[derive(Debug, Clone)]
pub struct LcsMatrix {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsMatrix {
    pub fn build(old: &[&str], new: &[&str]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { cols, cells }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the LCS of the full sequences
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows() - 1, self.cols - 1)
    }
}

/// Raw edit operation, referring to line positions in the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// old index, new index
    Equal(usize, usize),
    /// old index
    Delete(usize),
    /// new index
    Add(usize),
}

/// Walk the table from the bottom-right corner and return the edit script
/// in top-to-bottom order.
///
/// On a tie the walk consumes the new-side line first, so once reversed a
/// tied deletion always comes right before its addition.
pub fn backtrack(matrix: &LcsMatrix, old: &[&str], new: &[&str]) -> Vec<EditOp> {
    let mut ops = Vec::with_capacity(old.len() + new.len());
    let mut i = old.len();
    let mut j = new.len();

    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            ops.push(EditOp::Equal(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if matrix.get(i, j - 1) >= matrix.get(i - 1, j) {
            ops.push(EditOp::Add(j - 1));
            j -= 1;
        } else {
            ops.push(EditOp::Delete(i - 1));
            i -= 1;
        }
    }

    // At most one side has lines left
    while j > 0 {
        ops.push(EditOp::Add(j - 1));
        j -= 1;
    }
    while i > 0 {
        ops.push(EditOp::Delete(i - 1));
        i -= 1;
    }

    ops.reverse();
    ops
}
