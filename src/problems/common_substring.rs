//! Longest Common Substring (contiguous).
//!
//! Same table shape as LCS, but mismatches reset runs to zero, so the
//! answer is the table's global maximum with its coordinates, not the
//! corner. Reconstruction walks the diagonal back from the maximal cell
//! until the run ends.

use crate::engine::{backtrack, PairEngine};
use crate::rolling;
use crate::rules::Substring;

/// Longest common substring of two sequences.
#[derive(Debug, Clone, Copy)]
pub struct CommonSubstring<'a, T> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Copy + PartialEq> CommonSubstring<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// Length of the longest common substring, tracked as a running
    /// maximum over the rolling fill.
    pub fn length(&self) -> u32 {
        if self.x.is_empty() || self.y.is_empty() {
            return 0;
        }
        rolling::scan_max(&Substring, self.x, self.y).0
    }

    /// End position of the longest common substring, as 1-based table
    /// coordinates `(i, j)`: the match ends at `X[i-1]` / `Y[j-1]`.
    ///
    /// Ties resolve to the first maximal cell in row-major order. Returns
    /// `None` when the sequences share no element.
    pub fn end_position(&self) -> Option<(usize, usize)> {
        if self.x.is_empty() || self.y.is_empty() {
            return None;
        }
        let (best, at) = rolling::scan_max(&Substring, self.x, self.y);
        (best > 0).then_some(at)
    }

    /// One longest common substring.
    pub fn substring(&self) -> Vec<T> {
        if self.x.is_empty() || self.y.is_empty() {
            return Vec::new();
        }
        let engine = PairEngine::new(Substring);
        let table = engine
            .table(self.x, self.y)
            .expect("inputs checked non-empty");
        let start = table.argmax();
        backtrack(&Substring, &table, self.x, self.y, start)
    }
}
