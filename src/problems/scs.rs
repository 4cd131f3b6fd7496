//! Shortest Common Supersequence.
//!
//! Built on the LCS table: the scalar answer is `|X| + |Y| - LCS(X, Y)`,
//! and the reconstruction walks the same table with the supersequence
//! traceback — matched elements are emitted once, mismatches emit from
//! whichever predecessor holds the larger subsequence value (ties prefer
//! X's character), and table edges drain the remaining prefixes.

use crate::engine::PairEngine;
use crate::problems::lcs::Lcs;
use crate::rules::Supersequence;

/// Shortest common supersequence of two sequences.
#[derive(Debug, Clone, Copy)]
pub struct Scs<'a, T> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Copy + PartialEq> Scs<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// Length of the shortest common supersequence.
    pub fn length(&self) -> usize {
        self.x.len() + self.y.len() - Lcs::new(self.x, self.y).length() as usize
    }

    /// One shortest common supersequence, deterministic for fixed inputs.
    pub fn sequence(&self) -> Vec<T> {
        if self.x.is_empty() {
            return self.y.to_vec();
        }
        if self.y.is_empty() {
            return self.x.to_vec();
        }
        let engine = PairEngine::new(Supersequence::new());
        let (_, seq) = engine
            .solve(self.x, self.y)
            .expect("inputs checked non-empty");
        seq
    }
}
