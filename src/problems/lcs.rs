//! Longest Common Subsequence.
//!
//! Length queries run on the rolling evaluator; reconstruction fills the
//! full table and backtracks from the corner with the same equality tests
//! the fill used.

use crate::engine::PairEngine;
use crate::rules::Subsequence;

/// LCS of two sequences.
#[derive(Debug, Clone, Copy)]
pub struct Lcs<'a, T> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Copy + PartialEq> Lcs<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// Length of the longest common subsequence.
    ///
    /// O(min over orientation of n·m) time, two table rows of space.
    pub fn length(&self) -> u32 {
        if self.x.is_empty() || self.y.is_empty() {
            return 0;
        }
        // LCS is symmetric; roll over the shorter side.
        let (s, t) = if self.x.len() < self.y.len() {
            (self.y, self.x)
        } else {
            (self.x, self.y)
        };
        let engine = PairEngine::new(Subsequence::new());
        engine.scalar(s, t).expect("inputs checked non-empty")
    }

    /// One longest common subsequence, deterministic for fixed inputs.
    ///
    /// Mismatch ties prefer the upper predecessor, so the result is stable
    /// across runs. Its length always equals [`length`](Self::length).
    pub fn sequence(&self) -> Vec<T> {
        if self.x.is_empty() || self.y.is_empty() {
            return Vec::new();
        }
        let engine = PairEngine::new(Subsequence::new());
        let (_, seq) = engine
            .solve(self.x, self.y)
            .expect("inputs checked non-empty");
        seq
    }
}
