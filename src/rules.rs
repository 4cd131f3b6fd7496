//! The transition-rule catalog.
//!
//! Each rule instantiates one of the mutually exclusive pairwise
//! behaviors; solvers in [`crate::problems`] pick the rule matching their
//! recurrence and never hand-roll a fill loop.

use crate::traits::{EdgePolicy, PairRule, PairTraceback, StepContext, Trace};

/// Subsequence-match transition: on element equality the cell extends the
/// diagonal predecessor, on mismatch it takes the better of the upper and
/// left neighbors.
///
/// Covers the longest-common-subsequence family. With
/// [`distinct_indices`](Subsequence::distinct_indices) the rule ignores
/// equality at `i == j`, which turns `LCS(X, X)` into the longest
/// *repeating* subsequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subsequence {
    distinct_indices: bool,
}

impl Subsequence {
    /// Plain LCS matching.
    pub fn new() -> Self {
        Self {
            distinct_indices: false,
        }
    }

    /// Exclude equal-index matches (self-comparison variants).
    pub fn distinct_indices() -> Self {
        Self {
            distinct_indices: true,
        }
    }

    #[inline]
    fn matches<E: PartialEq>(&self, ctx: &StepContext<E, u32>) -> bool {
        ctx.x == ctx.y && (!self.distinct_indices || ctx.i != ctx.j)
    }
}

impl<E: Copy + PartialEq> PairRule<E> for Subsequence {
    type Cell = u32;

    fn base(&self, _i: usize, _j: usize) -> u32 {
        0
    }

    fn step(&self, ctx: &StepContext<E, u32>) -> u32 {
        if self.matches(ctx) {
            ctx.diag + 1
        } else {
            ctx.up.max(ctx.left)
        }
    }
}

impl<E: Copy + PartialEq> PairTraceback<E> for Subsequence {
    fn backstep(&self, ctx: &StepContext<E, u32>, current: u32) -> Trace<E> {
        if self.matches(ctx) && current == ctx.diag + 1 {
            Trace::Diag(Some(ctx.x))
        } else if ctx.up >= ctx.left {
            Trace::Up(None)
        } else {
            Trace::Left(None)
        }
    }
}

/// Substring-match transition: equality extends the diagonal run, any
/// mismatch resets the cell to zero.
///
/// The answer is the table's global maximum, not the corner; its
/// coordinates seed the diagonal reconstruction walk, which halts at the
/// first zero cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substring;

impl<E: Copy + PartialEq> PairRule<E> for Substring {
    type Cell = u32;

    fn base(&self, _i: usize, _j: usize) -> u32 {
        0
    }

    fn step(&self, ctx: &StepContext<E, u32>) -> u32 {
        if ctx.x == ctx.y {
            ctx.diag + 1
        } else {
            0
        }
    }
}

impl<E: Copy + PartialEq> PairTraceback<E> for Substring {
    fn backstep(&self, ctx: &StepContext<E, u32>, current: u32) -> Trace<E> {
        if current == 0 {
            Trace::Halt
        } else {
            Trace::Diag(Some(ctx.x))
        }
    }
}

/// Edit-distance transition: equality is free along the diagonal, a
/// mismatch costs one plus the cheapest of insert (left), delete (up) and
/// replace (diagonal). Base cells cost `i + j`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistance;

impl<E: Copy + PartialEq> PairRule<E> for EditDistance {
    type Cell = u32;

    fn base(&self, i: usize, j: usize) -> u32 {
        (i + j) as u32
    }

    fn step(&self, ctx: &StepContext<E, u32>) -> u32 {
        if ctx.x == ctx.y {
            ctx.diag
        } else {
            1 + ctx.diag.min(ctx.up).min(ctx.left)
        }
    }
}

/// Supersequence reconstruction over the LCS table.
///
/// The forward fill is exactly [`Subsequence`]; the traceback differs: a
/// mismatch appends from whichever predecessor holds the larger
/// subsequence length, ties preferring X's character, and table edges
/// drain the remaining prefixes. The reconstructed sequence is a shortest
/// common supersequence of length `|X| + |Y| - LCS(X, Y)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Supersequence {
    inner: Subsequence,
}

impl Supersequence {
    pub fn new() -> Self {
        Self {
            inner: Subsequence::new(),
        }
    }
}

impl<E: Copy + PartialEq> PairRule<E> for Supersequence {
    type Cell = u32;

    fn base(&self, i: usize, j: usize) -> u32 {
        PairRule::<E>::base(&self.inner, i, j)
    }

    fn step(&self, ctx: &StepContext<E, u32>) -> u32 {
        self.inner.step(ctx)
    }
}

impl<E: Copy + PartialEq> PairTraceback<E> for Supersequence {
    fn backstep(&self, ctx: &StepContext<E, u32>, _current: u32) -> Trace<E> {
        if ctx.x == ctx.y {
            Trace::Diag(Some(ctx.x))
        } else if ctx.up >= ctx.left {
            Trace::Up(Some(ctx.x))
        } else {
            Trace::Left(Some(ctx.y))
        }
    }

    fn edge_policy(&self) -> EdgePolicy {
        EdgePolicy::Drain
    }
}
