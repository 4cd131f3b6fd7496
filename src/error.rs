//! Error taxonomy for solver construction and table building.
//!
//! Every error is local to a single solve call: computations are pure and
//! deterministic, so nothing is retried and nothing is fatal to a hosting
//! process. Degenerate-but-well-defined inputs (an empty sequence at a
//! top-level solver, a zero target) are *not* errors; solvers answer them
//! with the mathematical boundary value and never reach the table builder.

use thiserror::Error;

/// Errors reported by table builders and fallible solver constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DpError {
    /// The table builder was handed an empty sequence. Callers special-case
    /// zero-length inputs and return the boundary answer directly.
    #[error("table builder requires non-empty sequences")]
    EmptySequence,

    /// A matrix-chain dimension list with fewer than two entries describes
    /// no matrix at all.
    #[error("dimension list needs at least two entries, got {0}")]
    DimensionsTooShort(usize),

    /// Paired arrays (e.g. knapsack weights and values) must have equal
    /// lengths.
    #[error("paired inputs differ in length: {left} vs {right}")]
    MismatchedLengths { left: usize, right: usize },

    /// Subset-style targets must be non-negative.
    #[error("target sum must be non-negative, got {0}")]
    NegativeTarget(i64),

    /// A boolean expression failed to parse.
    #[error("malformed boolean expression: {0}")]
    MalformedExpression(String),
}
