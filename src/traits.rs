//! Core trait definitions for table-based dynamic programs.
//!
//! To plug a recurrence into the generic tabulation engine, implement
//! [`PairRule`] for a descriptor struct (usually a unit struct or a struct
//! holding per-problem parameters).
//!
//! The traits encode the tabulation discipline shared by the whole solver
//! family:
//! - Pairwise problems: a `(n+1)×(m+1)` table over two sequences, filled
//!   row-major, where cell `(i, j)` is a pure function of its diagonal,
//!   upper and left predecessors plus the elements `X[i-1]` and `Y[j-1]`.
//! - Interval problems: an `n×n` table over one sequence of atoms, filled
//!   by increasing interval length, where cell `[i, j]` folds candidates
//!   produced by every split point `k` in `[i, j)`.
//!
//! Backtracking is a separate capability ([`PairTraceback`]): a rule that
//! supports reconstruction mirrors its forward tests to decide which
//! predecessor a cell came from and which element, if any, that move
//! contributes to the rebuilt sequence.

/// Inputs available when computing or re-deriving the interior cell
/// `(i, j)` of a pairwise table.
///
/// Indices are 1-based table coordinates: `x` is `X[i-1]` and `y` is
/// `Y[j-1]`. They are part of the context because some recurrences
/// constrain the *positions* as well as the elements — the longest
/// repeating subsequence must ignore equal elements at `i == j`.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<E, C> {
    /// Row index of the cell being computed (`1..=n`).
    pub i: usize,
    /// Column index of the cell being computed (`1..=m`).
    pub j: usize,
    /// Element `X[i-1]`.
    pub x: E,
    /// Element `Y[j-1]`.
    pub y: E,
    /// Cell `(i-1, j-1)`.
    pub diag: C,
    /// Cell `(i-1, j)`.
    pub up: C,
    /// Cell `(i, j-1)`.
    pub left: C,
}

/// Transition descriptor for a pairwise `(n+1)×(m+1)` tabulation.
///
/// Implementations must be pure: the engine guarantees each cell is
/// computed exactly once, from predecessors only, in row-major order.
pub trait PairRule<E: Copy + PartialEq> {
    /// Table cell value (a length, a cost, a count).
    type Cell: Copy + PartialEq;

    /// Value of the base cell `(i, j)` where `i == 0` or `j == 0`.
    fn base(&self, i: usize, j: usize) -> Self::Cell;

    /// Compute interior cell `(i, j)` from its three predecessors.
    fn step(&self, ctx: &StepContext<E, Self::Cell>) -> Self::Cell;
}

/// One reverse move of the backtracker, with the element it contributes
/// to the reconstructed output (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace<E> {
    /// Move to `(i-1, j-1)`, optionally emitting an element.
    Diag(Option<E>),
    /// Move to `(i-1, j)`, optionally emitting an element.
    Up(Option<E>),
    /// Move to `(i, j-1)`, optionally emitting an element.
    Left(Option<E>),
    /// Stop before reaching a table edge (substring walks stop at the
    /// first zero cell).
    Halt,
}

/// What the backtracker does once it reaches the top row or left column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Stop; the remaining prefix contributes nothing (LCS, substring).
    Halt,
    /// Consume the remaining prefixes of both sequences, emitting each
    /// element (shortest common supersequence).
    Drain,
}

/// Reconstruction strategy for a [`PairRule`].
///
/// `backstep` must mirror the forward fill: given the same context a cell
/// was computed from, it decides which predecessor produced the cell's
/// value. The engine walks from a start cell toward the origin, collects
/// emitted elements, and reverses the buffer at the end (reconstruction
/// proceeds from the sequence ends backward).
pub trait PairTraceback<E: Copy + PartialEq>: PairRule<E> {
    /// Decide the predecessor of interior cell `(i, j)` holding `current`.
    fn backstep(&self, ctx: &StepContext<E, Self::Cell>, current: Self::Cell) -> Trace<E>;

    /// Edge behavior once `i == 0` or `j == 0`.
    fn edge_policy(&self) -> EdgePolicy {
        EdgePolicy::Halt
    }
}

/// Transition descriptor for an interval DP over a single sequence of
/// `len()` atoms.
///
/// The engine fills cells `[i, j]` by increasing interval length, then
/// increasing left boundary; for each interval it builds one candidate per
/// split point `k` in `[i, j)` and folds them with
/// [`reduce`](IntervalRule::reduce).
pub trait IntervalRule {
    /// Cell value for an interval (cost plus split index, a pair of
    /// counts, ...).
    type Cell: Clone;

    /// Number of atoms `n`. The table covers intervals within `[0, n)`.
    fn len(&self) -> usize;

    /// Value of the single-atom interval `[i, i]`.
    fn leaf(&self, i: usize) -> Self::Cell;

    /// Candidate for interval `[i, j]` split at `k` (`i <= k < j`), given
    /// the already-filled sub-cells for `[i, k]` and `[k+1, j]`.
    fn split(
        &self,
        i: usize,
        k: usize,
        j: usize,
        left: &Self::Cell,
        right: &Self::Cell,
    ) -> Self::Cell;

    /// Fold two candidates for the same interval (min for costs, sum for
    /// counts).
    fn reduce(&self, acc: Self::Cell, candidate: Self::Cell) -> Self::Cell;
}
