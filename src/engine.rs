//! Generic pairwise tabulation engine.
//!
//! This module implements the two passes shared by every pairwise solver:
//! 1. A forward fill that materializes the `(n+1)×(m+1)` table in
//!    row-major order from a [`PairRule`].
//! 2. An optional backtracking pass that walks the filled table from a
//!    terminal cell toward the origin, re-applying the rule's tests to
//!    reconstruct an explicit sequence.
//!
//! The engine is completely generic over rule implementations. It owns no
//! state between calls: each solve allocates its table, consumes it and
//! drops it.

use crate::error::DpError;
use crate::rolling;
use crate::table::PairTable;
use crate::traits::{EdgePolicy, PairRule, PairTraceback, StepContext, Trace};

/// Storage strategy for scalar-only solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacePolicy {
    /// Materialize the full table even when only the corner is needed.
    /// Useful for cross-checking the rolling evaluation.
    Full,
    /// Keep only the current and previous row (O(m) space).
    #[default]
    Rolling,
}

/// Pairwise tabulation engine for a given transition rule `R`.
///
/// Typical usage:
/// ```
/// use tabular_dp::engine::PairEngine;
/// use tabular_dp::rules::Subsequence;
///
/// let engine = PairEngine::new(Subsequence::new());
/// let len: u32 = engine.scalar(b"abcdxyz", b"xyzabcd").unwrap();
/// assert_eq!(len, 4);
/// ```
pub struct PairEngine<R> {
    rule: R,
    policy: SpacePolicy,
}

impl<R> PairEngine<R> {
    /// Create an engine with the default [`SpacePolicy::Rolling`] scalar
    /// strategy.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            policy: SpacePolicy::default(),
        }
    }

    /// Create an engine with an explicit space policy.
    pub fn with_policy(rule: R, policy: SpacePolicy) -> Self {
        Self { rule, policy }
    }

    /// Immutable access to the underlying rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The configured space policy.
    pub fn policy(&self) -> SpacePolicy {
        self.policy
    }

    /// Build the complete `(n+1)×(m+1)` table for `x` vs `y`.
    ///
    /// Returns [`DpError::EmptySequence`] if either sequence is empty; the
    /// degenerate table is skipped and callers answer boundary cases
    /// directly.
    pub fn table<E>(&self, x: &[E], y: &[E]) -> Result<PairTable<R::Cell>, DpError>
    where
        E: Copy + PartialEq,
        R: PairRule<E>,
    {
        if x.is_empty() || y.is_empty() {
            return Err(DpError::EmptySequence);
        }
        Ok(fill(&self.rule, x, y))
    }

    /// Compute the terminal-cell scalar for `x` vs `y`.
    ///
    /// Under [`SpacePolicy::Rolling`] this keeps two rows; under
    /// [`SpacePolicy::Full`] it materializes the table and reads the
    /// corner. Both produce identical values.
    pub fn scalar<E>(&self, x: &[E], y: &[E]) -> Result<R::Cell, DpError>
    where
        E: Copy + PartialEq,
        R: PairRule<E>,
    {
        if x.is_empty() || y.is_empty() {
            return Err(DpError::EmptySequence);
        }
        Ok(match self.policy {
            SpacePolicy::Full => fill(&self.rule, x, y).corner(),
            SpacePolicy::Rolling => rolling::scalar(&self.rule, x, y),
        })
    }

    /// Fill the table and reconstruct from the terminal cell `(n, m)`.
    ///
    /// Returns the corner scalar and the reconstructed sequence.
    pub fn solve<E>(&self, x: &[E], y: &[E]) -> Result<(R::Cell, Vec<E>), DpError>
    where
        E: Copy + PartialEq,
        R: PairTraceback<E>,
    {
        let t = self.table(x, y)?;
        let seq = backtrack(&self.rule, &t, x, y, (x.len(), y.len()));
        Ok((t.corner(), seq))
    }
}

/// Fill a complete pairwise table in row-major order.
///
/// Base row and column come from [`PairRule::base`]; every interior cell
/// is computed exactly once from its three predecessors.
pub(crate) fn fill<E, R>(rule: &R, x: &[E], y: &[E]) -> PairTable<R::Cell>
where
    E: Copy + PartialEq,
    R: PairRule<E>,
{
    let n = x.len();
    let m = y.len();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("fill_pair", rows = n + 1, cols = m + 1);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut t = PairTable::new(n, m, rule.base(0, 0));
    for j in 1..=m {
        t.set(0, j, rule.base(0, j));
    }
    for i in 1..=n {
        t.set(i, 0, rule.base(i, 0));
    }

    for i in 1..=n {
        let xi = x[i - 1];
        for j in 1..=m {
            let ctx = StepContext {
                i,
                j,
                x: xi,
                y: y[j - 1],
                diag: t.get(i - 1, j - 1),
                up: t.get(i - 1, j),
                left: t.get(i, j - 1),
            };
            t.set(i, j, rule.step(&ctx));
        }
    }
    t
}

/// Walk a filled table from `start` toward the origin, reconstructing the
/// rule's output sequence.
///
/// The walk re-applies the rule's own equality and ordering tests via
/// [`PairTraceback::backstep`]; emitted elements are collected backward
/// and reversed before returning. On reaching a table edge the rule's
/// [`EdgePolicy`] decides whether the remaining prefixes are drained into
/// the output or dropped.
pub fn backtrack<E, R>(
    rule: &R,
    table: &PairTable<R::Cell>,
    x: &[E],
    y: &[E],
    start: (usize, usize),
) -> Vec<E>
where
    E: Copy + PartialEq,
    R: PairTraceback<E>,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("backtrack", start_i = start.0, start_j = start.1);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (mut i, mut j) = start;
    debug_assert!(i < table.rows() && j < table.cols());

    let mut out = Vec::with_capacity(x.len() + y.len());
    while i > 0 && j > 0 {
        let ctx = StepContext {
            i,
            j,
            x: x[i - 1],
            y: y[j - 1],
            diag: table.get(i - 1, j - 1),
            up: table.get(i - 1, j),
            left: table.get(i, j - 1),
        };
        let trace = rule.backstep(&ctx, table.get(i, j));
        match trace {
            Trace::Diag(e) => {
                out.extend(e);
                i -= 1;
                j -= 1;
            }
            Trace::Up(e) => {
                out.extend(e);
                i -= 1;
            }
            Trace::Left(e) => {
                out.extend(e);
                j -= 1;
            }
            Trace::Halt => {
                out.reverse();
                return out;
            }
        }
    }

    if rule.edge_policy() == EdgePolicy::Drain {
        while i > 0 {
            out.push(x[i - 1]);
            i -= 1;
        }
        while j > 0 {
            out.push(y[j - 1]);
            j -= 1;
        }
    }

    out.reverse();
    out
}
