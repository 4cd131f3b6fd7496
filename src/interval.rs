//! Interval DP driver.
//!
//! Fills an [`IntervalTable`] for a single sequence of atoms, in the only
//! order the recurrence admits: by increasing interval length, then
//! increasing left boundary, with the split index `k` ranging over the
//! interval. O(n³) time, O(n²) space.

use crate::error::DpError;
use crate::table::IntervalTable;
use crate::traits::IntervalRule;

/// Build the complete interval table for `rule`.
///
/// Returns [`DpError::EmptySequence`] when the rule has no atoms; a single
/// atom yields a table holding only its leaf.
pub fn fill<R: IntervalRule>(rule: &R) -> Result<IntervalTable<R::Cell>, DpError> {
    let n = rule.len();
    if n == 0 {
        return Err(DpError::EmptySequence);
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("fill_interval", atoms = n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut t = IntervalTable::new(n, rule.leaf(0));
    for i in 0..n {
        t.set(i, i, rule.leaf(i));
    }

    for len in 2..=n {
        for i in 0..=(n - len) {
            let j = i + len - 1;
            let mut acc = rule.split(i, i, j, t.get(i, i), t.get(i + 1, j));
            for k in (i + 1)..j {
                let candidate = rule.split(i, k, j, t.get(i, k), t.get(k + 1, j));
                acc = rule.reduce(acc, candidate);
            }
            t.set(i, j, acc);
        }
    }

    Ok(t)
}
