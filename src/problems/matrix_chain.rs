//! Matrix-chain multiplication.
//!
//! Classic interval-cost DP: given dimensions `p[0..=n]` for `n` matrices
//! where matrix `A_k` is `p[k] × p[k+1]`, find the parenthesization
//! minimizing scalar multiplications. Cells carry their optimal split
//! index so the parenthesization can be reconstructed without refilling.

use crate::error::DpError;
use crate::interval;
use crate::table::IntervalTable;
use crate::traits::IntervalRule;

/// Cost and winning split for one interval of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainCell {
    /// Minimum scalar multiplications for the interval.
    pub cost: u64,
    /// Split index `k` achieving it (`i <= k < j`; `k == i` for leaves).
    pub split: usize,
}

struct ChainRule<'a> {
    dims: &'a [u64],
}

impl IntervalRule for ChainRule<'_> {
    type Cell = ChainCell;

    fn len(&self) -> usize {
        self.dims.len() - 1
    }

    fn leaf(&self, i: usize) -> ChainCell {
        ChainCell { cost: 0, split: i }
    }

    fn split(&self, i: usize, k: usize, j: usize, left: &ChainCell, right: &ChainCell) -> ChainCell {
        ChainCell {
            cost: left.cost + right.cost + self.dims[i] * self.dims[k + 1] * self.dims[j + 1],
            split: k,
        }
    }

    fn reduce(&self, acc: ChainCell, candidate: ChainCell) -> ChainCell {
        if candidate.cost < acc.cost {
            candidate
        } else {
            acc
        }
    }
}

/// Optimal matrix-chain ordering for a dimension list.
#[derive(Debug, Clone)]
pub struct MatrixChain {
    dims: Vec<u64>,
}

impl MatrixChain {
    /// `dims` holds `n + 1` dimensions describing `n` matrices.
    ///
    /// Returns [`DpError::DimensionsTooShort`] for fewer than two entries.
    pub fn new(dims: Vec<u64>) -> Result<Self, DpError> {
        if dims.len() < 2 {
            return Err(DpError::DimensionsTooShort(dims.len()));
        }
        Ok(Self { dims })
    }

    /// Number of matrices in the chain.
    pub fn matrices(&self) -> usize {
        self.dims.len() - 1
    }

    fn table(&self) -> IntervalTable<ChainCell> {
        interval::fill(&ChainRule { dims: &self.dims }).expect("dims checked in constructor")
    }

    /// Minimum number of scalar multiplications for the whole chain.
    pub fn min_cost(&self) -> u64 {
        self.table().root().cost
    }

    /// Explicit optimal parenthesization, e.g. `((A1(A2A3))A4)`.
    ///
    /// Matrices are named `A1..An`; a single matrix renders without
    /// parentheses.
    pub fn parenthesization(&self) -> String {
        let t = self.table();
        let mut out = String::new();
        write_interval(&t, 0, self.matrices() - 1, &mut out);
        out
    }
}

fn write_interval(t: &IntervalTable<ChainCell>, i: usize, j: usize, out: &mut String) {
    if i == j {
        out.push('A');
        out.push_str(&(i + 1).to_string());
        return;
    }
    let k = t.get(i, j).split;
    out.push('(');
    write_interval(t, i, k, out);
    write_interval(t, k + 1, j, out);
    out.push(')');
}
