//! Table-based dynamic programming for sequences and intervals.
//!
//! This crate unifies the classic 2D-tabulation solver family — the
//! longest-common-subsequence group, edit distance, matrix-chain-style
//! interval problems, and the subset-sum family — behind one tabulation
//! discipline:
//! 1. Describe your recurrence as a [`PairRule`] (or [`IntervalRule`]).
//! 2. Let [`PairEngine`] build and fill the table in the right order.
//! 3. Read the scalar, or backtrack for an explicit sequence.
//!
//! Solvers needing only the scalar run on a rolling window of rows
//! instead of the full table; see [`rolling`].
//!
//! ## Quick start
//! ```
//! use tabular_dp::problems::lcs::Lcs;
//!
//! let lcs = Lcs::new(b"abcdxyz", b"xyzabcd");
//! assert_eq!(lcs.length(), 4);
//! assert_eq!(lcs.sequence(), b"abcd".to_vec());
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains ready-to-use solvers for:
//! - Longest common subsequence / substring / repeating subsequence
//! - Palindromic subsequence distances (deletions, insertions)
//! - Levenshtein edit distance
//! - Shortest common supersequence (with reconstruction)
//! - Matrix-chain multiplication (with parenthesization)
//! - Boolean parenthesization counting
//! - Subset sum, partition, 0/1 knapsack, target sum, ribbon cutting,
//!   coin change
//!
//! These double as templates for wiring new recurrences into the engine.
//!
//! Every solve is a pure function of its inputs: tables are allocated per
//! call, never shared, never cached across invocations.

pub mod builder;
pub mod engine;
pub mod error;
pub mod interval;
pub mod problems;
pub mod rolling;
pub mod rules;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::PairEngineBuilder;
pub use crate::engine::{PairEngine, SpacePolicy};
pub use crate::error::DpError;
pub use crate::traits::{IntervalRule, PairRule, PairTraceback};
