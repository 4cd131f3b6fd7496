//! Concrete solvers built on the generic engines.
//!
//! Each module instantiates one transition rule (or interval rule) and
//! exposes the pure-function contract for its problem family:
//! - [`lcs`]              : longest common subsequence, length + reconstruction.
//! - [`common_substring`] : longest common substring (contiguity variant).
//! - [`repeating`]        : longest repeating subsequence.
//! - [`palindrome`]       : palindromic subsequence family over one sequence.
//! - [`edit_distance`]    : Levenshtein distance.
//! - [`scs`]              : shortest common supersequence.
//! - [`matrix_chain`]     : interval-cost chain multiplication.
//! - [`bool_paren`]       : interval-count boolean parenthesization.
//! - [`subset`]           : subset-sum / knapsack family on a single row.

pub mod bool_paren;
pub mod common_substring;
pub mod edit_distance;
pub mod lcs;
pub mod matrix_chain;
pub mod palindrome;
pub mod repeating;
pub mod scs;
pub mod subset;
