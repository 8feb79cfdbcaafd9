//! Game-tree search
//!
//! Minimax with alpha-beta pruning and an optional depth cutoff.

pub mod minimax;

pub use minimax::SearchAgent;
