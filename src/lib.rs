//! Dictionary-guided solvers for column transposition ciphers.
//!
//! A ciphertext arrives as a rectangular table: rows are plaintext lines,
//! columns are the shuffled column units. Two strategies recover the column
//! ordering (and per-column attachment side): a fast greedy constructor and
//! a best-first search over partial assemblies. Both consume the dictionary
//! only through the `WordOracle` trait.

pub mod greedy;
pub mod grid;
pub mod oracle;
pub mod search;
pub mod strategy;

// Re-export main types
pub use greedy::GreedySolver;
pub use grid::{CipherGrid, ColumnUnit, Side, BOTH_SIDES};
pub use oracle::{BlockDictionary, SetOracle, WordOracle};
pub use search::OptimalSearch;
pub use strategy::{Placement, Progress, Solution, Strategy};
