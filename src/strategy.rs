//! The solving strategy abstraction shared by both algorithms.
//!
//! A strategy produces an ordering plus a side assignment for the columns of
//! a `CipherGrid`, guided only by a `WordOracle`. The two implementations
//! (`GreedySolver`, `OptimalSearch`) are independent; they share nothing but
//! this trait and the grid/oracle value types.

use serde::{Deserialize, Serialize};

use crate::grid::{CipherGrid, Side};
use crate::oracle::WordOracle;

/// One committed column: which column (index into the grid's column list)
/// and which end it was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub column: usize,
    pub side: Side,
}

/// Result of a solver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// The reconstructed plaintext, one string per line.
    pub lines: Vec<String>,
    /// Columns in commit order with their attachment sides.
    pub placements: Vec<Placement>,
    /// Characters credited to oracle-recognized fragments.
    pub matched_score: usize,
    /// Characters not part of any recognized fragment.
    pub unmatched_cost: usize,
    /// Commits (greedy) or node expansions (search) performed.
    pub steps: usize,
    /// Time elapsed in milliseconds.
    pub time_elapsed_ms: u64,
}

impl Solution {
    /// Lines right-padded to their original total lengths, for display
    /// alignment.
    pub fn padded_lines(&self, grid: &CipherGrid) -> Vec<String> {
        self.lines
            .iter()
            .zip(grid.line_lengths())
            .map(|(line, &width)| {
                let mut padded = line.clone();
                let len = padded.chars().count();
                padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
                padded
            })
            .collect()
    }
}

/// Observational snapshot passed to the progress callback after each commit
/// (greedy) or expansion (search). Has no effect on algorithm state.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub lines: &'a [String],
    pub columns_placed: usize,
    pub columns_total: usize,
}

/// Capability: produce an ordering and side assignment for a cipher grid.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn solve_with_progress(
        &self,
        grid: &CipherGrid,
        oracle: &dyn WordOracle,
        on_progress: &mut dyn FnMut(Progress<'_>),
    ) -> Solution;

    fn solve(&self, grid: &CipherGrid, oracle: &dyn WordOracle) -> Solution {
        self.solve_with_progress(grid, oracle, &mut |_| {})
    }
}
