//! Best-first search for a cost-minimal column ordering.
//!
//! Every placed character is either credited to a recognized fragment (cost
//! zero) or counted as unmatched (cost one). The search expands partial
//! assemblies in order of `heuristic + cost * COST_WEIGHT` and stops at the
//! first fully-assembled node it selects. The heuristic is the separator
//! count of the unplaced columns, an optimistic lower bound on their
//! unavoidable unmatched cost.
//!
//! There is no duplicate-state detection and no closed set: the frontier
//! grows combinatorially with column count. That ceiling is intentional;
//! callers are expected to keep inputs small.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use smallvec::SmallVec;

use crate::grid::{CipherGrid, Side, BOTH_SIDES};
use crate::oracle::WordOracle;
use crate::strategy::{Placement, Progress, Solution, Strategy};

/// Multiplier on confirmed cost in the node priority. Biases selection
/// toward minimizing confirmed cost far more aggressively than the
/// optimistic remaining estimate. Behavior-defining: which orderings win
/// close races depends on this exact value.
const COST_WEIGHT: usize = 10;

type RemainingSet = SmallVec<[usize; 16]>;

/// An immutable partial assembly. Children are always fresh nodes; a parent
/// is discarded once fully expanded.
#[derive(Debug, Clone)]
struct Node {
    lines: Vec<String>,
    /// Column indices not yet placed, in grid list order.
    remaining: RemainingSet,
    placements: Vec<Placement>,
    /// Matched characters across all lines.
    score: usize,
    /// Unmatched characters placed so far.
    cost: usize,
    /// Sum of `unmatched_weight` over the remaining columns.
    heuristic: usize,
}

impl Node {
    fn root(grid: &CipherGrid) -> Self {
        Self {
            lines: vec![String::new(); grid.line_count()],
            remaining: (0..grid.columns().len()).collect(),
            placements: Vec::new(),
            score: 0,
            cost: 0,
            heuristic: grid.total_unmatched_weight(),
        }
    }

    /// The node produced by attaching one remaining column on one side.
    fn extend(
        &self,
        grid: &CipherGrid,
        oracle: &dyn WordOracle,
        column: usize,
        side: Side,
    ) -> Self {
        let unit = &grid.columns()[column];

        let lines: Vec<String> = self
            .lines
            .iter()
            .zip(&unit.text)
            .map(|(line, fragment)| match side {
                Side::Right => format!("{}{}", line, fragment),
                Side::Left => format!("{}{}", fragment, line),
            })
            .collect();

        // Full rescore of every line: an added column can retroactively
        // merge two fragments that scored separately, gaining or losing
        // credit, so incremental scoring would be wrong here.
        let score: usize = lines.iter().map(|l| grid.score_line(l, oracle)).sum();

        // The step delta `char_count - (score - parent.score)` can be
        // negative when a merge destroys a matched fragment; the running
        // total never goes below zero. Summed before subtracting so the
        // arithmetic stays in unsigned range.
        let cost = (self.cost + unit.char_count + self.score) - score;

        let mut remaining = self.remaining.clone();
        remaining.retain(|&mut c| c != column);

        let mut placements = self.placements.clone();
        placements.push(Placement { column, side });

        Self {
            lines,
            remaining,
            placements,
            score,
            cost,
            heuristic: self.heuristic - unit.unmatched_weight,
        }
    }

    fn priority(&self) -> usize {
        self.heuristic + self.cost * COST_WEIGHT
    }

    fn is_goal(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Frontier entry ordered so the binary heap pops the minimum priority, with
/// the insertion sequence as tie-break. Children are inserted sides-first
/// then columns in list order, so equal priorities resolve exactly as a
/// first-encountered linear scan over insertion order would.
struct FrontierEntry {
    priority: usize,
    seq: u64,
    node: Node,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest
        // (priority, seq) on top.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first search strategy. See module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalSearch;

impl Strategy for OptimalSearch {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn solve_with_progress(
        &self,
        grid: &CipherGrid,
        oracle: &dyn WordOracle,
        on_progress: &mut dyn FnMut(Progress<'_>),
    ) -> Solution {
        let start_time = Instant::now();

        let root = Node::root(grid);
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        let mut expansions: usize = 0;

        let push = |frontier: &mut BinaryHeap<FrontierEntry>, seq: &mut u64, node: Node| {
            frontier.push(FrontierEntry {
                priority: node.priority(),
                seq: *seq,
                node,
            });
            *seq += 1;
        };

        let goal = if root.is_goal() {
            // Zero columns: the empty assembly is already the answer.
            root
        } else {
            // Start from the most letter-dense column, attached right.
            let first = root
                .remaining
                .iter()
                .copied()
                .min_by_key(|&c| grid.columns()[c].unmatched_weight)
                .expect("non-empty remaining set");
            push(&mut frontier, &mut seq, root.extend(grid, oracle, first, Side::Right));

            loop {
                let entry = frontier.pop().expect("frontier exhausted before goal");
                let node = entry.node;
                if node.is_goal() {
                    break node;
                }

                expansions += 1;
                for side in BOTH_SIDES {
                    for &column in &node.remaining {
                        push(
                            &mut frontier,
                            &mut seq,
                            node.extend(grid, oracle, column, side),
                        );
                    }
                }

                on_progress(Progress {
                    lines: &node.lines,
                    columns_placed: node.placements.len(),
                    columns_total: grid.columns().len(),
                });
            }
        };

        Solution {
            lines: goal.lines,
            placements: goal.placements,
            matched_score: goal.score,
            unmatched_cost: goal.cost,
            steps: expansions,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}
