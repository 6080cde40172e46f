//! Local-greedy constructor for column orderings.
//!
//! Seeds with the most letter-dense column, then repeatedly commits the
//! (column, side) pair with the best boundary-fragment score until no
//! columns remain. No backtracking; fast, deterministic, and not guaranteed
//! globally optimal. Used as the baseline the search solver is measured
//! against.

use std::time::Instant;

use crate::grid::{CipherGrid, Side, BOTH_SIDES};
use crate::oracle::WordOracle;
use crate::strategy::{Placement, Progress, Solution, Strategy};

/// One line of the growing hypothesis. Only the open boundary fragments can
/// change meaning when a column is attached; interior fragments, once closed
/// by further growth, are final and never rescored during candidate trials.
#[derive(Debug, Clone, Default)]
struct LineBuffer {
    text: String,
    open_left: String,
    open_right: String,
}

impl LineBuffer {
    /// Extend the line at one end and re-derive both open fragments.
    ///
    /// Both ends are recomputed because a line with no separator is a single
    /// open run: growing one end grows the other's fragment too.
    fn commit(&mut self, fragment: &str, side: Side, separators: &[char]) {
        match side {
            Side::Right => self.text.push_str(fragment),
            Side::Left => self.text.insert_str(0, fragment),
        }
        self.open_left = open_prefix(&self.text, separators).to_string();
        self.open_right = open_suffix(&self.text, separators).to_string();
    }
}

/// Maximal separator-free run at the start of `text`; empty if the text
/// starts with a separator.
fn open_prefix<'a>(text: &'a str, separators: &[char]) -> &'a str {
    match text.find(|c: char| separators.contains(&c)) {
        Some(i) => &text[..i],
        None => text,
    }
}

/// Maximal separator-free run at the end of `text`.
fn open_suffix<'a>(text: &'a str, separators: &[char]) -> &'a str {
    match text.rfind(|c: char| separators.contains(&c)) {
        Some(i) => {
            let sep_len = text[i..].chars().next().map_or(0, char::len_utf8);
            &text[i + sep_len..]
        }
        None => text,
    }
}

/// Attach a column to the hypothesis, retire it from the remaining set and
/// notify the progress hook.
fn commit_column(
    grid: &CipherGrid,
    lines: &mut [LineBuffer],
    remaining: &mut Vec<usize>,
    placements: &mut Vec<Placement>,
    on_progress: &mut dyn FnMut(Progress<'_>),
    column: usize,
    side: Side,
) {
    for (line, fragment) in lines.iter_mut().zip(&grid.columns()[column].text) {
        line.commit(fragment, side, grid.separators());
    }
    let pos = remaining
        .iter()
        .position(|&c| c == column)
        .expect("column committed twice");
    remaining.remove(pos);
    placements.push(Placement { column, side });

    let snapshot: Vec<String> = lines.iter().map(|l| l.text.clone()).collect();
    on_progress(Progress {
        lines: &snapshot,
        columns_placed: placements.len(),
        columns_total: grid.columns().len(),
    });
}

/// Greedy strategy. See module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Score a candidate attachment by rescoring only the touched boundary
    /// fragment of every line, concatenated with the candidate's fragment.
    fn trial_score(
        &self,
        grid: &CipherGrid,
        oracle: &dyn WordOracle,
        lines: &[LineBuffer],
        column: usize,
        side: Side,
    ) -> usize {
        let fragments = &grid.columns()[column].text;
        lines
            .iter()
            .zip(fragments)
            .map(|(line, fragment)| {
                let trial = match side {
                    Side::Right => format!("{}{}", line.open_right, fragment),
                    Side::Left => format!("{}{}", fragment, line.open_left),
                };
                grid.score_line(&trial, oracle)
            })
            .sum()
    }
}

impl Strategy for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve_with_progress(
        &self,
        grid: &CipherGrid,
        oracle: &dyn WordOracle,
        on_progress: &mut dyn FnMut(Progress<'_>),
    ) -> Solution {
        let start_time = Instant::now();
        let columns_total = grid.columns().len();

        let mut lines: Vec<LineBuffer> = vec![LineBuffer::default(); grid.line_count()];
        let mut remaining: Vec<usize> = (0..columns_total).collect();
        let mut placements: Vec<Placement> = Vec::with_capacity(columns_total);

        if columns_total > 0 {
            // Seed with the column holding the most letters, to give the
            // first boundary fragments the best chance of matching.
            let seed = remaining
                .iter()
                .copied()
                .max_by_key(|&c| {
                    // max_by_key keeps the last maximum; the reversed index
                    // resolves ties to the first column in list order.
                    (grid.columns()[c].letter_count(), std::cmp::Reverse(c))
                })
                .expect("non-empty remaining set");
            commit_column(
                grid,
                &mut lines,
                &mut remaining,
                &mut placements,
                on_progress,
                seed,
                Side::Right,
            );
        }

        while !remaining.is_empty() {
            let mut best: Option<(usize, Side)> = None;
            let mut best_score = 0;
            for side in BOTH_SIDES {
                for &column in &remaining {
                    let score = self.trial_score(grid, oracle, &lines, column, side);
                    if best.is_none() || score > best_score {
                        best = Some((column, side));
                        best_score = score;
                    }
                }
            }
            let (column, side) = best.expect("non-empty remaining set");
            commit_column(
                grid,
                &mut lines,
                &mut remaining,
                &mut placements,
                on_progress,
                column,
                side,
            );
        }

        let lines: Vec<String> = lines.into_iter().map(|l| l.text).collect();
        let matched_score: usize = lines.iter().map(|l| grid.score_line(l, oracle)).sum();
        let steps = placements.len();

        Solution {
            lines,
            placements,
            matched_score,
            unmatched_cost: grid.total_chars() - matched_score,
            steps,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}
