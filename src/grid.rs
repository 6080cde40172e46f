//! Cipher grid representation types that match the JSON input format.
//!
//! A column-transposition cipher arrives as a rectangular table of text
//! fragments: rows are the lines of the hidden plaintext, columns are the
//! shuffled column units. These types deserialize directly from the JSON
//! accepted by the CLI.

use serde::{Deserialize, Serialize};

/// Which end of the partial assembly a column is attached to.
///
/// Enumeration order is significant for tie-breaking: candidates are always
/// tried `Right` before `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Append to the right end of every line.
    Right,
    /// Prepend to the left end of every line.
    Left,
}

/// Both attachment sides, in the fixed enumeration order.
pub const BOTH_SIDES: [Side; 2] = [Side::Right, Side::Left];

/// One original column's fragments across every line, with its precomputed
/// character counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnUnit {
    /// One fragment per line.
    pub text: Vec<String>,
    /// Total characters across all fragments.
    #[serde(rename = "charCount")]
    pub char_count: usize,
    /// Count of non-letter characters across all fragments. These can never
    /// be credited to a matched word regardless of final placement.
    #[serde(rename = "unmatchedWeight")]
    pub unmatched_weight: usize,
}

impl ColumnUnit {
    pub fn new(text: Vec<String>) -> Self {
        let mut char_count = 0;
        let mut unmatched_weight = 0;
        for fragment in &text {
            for c in fragment.chars() {
                char_count += 1;
                if !c.is_alphabetic() {
                    unmatched_weight += 1;
                }
            }
        }
        Self {
            text,
            char_count,
            unmatched_weight,
        }
    }

    /// Characters that could, in principle, become part of a matched word.
    pub fn letter_count(&self) -> usize {
        self.char_count - self.unmatched_weight
    }
}

/// An immutable, parsed cipher grid: per-line lengths, the set of separator
/// characters present in the input, and the ordered list of column units.
#[derive(Debug, Clone)]
pub struct CipherGrid {
    line_count: usize,
    line_lengths: Vec<usize>,
    separators: Vec<char>,
    columns: Vec<ColumnUnit>,
}

impl CipherGrid {
    /// Build a grid from rows of fragments (rows = lines, inner = columns).
    ///
    /// # Panics
    ///
    /// Panics if the table is ragged. Every line must supply the same number
    /// of columns; anything else is an invariant violation upstream, not a
    /// recoverable input error.
    pub fn new(rows: &[Vec<String>]) -> Self {
        let line_count = rows.len();
        let column_count = rows.first().map_or(0, |row| row.len());
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == column_count,
                "ragged cipher grid: line {} has {} columns, expected {}",
                i,
                row.len(),
                column_count
            );
        }

        let mut separators = Vec::new();
        let mut line_lengths = vec![0; line_count];
        for (i, row) in rows.iter().enumerate() {
            for fragment in row {
                for c in fragment.chars() {
                    line_lengths[i] += 1;
                    if !c.is_alphabetic() && !separators.contains(&c) {
                        separators.push(c);
                    }
                }
            }
        }

        let columns = (0..column_count)
            .map(|j| ColumnUnit::new(rows.iter().map(|row| row[j].clone()).collect()))
            .collect();

        Self {
            line_count,
            line_lengths,
            separators,
            columns,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Total characters contributed to each line by all columns.
    pub fn line_lengths(&self) -> &[usize] {
        &self.line_lengths
    }

    /// Every character in the input that is not a letter. Words can only be
    /// delimited by these.
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    pub fn columns(&self) -> &[ColumnUnit] {
        &self.columns
    }

    /// Sum of `unmatched_weight` over all columns.
    pub fn total_unmatched_weight(&self) -> usize {
        self.columns.iter().map(|c| c.unmatched_weight).sum()
    }

    /// Total characters in the grid.
    pub fn total_chars(&self) -> usize {
        self.columns.iter().map(|c| c.char_count).sum()
    }

    /// Score a (partial) line: split it on the separator set and credit the
    /// length of every fragment the oracle recognizes.
    pub fn score_line(&self, line: &str, oracle: &dyn crate::oracle::WordOracle) -> usize {
        line.split(|c: char| self.separators.contains(&c))
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| {
                if oracle.recognizes(fragment) {
                    fragment.chars().count()
                } else {
                    0
                }
            })
            .sum()
    }
}
