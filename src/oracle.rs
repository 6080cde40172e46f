//! Word oracles used to score assembled fragments.
//!
//! Solvers never see a dictionary; they only ask whether a fragment is
//! recognizable. `BlockDictionary` is the production oracle, `SetOracle` an
//! exact-match oracle for callers that want strict membership.

use std::collections::{BTreeMap, HashSet};

/// The single capability the solvers consume.
pub trait WordOracle {
    /// Whether the fragment is recognized as (part of) a word.
    fn recognizes(&self, fragment: &str) -> bool;
}

/// A dictionary indexed by word length, optimized for checking fragments of
/// words rather than whole ones.
///
/// Words of each length are concatenated into one block; a fragment is
/// recognized when any block of equal or greater length contains it as a
/// contiguous substring. This over-matches on purpose: a fragment that only
/// occurs inside a longer word still counts, and a fragment can even span
/// the boundary between two adjacent words packed into the same block. The
/// approximation is load-bearing for solver behavior and must not be
/// tightened to exact membership.
#[derive(Debug, Clone, Default)]
pub struct BlockDictionary {
    blocks: BTreeMap<usize, String>,
    word_count: usize,
}

impl BlockDictionary {
    /// Build from an in-memory word list. Blank entries are skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocks: BTreeMap<usize, String> = BTreeMap::new();
        let mut word_count = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            blocks
                .entry(word.chars().count())
                .or_default()
                .push_str(word);
            word_count += 1;
        }
        Self { blocks, word_count }
    }

    /// Number of words the dictionary was built from.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl WordOracle for BlockDictionary {
    fn recognizes(&self, fragment: &str) -> bool {
        if fragment.is_empty() {
            return false;
        }
        let len = fragment.chars().count();
        self.blocks
            .range(len..)
            .any(|(_, block)| block.contains(fragment))
    }
}

/// Exact-membership oracle backed by a `HashSet`.
#[derive(Debug, Clone, Default)]
pub struct SetOracle {
    words: HashSet<String>,
}

impl SetOracle {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }
}

impl WordOracle for SetOracle {
    fn recognizes(&self, fragment: &str) -> bool {
        self.words.contains(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_word_recognized() {
        let dict = BlockDictionary::new(["cat", "dog"]);
        assert!(dict.recognizes("cat"));
        assert!(dict.recognizes("dog"));
        assert!(!dict.recognizes("cow"));
        assert_eq!(dict.word_count(), 2);
    }

    #[test]
    fn test_fragment_inside_longer_word_recognized() {
        let dict = BlockDictionary::new(["elephant"]);
        assert!(dict.recognizes("phan"));
        assert!(dict.recognizes("ele"));
        assert!(!dict.recognizes("phant_x"));
    }

    #[test]
    fn test_longer_fragment_than_any_word_rejected() {
        let dict = BlockDictionary::new(["cat"]);
        assert!(!dict.recognizes("cats"));
    }

    #[test]
    fn test_empty_and_blank_handling() {
        let dict = BlockDictionary::new(["cat", "", "  "]);
        assert_eq!(dict.word_count(), 1);
        assert!(!dict.recognizes(""));
    }

    #[test]
    fn test_block_boundary_span_is_recognized() {
        // "cater" and "dogma" pack into one length-5 block "caterdogma".
        // "erdog" spans the word boundary and is still reported recognized.
        // Known artifact of the block layout, kept deliberately.
        let dict = BlockDictionary::new(["cater", "dogma"]);
        assert!(dict.recognizes("erdog"));
        assert!(dict.recognizes("rdo"));
    }

    #[test]
    fn test_set_oracle_is_exact() {
        let oracle = SetOracle::new(["cat"]);
        assert!(oracle.recognizes("cat"));
        assert!(!oracle.recognizes("ca"));
        assert!(!oracle.recognizes("cats"));
    }
}
