//! Cross-algorithm properties: the search solver never scores below the
//! greedy baseline, both are deterministic, and neither ever invents or
//! drops a character.

use cipher_solver::{
    BlockDictionary, CipherGrid, GreedySolver, OptimalSearch, SetOracle, Solution, Strategy,
    WordOracle,
};

fn rows(table: &[&[&str]]) -> Vec<Vec<String>> {
    table
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

fn assert_character_conservation(table: &[&[&str]], solution: &Solution) {
    for (i, row) in table.iter().enumerate() {
        let contributed: String = row.concat();
        assert_eq!(
            sorted_chars(&solution.lines[i]),
            sorted_chars(&contributed),
            "line {} lost or gained characters",
            i
        );
    }
}

fn assert_never_worse(table: &[&[&str]], oracle: &dyn WordOracle) {
    let grid = CipherGrid::new(&rows(table));
    let greedy = GreedySolver.solve(&grid, oracle);
    let optimal = OptimalSearch.solve(&grid, oracle);
    assert!(
        optimal.matched_score >= greedy.matched_score,
        "search scored {} below greedy's {}",
        optimal.matched_score,
        greedy.matched_score
    );
    assert_character_conservation(table, &greedy);
    assert_character_conservation(table, &optimal);
}

#[test]
fn test_both_algorithms_recover_cat_dog() {
    let table: &[&[&str]] = &[&["c", "at"], &["d", "og"]];
    let grid = CipherGrid::new(&rows(table));
    let oracle = BlockDictionary::new(["cat", "dog"]);

    let greedy = GreedySolver.solve(&grid, &oracle);
    let optimal = OptimalSearch.solve(&grid, &oracle);

    for solution in [&greedy, &optimal] {
        assert_eq!(solution.lines, vec!["cat", "dog"]);
        assert_eq!(solution.matched_score, 6);
        assert_eq!(solution.unmatched_cost, 0);
    }
    assert_character_conservation(table, &greedy);
    assert_character_conservation(table, &optimal);
}

#[test]
fn test_greedy_trap_is_escaped_by_search() {
    // Seeding on "ab" makes the local "abc" match irresistible to the greedy
    // solver, which then has nowhere useful to put "d" and finishes with no
    // recognized words. The search backtracks into "cdab".
    let table: &[&[&str]] = &[&["ab", "c", "d"]];
    let grid = CipherGrid::new(&rows(table));
    let oracle = SetOracle::new(["abc", "cdab"]);

    let greedy = GreedySolver.solve(&grid, &oracle);
    let optimal = OptimalSearch.solve(&grid, &oracle);

    assert_eq!(greedy.lines, vec!["abcd"]);
    assert_eq!(greedy.matched_score, 0);
    assert_eq!(greedy.unmatched_cost, 4);

    assert_eq!(optimal.lines, vec!["cdab"]);
    assert_eq!(optimal.matched_score, 4);
    assert_eq!(optimal.unmatched_cost, 0);

    assert_eq!(optimal.matched_score - greedy.matched_score, 4);
}

#[test]
fn test_never_worse_across_inputs() {
    let block = BlockDictionary::new(["cat", "dog", "cats", "ate"]);
    assert_never_worse(&[&["c", "at"], &["d", "og"]], &block);
    assert_never_worse(&[&["ca", "ts.", "ate"], &["do", "g..", "..."]], &block);
    assert_never_worse(&[&["ab", "c", "d"]], &SetOracle::new(["abc", "cdab"]));

    struct NeverOracle;
    impl WordOracle for NeverOracle {
        fn recognizes(&self, _: &str) -> bool {
            false
        }
    }
    assert_never_worse(&[&["ab", "cd", "e."]], &NeverOracle);
}

#[test]
fn test_repeated_runs_are_identical() {
    let table: &[&[&str]] = &[&["ca", "ts.", "ate"], &["do", "g..", "..."]];
    let grid = CipherGrid::new(&rows(table));
    let oracle = BlockDictionary::new(["cat", "dog", "cats", "ate"]);

    for strategy in [&GreedySolver as &dyn Strategy, &OptimalSearch] {
        let first = strategy.solve(&grid, &oracle);
        let second = strategy.solve(&grid, &oracle);
        assert_eq!(first.lines, second.lines);
        assert_eq!(first.placements, second.placements);
        assert_eq!(first.matched_score, second.matched_score);
        assert_eq!(first.unmatched_cost, second.unmatched_cost);
        assert_eq!(first.steps, second.steps);
    }
}

#[test]
fn test_padded_output_restores_line_widths() {
    let table: &[&[&str]] = &[&["c", "at"], &["d", "og"]];
    let grid = CipherGrid::new(&rows(table));
    let oracle = BlockDictionary::new(["cat", "dog"]);

    let solution = OptimalSearch.solve(&grid, &oracle);
    for (padded, &width) in solution.padded_lines(&grid).iter().zip(grid.line_lengths()) {
        assert_eq!(padded.chars().count(), width);
    }
}
