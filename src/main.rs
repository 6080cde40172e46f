//! CLI entry point for the cipher solver.
//!
//! Usage:
//!   cipher-solver solve <cipher.json> [options]
//!   cipher-solver solve --stdin [options]
//!
//! Options:
//!   --algorithm <greedy|optimal|both>  Strategy to run (default: optimal)
//!   --pad                              Right-pad lines to original lengths
//!
//! The input document carries the grid and the word list:
//!   { "rows": [["c", "at"], ["d", "og"]], "words": ["cat", "dog"] }

mod greedy;
mod grid;
mod oracle;
mod search;
mod strategy;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use greedy::GreedySolver;
use grid::CipherGrid;
use oracle::BlockDictionary;
use search::OptimalSearch;
use strategy::{Solution, Strategy};

#[derive(Parser)]
#[command(name = "cipher-solver")]
#[command(about = "Dictionary-guided solvers for column transposition ciphers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Greedy,
    Optimal,
    Both,
}

#[derive(Subcommand)]
enum Commands {
    /// Reorder the cipher's columns to maximize recognized words
    Solve {
        /// Path to cipher JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read cipher from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Strategy to run
        #[arg(long, value_enum, default_value = "optimal")]
        algorithm: Algorithm,

        /// Right-pad output lines to their original lengths
        #[arg(long)]
        pad: bool,
    },
}

/// Input format: the fragment table plus the dictionary word list.
#[derive(Debug, Deserialize)]
struct CipherInput {
    rows: Vec<Vec<String>>,
    words: Vec<String>,
}

/// Output format for one solver run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    algorithm: &'static str,
    lines: Vec<String>,
    placements: Vec<strategy::Placement>,
    matched_score: usize,
    unmatched_cost: usize,
    steps: usize,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            algorithm,
            pad,
        } => {
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            let input: CipherInput = match serde_json::from_str(&json_content) {
                Ok(i) => i,
                Err(e) => {
                    eprintln!("Error parsing cipher JSON: {}", e);
                    std::process::exit(1);
                }
            };

            let grid = CipherGrid::new(&input.rows);
            let dictionary = BlockDictionary::new(&input.words);

            let strategies: Vec<Box<dyn Strategy>> = match algorithm {
                Algorithm::Greedy => vec![Box::new(GreedySolver)],
                Algorithm::Optimal => vec![Box::new(OptimalSearch)],
                Algorithm::Both => vec![Box::new(GreedySolver), Box::new(OptimalSearch)],
            };

            let outputs: Vec<SolveOutput> = strategies
                .iter()
                .map(|s| {
                    let solution = s.solve(&grid, &dictionary);
                    format_result(s.name(), solution, &grid, pad)
                })
                .collect();

            let rendered = if outputs.len() == 1 {
                serde_json::to_string_pretty(&outputs[0]).unwrap()
            } else {
                serde_json::to_string_pretty(&outputs).unwrap()
            };
            println!("{}", rendered);
        }
    }
}

fn format_result(
    algorithm: &'static str,
    solution: Solution,
    grid: &CipherGrid,
    pad: bool,
) -> SolveOutput {
    let lines = if pad {
        solution.padded_lines(grid)
    } else {
        solution.lines
    };
    SolveOutput {
        algorithm,
        lines,
        placements: solution.placements,
        matched_score: solution.matched_score,
        unmatched_cost: solution.unmatched_cost,
        steps: solution.steps,
        time_elapsed_ms: solution.time_elapsed_ms,
    }
}
