use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use river_crossing::core::config::PuzzleConfig;
use river_crossing::rules::heuristic::Heuristic;
use river_crossing::scenario::Puzzle;
use river_crossing::scenarios;
use river_crossing::solution::{write_report, Outcome};

#[derive(Parser)]
#[command(name = "solve")]
#[command(about = "Find a minimum-crossing solution to a missionaries-and-cannibals puzzle")]
struct Args {
    /// Missionaries (and cannibals) per class, N
    population: Option<i32>,
    /// Boat capacity, M
    capacity: Option<i32>,
    /// Maximum number of crossings allowed, K
    max_crossings: Option<i32>,

    /// Solve a built-in puzzle instead (see --list)
    #[arg(long, conflicts_with_all = ["population", "file"])]
    scenario: Option<String>,

    /// Load the puzzle from a JSON file: {"puzzle": {"population": .., "capacity": .., "max_crossings": ..}}
    #[arg(long, conflicts_with = "population")]
    file: Option<PathBuf>,

    /// Remaining-cost estimator: shuttle, capacity or blind
    #[arg(long)]
    heuristic: Option<Heuristic>,

    /// Abort the search after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Print the solution as a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// List the built-in puzzles and exit
    #[arg(long)]
    list: bool,
}

fn prompt(label: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> i32 {
    loop {
        print!("{label}");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("Failed to read stdin: {e}");
                std::process::exit(1);
            }
            None => {
                eprintln!("Unexpected end of input");
                std::process::exit(2);
            }
        };
        match line.trim().parse() {
            Ok(v) => return v,
            Err(_) => eprintln!("Not an integer: {:?}", line.trim()),
        }
    }
}

fn puzzle_from_args(args: &Args) -> Puzzle {
    if let Some(name) = &args.scenario {
        return scenarios::by_name(name).unwrap_or_else(|| {
            eprintln!(
                "Unknown scenario: {name}\n\nAvailable scenarios:\n  - {}",
                scenarios::names().join("\n  - ")
            );
            std::process::exit(2);
        });
    }

    if let Some(path) = &args.file {
        return Puzzle::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load puzzle: {e}");
            std::process::exit(2);
        });
    }

    let config = match (args.population, args.capacity, args.max_crossings) {
        (Some(n), Some(m), Some(k)) => PuzzleConfig::new(n, m, k),
        (None, None, None) => {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            let n = prompt("Enter the number of missionaries and cannibals N: ", &mut lines);
            let m = prompt("Enter the boat capacity M: ", &mut lines);
            let k = prompt("Enter the maximum number of crossings allowed K: ", &mut lines);
            PuzzleConfig::new(n, m, k)
        }
        _ => {
            eprintln!("Usage: solve <N> <M> <K>  (or --scenario <name>, or --file <puzzle.json>)");
            std::process::exit(2);
        }
    };
    Puzzle::new("cli", config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        for name in scenarios::names() {
            println!("{name}");
        }
        return;
    }

    let mut puzzle = puzzle_from_args(&args);
    if let Some(h) = args.heuristic {
        puzzle = puzzle.with_heuristic(h);
    }
    if let Some(ms) = args.time_limit_ms {
        let limits = puzzle
            .limits
            .with_time_limit(Some(Duration::from_millis(ms)));
        puzzle = puzzle.with_limits(limits);
    }

    if let Err(e) = puzzle.validate() {
        eprintln!("{e}");
        std::process::exit(2);
    }

    let started = Instant::now();
    let outcome = match puzzle.solve() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };
    let elapsed = started.elapsed();

    let solution = match outcome {
        Outcome::Solved(s) => s,
        Outcome::Unsolvable { stats } => {
            if args.json {
                println!("null");
            } else {
                println!();
                println!("Execution time: {} ms", elapsed.as_millis());
                println!("No solution found within the crossing limit.");
            }
            tracing::info!(%stats, "no solution");
            std::process::exit(3);
        }
    };

    let report = solution.report(&puzzle.name);
    if let Some(path) = &args.report {
        if let Err(e) = write_report(path, &report) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!();
        println!("Execution time: {} ms", elapsed.as_millis());
        println!("Solution ({} crossings):", solution.crossings());
        print!("{solution}");
    }
}
