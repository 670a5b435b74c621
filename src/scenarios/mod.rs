//! Built-in puzzles.

use crate::core::config::PuzzleConfig;
use crate::rules::heuristic::Heuristic;
use crate::scenario::{Puzzle, ResourceLimits};

fn demo_limits() -> ResourceLimits {
    ResourceLimits {
        max_expansions: 1_000_000,
        max_generated: 25_000_000,
        max_frontier: 5_000_000,
        time_limit: None,
    }
}

fn built_in(name: &str, population: i32, capacity: i32, max_crossings: i32) -> Puzzle {
    Puzzle::new(name, PuzzleConfig::new(population, capacity, max_crossings))
        .with_limits(demo_limits())
}

/// Three missionaries, three cannibals, two seats: the textbook instance, 11 crossings.
pub fn classic() -> Puzzle {
    built_in("classic", 3, 2, 11)
}

/// The textbook instance with a budget far below its optimum; has no solution.
pub fn classic_tight() -> Puzzle {
    built_in("classic_tight", 3, 2, 3)
}

/// Two of each, two seats (5 crossings).
pub fn pair() -> Puzzle {
    built_in("pair", 2, 2, 5)
}

/// One of each fits in a single trip.
pub fn single() -> Puzzle {
    built_in("single", 1, 2, 1)
}

/// Four of each with a three-seat boat (9 crossings).
pub fn four_by_three() -> Puzzle {
    built_in("four_by_three", 4, 3, 9).with_heuristic(Heuristic::Capacity)
}

/// Five of each with a three-seat boat (11 crossings).
pub fn five_by_three() -> Puzzle {
    built_in("five_by_three", 5, 3, 11).with_heuristic(Heuristic::Capacity)
}

/// Return a puzzle by name.
pub fn by_name(name: &str) -> Option<Puzzle> {
    match name {
        "classic" => Some(classic()),
        "classic_tight" => Some(classic_tight()),
        "pair" => Some(pair()),
        "single" => Some(single()),
        "four_by_three" => Some(four_by_three()),
        "five_by_three" => Some(five_by_three()),
        _ => None,
    }
}

/// Names of all built-in puzzles.
pub fn names() -> &'static [&'static str] {
    &[
        "classic",
        "classic_tight",
        "pair",
        "single",
        "four_by_three",
        "five_by_three",
    ]
}
