//! Puzzle layer: glue between the pure rules and the search engine.
//!
//! A [`Puzzle`] bundles:
//! - the [`PuzzleConfig`] (population, boat capacity, crossing bound)
//! - the start state (normally everybody on the starting bank)
//! - the [`Heuristic`] that orders the frontier
//! - explicit budgets via [`ResourceLimits`]
//!
//! The rules never validate their configuration. [`Puzzle::validate`] is the boundary check
//! that CLIs and tests run before solving.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::{ConfigError, PuzzleConfig};
use crate::core::state::PuzzleState;
use crate::rules::heuristic::Heuristic;
use crate::rules::safety::{bank_is_safe, counts_in_range};
use crate::rules::Rules;
use crate::search::astar::{astar, SearchOutcome};
use crate::solution::{Outcome, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Search budgets.
///
/// - `max_expansions`: states taken off the frontier and expanded
/// - `max_generated`: successors pushed onto the frontier
/// - `max_frontier`: frontier length at any time
/// - `time_limit`: optional wall-clock deadline, checked periodically
pub struct ResourceLimits {
    pub max_expansions: u64,
    pub max_generated: u64,
    pub max_frontier: usize,
    pub time_limit: Option<Duration>,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_expansions: 20_000_000,
            max_generated: 200_000_000,
            max_frontier: 100_000_000,
            time_limit: None,
        }
    }
}

impl ResourceLimits {
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: u64::MAX,
            max_generated: u64::MAX,
            max_frontier: usize::MAX,
            time_limit: None,
        }
    }

    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub expanded: u64,
    pub generated: u64,
    pub frontier_peak: u64,
}

impl fmt::Display for ResourceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "counts(expanded={}, generated={}, frontier_peak={})",
            self.expanded, self.generated, self.frontier_peak
        )
    }
}

#[derive(Debug, Error)]
/// Structured errors returned by search routines.
///
/// Failing to find a solution is not one of them; see [`Outcome::Unsolvable`].
pub enum SearchError {
    /// The puzzle is internally inconsistent (bad parameters or start state).
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] ConfigError),
    /// A configured resource limit was exceeded.
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); {counts}")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// The wall-clock deadline passed.
    #[error("time limit of {}ms exceeded; {counts}", .limit.as_millis())]
    TimedOut {
        limit: Duration,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    #[error("allocation failed at {stage} for {structure}; {counts}")]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
    /// I/O or decoding failure (puzzle files, report export).
    #[error("io error at {stage} for {path}: {error}")]
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// A fully specified puzzle instance.
pub struct Puzzle {
    pub name: String,
    pub config: PuzzleConfig,
    pub start: PuzzleState,
    pub heuristic: Heuristic,
    pub limits: ResourceLimits,
}

impl Puzzle {
    /// Everybody on the starting bank, default heuristic and budgets.
    pub fn new(name: impl Into<String>, config: PuzzleConfig) -> Self {
        Self {
            name: name.into(),
            config,
            start: PuzzleState::initial(&config),
            heuristic: Heuristic::default(),
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_start(mut self, start: PuzzleState) -> Self {
        self.start = start;
        self
    }

    pub fn rules(&self) -> Rules {
        Rules::new(self.config).with_heuristic(self.heuristic)
    }

    /// Validate puzzle invariants. Intended to be called by CLIs/tests before solving.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.config.validate()?;

        let s = &self.start;
        let invalid = |reason: &str| -> Result<(), SearchError> {
            Err(SearchError::InvalidPuzzle(ConfigError::InvalidStart {
                reason: reason.to_string(),
            }))
        };

        if !counts_in_range(&self.config, s) {
            return invalid("counts outside 0..=population");
        }
        if !bank_is_safe(s.start_bank()) {
            return invalid("missionaries outnumbered on the starting bank");
        }
        if !bank_is_safe(s.far_bank(&self.config)) {
            return invalid("missionaries outnumbered on the far bank");
        }
        if s.crossings < 0 || s.crossings > self.config.max_crossings {
            return invalid("crossings outside 0..=max_crossings");
        }

        Ok(())
    }

    /// Validate, then run a fresh A* search from the start state.
    #[tracing::instrument(level = "debug", skip(self), fields(puzzle = %self.name))]
    pub fn solve(&self) -> Result<Outcome, SearchError> {
        self.validate()?;
        let rules = self.rules();
        let outcome = match astar(&rules, self.start, self.limits)? {
            SearchOutcome::Found { path, stats } => Outcome::Solved(Solution::new(
                self.config,
                self.heuristic,
                path.into_states(),
                stats,
            )),
            SearchOutcome::Exhausted { stats } => Outcome::Unsolvable { stats },
        };
        Ok(outcome)
    }

    /// Load a puzzle from a JSON file (see [`PuzzleFile`]).
    pub fn from_json_file(path: &Path) -> Result<Puzzle, SearchError> {
        let io_err = |stage: &'static str, error: String| SearchError::Io {
            stage,
            path: path.display().to_string(),
            error,
        };
        let bytes = fs::read(path).map_err(|e| io_err("puzzle_read", e.to_string()))?;
        let file: PuzzleFile =
            serde_json::from_slice(&bytes).map_err(|e| io_err("puzzle_decode", e.to_string()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Ok(file.puzzle.into_puzzle(name))
    }
}

fn default_heuristic() -> Heuristic {
    Heuristic::Shuttle
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Puzzle parameters as stored in a JSON file.
pub struct PuzzleSpec {
    pub population: i32,
    pub capacity: i32,
    pub max_crossings: i32,
    #[serde(default = "default_heuristic")]
    pub heuristic: Heuristic,
    /// Optional wall-clock budget in milliseconds.
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
}

impl PuzzleSpec {
    pub fn into_puzzle(self, name: impl Into<String>) -> Puzzle {
        let config = PuzzleConfig::new(self.population, self.capacity, self.max_crossings);
        let limits = ResourceLimits::default()
            .with_time_limit(self.time_limit_ms.map(Duration::from_millis));
        Puzzle::new(name, config)
            .with_heuristic(self.heuristic)
            .with_limits(limits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level JSON document: `{ "puzzle": { ... } }`.
pub struct PuzzleFile {
    pub puzzle: PuzzleSpec,
}
