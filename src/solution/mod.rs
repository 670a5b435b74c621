//! Solved puzzles: the reconstructed path, per-crossing moves, text rendering and a JSON
//! report.
//!
//! The report is meant to be stable and self-contained: it stores the parameters next to the
//! moves so it can be replayed without the code that produced it.

use std::fmt;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::PuzzleConfig;
use crate::core::side::BoatSide;
use crate::core::state::{PuzzleState, StateKey};
use crate::rules::heuristic::Heuristic;
use crate::scenario::SearchError;
use crate::search::stats::SearchStats;

const FORMAT_VERSION: u32 = 1;

/// What solving a puzzle produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    Solved(Solution),
    /// The frontier emptied: no goal within the crossing bound.
    Unsolvable { stats: SearchStats },
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(s) => Some(s),
            Outcome::Unsolvable { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            Outcome::Solved(s) => &s.stats,
            Outcome::Unsolvable { stats } => stats,
        }
    }
}

/// One crossing: who was in the boat and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crossing {
    pub missionaries: i32,
    pub cannibals: i32,
    pub to: BoatSide,
}

impl Crossing {
    /// Derive the move between two consecutive states from the count differences.
    pub fn between(from: &PuzzleState, to: &PuzzleState) -> Crossing {
        Crossing {
            missionaries: (to.missionaries - from.missionaries).abs(),
            cannibals: (to.cannibals - from.cannibals).abs(),
            to: to.boat,
        }
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moved {} missionaries and {} cannibals to the {} side.",
            self.missionaries, self.cannibals, self.to
        )
    }
}

/// Renders a state with both banks spelled out.
pub struct StateLine<'a> {
    config: &'a PuzzleConfig,
    state: &'a PuzzleState,
}

impl<'a> StateLine<'a> {
    pub fn new(config: &'a PuzzleConfig, state: &'a PuzzleState) -> Self {
        Self { config, state }
    }
}

impl fmt::Display for StateLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = self.state.start_bank();
        let right = self.state.far_bank(self.config);
        write!(
            f,
            "Left Side: {} missionaries, {} cannibals | Right Side: {} missionaries, {} cannibals | Boat on the {} side.",
            left.missionaries, left.cannibals, right.missionaries, right.cannibals, self.state.boat
        )
    }
}

/// A path from the start state to a goal, initial state first.
#[derive(Debug, Clone)]
pub struct Solution {
    pub config: PuzzleConfig,
    pub heuristic: Heuristic,
    states: Vec<PuzzleState>,
    pub stats: SearchStats,
}

impl Solution {
    /// `states` must be non-empty and ordered from the start state to the goal.
    pub fn new(
        config: PuzzleConfig,
        heuristic: Heuristic,
        states: Vec<PuzzleState>,
        stats: SearchStats,
    ) -> Self {
        debug_assert!(!states.is_empty());
        Self {
            config,
            heuristic,
            states,
            stats,
        }
    }

    pub fn states(&self) -> &[PuzzleState] {
        &self.states
    }

    pub fn initial(&self) -> &PuzzleState {
        &self.states[0]
    }

    pub fn goal(&self) -> &PuzzleState {
        &self.states[self.states.len() - 1]
    }

    /// Number of boat trips on the path.
    pub fn crossings(&self) -> usize {
        self.states.len() - 1
    }

    pub fn moves(&self) -> Vec<Crossing> {
        self.states
            .windows(2)
            .map(|w| Crossing::between(&w[0], &w[1]))
            .collect()
    }

    pub fn report(&self, name: &str) -> SolutionReport {
        SolutionReport {
            format_version: FORMAT_VERSION,
            name: name.to_string(),
            config: self.config,
            heuristic: self.heuristic,
            crossings: self.crossings(),
            moves: self.moves(),
            states: self.states.iter().map(PuzzleState::key).collect(),
            stats: StatsReport::from(&self.stats),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Initial State: {}",
            StateLine::new(&self.config, self.initial())
        )?;
        for (w, mv) in self.states.windows(2).zip(self.moves()) {
            writeln!(f, "{mv}")?;
            writeln!(f)?;
            writeln!(f, "Current State: {}", StateLine::new(&self.config, &w[1]))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub expanded: u64,
    pub generated: u64,
    pub stale_pops: u64,
    pub frontier_peak: u64,
    pub elapsed_ms: u64,
}

impl From<&SearchStats> for StatsReport {
    fn from(s: &SearchStats) -> Self {
        Self {
            expanded: s.expanded,
            generated: s.generated,
            stale_pops: s.stale_pops,
            frontier_peak: s.frontier_peak,
            elapsed_ms: u64::try_from(s.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Serializable summary of a [`Solution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub format_version: u32,
    pub name: String,
    pub config: PuzzleConfig,
    pub heuristic: Heuristic,
    pub crossings: usize,
    pub moves: Vec<Crossing>,
    pub states: Vec<StateKey>,
    pub stats: StatsReport,
}

impl SolutionReport {
    /// Replay `moves` from the initial configuration and check every state against `states`.
    pub fn replays(&self) -> bool {
        let Some(first) = self.states.first() else {
            return false;
        };
        if self.moves.len() != self.crossings || self.states.len() != self.crossings + 1 {
            return false;
        }

        let mut cur = *first;
        for (mv, expected) in self.moves.iter().zip(&self.states[1..]) {
            if mv.to != cur.boat.opposite() {
                return false;
            }
            let (m, c) = match cur.boat {
                BoatSide::Start => (cur.missionaries - mv.missionaries, cur.cannibals - mv.cannibals),
                BoatSide::Far => (cur.missionaries + mv.missionaries, cur.cannibals + mv.cannibals),
            };
            cur = StateKey {
                missionaries: m,
                cannibals: c,
                boat: mv.to,
            };
            if cur != *expected {
                return false;
            }
        }
        true
    }
}

pub fn write_report(path: &Path, report: &SolutionReport) -> Result<(), SearchError> {
    let io_err = |error: String| SearchError::Io {
        stage: "report_write",
        path: path.display().to_string(),
        error,
    };
    let f = fs::File::create(path).map_err(|e| io_err(e.to_string()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report).map_err(|e| io_err(e.to_string()))?;
    w.write_all(b"\n").map_err(|e| io_err(e.to_string()))?;
    w.flush().map_err(|e| io_err(e.to_string()))
}

pub fn load_report(path: &Path) -> Result<SolutionReport, SearchError> {
    let io_err = |error: String| SearchError::Io {
        stage: "report_read",
        path: path.display().to_string(),
        error,
    };
    let f = fs::File::open(path).map_err(|e| io_err(e.to_string()))?;
    serde_json::from_reader(BufReader::new(f)).map_err(|e| io_err(e.to_string()))
}
