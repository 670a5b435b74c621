//! The puzzle's transition model.
//!
//! [`Rules`] binds a [`PuzzleConfig`] to the pure functions in the submodules and exposes them
//! to the generic search through [`ProblemLike`].

pub mod heuristic;
pub mod movegen;
pub mod safety;

use crate::core::config::PuzzleConfig;
use crate::core::state::{PuzzleState, StateKey};
use crate::rules::heuristic::Heuristic;
use crate::search::problem::ProblemLike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub config: PuzzleConfig,
    pub heuristic: Heuristic,
}

impl Rules {
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            config,
            heuristic: Heuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[inline]
    pub fn is_valid(&self, s: &PuzzleState) -> bool {
        safety::is_valid(&self.config, s)
    }

    #[inline]
    pub fn is_goal(&self, s: &PuzzleState) -> bool {
        s.is_goal()
    }

    /// The two-seat lower bound, whatever estimator is selected for the search.
    #[inline]
    pub fn heuristic_cost(&self, s: &PuzzleState) -> u32 {
        heuristic::shuttle(s)
    }

    /// Estimate used to order the frontier.
    #[inline]
    pub fn estimate(&self, s: &PuzzleState) -> u32 {
        self.heuristic.estimate(&self.config, s)
    }

    #[inline]
    pub fn successors(&self, s: &PuzzleState) -> Vec<PuzzleState> {
        movegen::successors(&self.config, s)
    }
}

impl ProblemLike for Rules {
    type State = PuzzleState;
    type Key = StateKey;

    #[inline]
    fn key(&self, s: &PuzzleState) -> StateKey {
        s.key()
    }

    #[inline]
    fn is_goal(&self, s: &PuzzleState) -> bool {
        s.is_goal()
    }

    #[inline]
    fn estimate(&self, s: &PuzzleState) -> u32 {
        Rules::estimate(self, s)
    }

    #[inline]
    fn cost(&self, from: &PuzzleState, to: &PuzzleState) -> u32 {
        from.cost_to(to)
    }

    #[inline]
    fn successors(&self, s: &PuzzleState) -> Vec<PuzzleState> {
        Rules::successors(self, s)
    }

    fn capacity_hint(&self) -> usize {
        self.config.identity_count()
    }
}
