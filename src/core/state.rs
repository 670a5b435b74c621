use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::config::PuzzleConfig;
use crate::core::side::BoatSide;

/// Head counts on one bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    pub missionaries: i32,
    pub cannibals: i32,
}

impl Bank {
    #[inline]
    pub const fn new(missionaries: i32, cannibals: i32) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    #[inline]
    pub const fn people(self) -> i32 {
        self.missionaries + self.cannibals
    }
}

/// The identity of a puzzle configuration: starting-bank counts plus boat side.
///
/// Crossing count and accumulated cost are deliberately not part of it, so two paths reaching
/// the same configuration at different depths collapse onto one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey {
    pub missionaries: i32,
    pub cannibals: i32,
    pub boat: BoatSide,
}

/// One puzzle configuration.
///
/// Counts refer to the starting bank; far-bank counts are `population - count`. Candidates
/// produced during move generation may hold out-of-range counts until they are checked by
/// [`crate::rules::safety::is_valid`].
///
/// `PartialEq`/`Hash` compare the [`StateKey`] only: `crossings` is ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PuzzleState {
    pub missionaries: i32,
    pub cannibals: i32,
    pub boat: BoatSide,
    pub crossings: i32,
}

impl PuzzleState {
    #[inline]
    pub const fn new(missionaries: i32, cannibals: i32, boat: BoatSide, crossings: i32) -> Self {
        Self {
            missionaries,
            cannibals,
            boat,
            crossings,
        }
    }

    /// Everybody on the starting bank with the boat, nothing crossed yet.
    #[inline]
    pub const fn initial(config: &PuzzleConfig) -> Self {
        Self::new(config.population, config.population, BoatSide::Start, 0)
    }

    #[inline]
    pub const fn key(&self) -> StateKey {
        StateKey {
            missionaries: self.missionaries,
            cannibals: self.cannibals,
            boat: self.boat,
        }
    }

    /// People still waiting on the starting bank.
    #[inline]
    pub const fn remaining(&self) -> i32 {
        self.start_bank().people()
    }

    /// True iff the starting bank is empty and the boat is on the far side.
    #[inline]
    pub const fn is_goal(&self) -> bool {
        self.missionaries == 0 && self.cannibals == 0 && matches!(self.boat, BoatSide::Far)
    }

    /// Every crossing costs the same.
    #[inline]
    pub const fn cost_to(&self, _other: &PuzzleState) -> u32 {
        1
    }

    #[inline]
    pub const fn start_bank(&self) -> Bank {
        Bank::new(self.missionaries, self.cannibals)
    }

    #[inline]
    pub const fn far_bank(&self, config: &PuzzleConfig) -> Bank {
        Bank::new(
            config.population - self.missionaries,
            config.population - self.cannibals,
        )
    }
}

impl PartialEq for PuzzleState {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_bank_is_the_complement() {
        let cfg = PuzzleConfig::new(3, 2, 11);
        let s = PuzzleState::new(2, 1, BoatSide::Far, 4);
        assert_eq!(s.start_bank(), Bank::new(2, 1));
        assert_eq!(s.far_bank(&cfg), Bank::new(1, 2));
        assert_eq!(s.remaining(), 3);
    }

    #[test]
    fn goal_needs_the_boat_on_the_far_side() {
        assert!(PuzzleState::new(0, 0, BoatSide::Far, 5).is_goal());
        assert!(!PuzzleState::new(0, 0, BoatSide::Start, 5).is_goal());
        assert!(!PuzzleState::new(0, 1, BoatSide::Far, 5).is_goal());
    }

    #[test]
    fn initial_state_holds_everyone() {
        let s = PuzzleState::initial(&PuzzleConfig::new(4, 3, 9));
        assert_eq!(
            s.key(),
            StateKey {
                missionaries: 4,
                cannibals: 4,
                boat: BoatSide::Start,
            }
        );
        assert_eq!(s.crossings, 0);
    }
}
