//! Lower bounds on the number of crossings still needed.
//!
//! All estimators are computed on demand from the state's fields; nothing is cached on the
//! state itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::PuzzleConfig;
use crate::core::side::BoatSide;
use crate::core::state::PuzzleState;

/// Selectable remaining-cost estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// [`shuttle`]: the two-seat ferrying bound.
    #[default]
    Shuttle,
    /// [`capacity_aware`]: the same argument generalised to any boat capacity.
    Capacity,
    /// Always zero; turns the search into uniform-cost search.
    Blind,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::Shuttle, Heuristic::Capacity, Heuristic::Blind];

    #[inline]
    pub fn estimate(self, config: &PuzzleConfig, s: &PuzzleState) -> u32 {
        match self {
            Heuristic::Shuttle => shuttle(s),
            Heuristic::Capacity => capacity_aware(config, s),
            Heuristic::Blind => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::Shuttle => "shuttle",
            Heuristic::Capacity => "capacity",
            Heuristic::Blind => "blind",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic '{0}' (expected one of: shuttle, capacity, blind)")]
pub struct UnknownHeuristic(pub String);

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}

/// Crossings still needed if the boat seated two and nobody could be eaten.
///
/// - nobody left on the starting bank: 0
/// - boat on the far bank: `2 * remaining` (it has to come back first)
/// - a single person left next to the boat: 1
/// - otherwise `2 * remaining - 3`: two across, one back, per batch, and the last trip
///   needs no return
///
/// Admissible (and consistent) whenever the capacity is at most two.
pub fn shuttle(s: &PuzzleState) -> u32 {
    let remaining = s.remaining().max(0) as u32;
    if remaining == 0 {
        return 0;
    }
    if s.boat == BoatSide::Far {
        return 2 * remaining;
    }
    if remaining == 1 {
        return 1;
    }
    2 * remaining - 3
}

/// Capacity-aware version of [`shuttle`], admissible for every capacity.
///
/// Each round trip moves at most `capacity - 1` people net and the final trip at most
/// `capacity`. With the boat on the far bank, the return trip must carry somebody back.
pub fn capacity_aware(config: &PuzzleConfig, s: &PuzzleState) -> u32 {
    let remaining = s.remaining().max(0) as u32;
    let capacity = config.capacity.max(1) as u32;
    match s.boat {
        _ if remaining == 0 => 0,
        BoatSide::Start => trips_with_boat_present(remaining, capacity),
        BoatSide::Far => 1 + trips_with_boat_present(remaining + 1, capacity),
    }
}

#[inline]
fn trips_with_boat_present(remaining: u32, capacity: u32) -> u32 {
    if remaining <= capacity {
        1
    } else if capacity == 1 {
        2 * remaining - 1
    } else {
        2 * (remaining - capacity).div_ceil(capacity - 1) + 1
    }
}
