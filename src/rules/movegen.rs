use crate::core::config::PuzzleConfig;
use crate::core::side::BoatSide;
use crate::core::state::PuzzleState;
use crate::rules::safety::is_valid;

/// A boatload: how many of each class sit in the boat for one crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Load {
    pub missionaries: i32,
    pub cannibals: i32,
}

/// Every non-empty load that fits in a boat of `capacity`, ascending by missionaries then
/// cannibals.
pub fn loads(capacity: i32) -> impl Iterator<Item = Load> {
    (0..=capacity).flat_map(move |m| {
        (0..=capacity - m)
            .filter(move |&c| m + c >= 1)
            .map(move |c| Load {
                missionaries: m,
                cannibals: c,
            })
    })
}

/// Apply `load` to `s`: people leave the bank the boat is on and the boat switches sides.
///
/// The result is a candidate; it is not checked for validity.
#[inline]
pub fn apply(s: &PuzzleState, load: Load, crossings: i32) -> PuzzleState {
    let (m, c) = match s.boat {
        BoatSide::Start => (s.missionaries - load.missionaries, s.cannibals - load.cannibals),
        BoatSide::Far => (s.missionaries + load.missionaries, s.cannibals + load.cannibals),
    };
    PuzzleState::new(m, c, s.boat.opposite(), crossings)
}

/// Valid successors of `s`, in [`loads`] order.
///
/// Successors past the crossing bound are rejected before any candidate is built. The result is
/// not deduplicated against anything.
pub fn successors(config: &PuzzleConfig, s: &PuzzleState) -> Vec<PuzzleState> {
    let crossings = match s.crossings.checked_add(1) {
        Some(n) if n <= config.max_crossings => n,
        _ => return Vec::new(),
    };

    loads(config.capacity)
        .map(|load| apply(s, load, crossings))
        .filter(|next| is_valid(config, next))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_follow_generation_order() {
        let got: Vec<(i32, i32)> = loads(2)
            .map(|l| (l.missionaries, l.cannibals))
            .collect();
        assert_eq!(got, vec![(0, 1), (0, 2), (1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn no_loads_for_a_boat_without_seats() {
        assert_eq!(loads(0).count(), 0);
        assert_eq!(loads(-3).count(), 0);
    }

    #[test]
    fn classic_opening_moves() {
        let cfg = PuzzleConfig::new(3, 2, 11);
        let next = successors(&cfg, &PuzzleState::initial(&cfg));
        let keys: Vec<(i32, i32)> = next.iter().map(|s| (s.missionaries, s.cannibals)).collect();
        // (1,0) would leave 2 missionaries with 3 cannibals; (2,0) leaves 1 with 3.
        assert_eq!(keys, vec![(3, 2), (3, 1), (2, 2)]);
        assert!(next.iter().all(|s| s.boat == BoatSide::Far && s.crossings == 1));
    }

    #[test]
    fn crossing_bound_cuts_everything() {
        let cfg = PuzzleConfig::new(3, 2, 0);
        assert!(successors(&cfg, &PuzzleState::initial(&cfg)).is_empty());
    }

    #[test]
    fn return_trips_add_people_back() {
        let cfg = PuzzleConfig::new(3, 2, 11);
        let s = PuzzleState::new(3, 1, BoatSide::Far, 1);
        let next = successors(&cfg, &s);
        assert!(next.contains(&PuzzleState::new(3, 2, BoatSide::Start, 2)));
        assert!(next.iter().all(|n| n.boat == BoatSide::Start));
    }
}
