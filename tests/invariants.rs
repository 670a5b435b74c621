use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use river_crossing::core::config::PuzzleConfig;
use river_crossing::core::side::BoatSide;
use river_crossing::core::state::PuzzleState;
use river_crossing::rules::movegen::successors;
use river_crossing::rules::safety::is_valid;
use river_crossing::rules::Rules;
use river_crossing::scenario::Puzzle;

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

/// Every valid identity of a puzzle, paired with a few crossing counts.
fn valid_states(config: &PuzzleConfig) -> Vec<PuzzleState> {
    let mut out = Vec::new();
    for m in 0..=config.population {
        for c in 0..=config.population {
            for boat in [BoatSide::Start, BoatSide::Far] {
                for crossings in [0, config.max_crossings / 2, config.max_crossings] {
                    let s = PuzzleState::new(m, c, boat, crossings);
                    if is_valid(config, &s) {
                        out.push(s);
                    }
                }
            }
        }
    }
    out
}

#[test]
fn successors_are_valid_and_within_the_bound() {
    for n in 0..=6 {
        for m in 1..=4 {
            for k in [0, 1, 5, 11] {
                let config = PuzzleConfig::new(n, m, k);
                for s in valid_states(&config) {
                    for next in successors(&config, &s) {
                        assert!(is_valid(&config, &next), "{config:?}: {s:?} -> {next:?}");
                        assert!(next.crossings <= k, "{config:?}: {s:?} -> {next:?}");
                        assert_eq!(next.crossings, s.crossings + 1);
                        assert_eq!(next.boat, s.boat.opposite());
                        let moved = (next.missionaries - s.missionaries).abs()
                            + (next.cannibals - s.cannibals).abs();
                        assert!((1..=m).contains(&moved));
                    }
                }
            }
        }
    }
}

#[test]
fn successors_respect_the_boat_direction() {
    let config = PuzzleConfig::new(5, 3, 20);
    for s in valid_states(&config) {
        for next in successors(&config, &s) {
            match s.boat {
                BoatSide::Start => {
                    assert!(next.missionaries <= s.missionaries);
                    assert!(next.cannibals <= s.cannibals);
                }
                BoatSide::Far => {
                    assert!(next.missionaries >= s.missionaries);
                    assert!(next.cannibals >= s.cannibals);
                }
            }
        }
    }
}

#[test]
fn identity_ignores_crossings() {
    let a = PuzzleState::new(2, 1, BoatSide::Far, 3);
    let b = PuzzleState::new(2, 1, BoatSide::Far, 9);
    assert_eq!(a, b);
    assert_eq!(a.key(), b.key());
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut set = FxHashSet::default();
    set.insert(a);
    assert!(set.contains(&b));

    let other_side = PuzzleState::new(2, 1, BoatSide::Start, 3);
    assert_ne!(a, other_side);
}

#[test]
fn outnumbered_missionaries_are_rejected() {
    for n in 2..=8 {
        let config = PuzzleConfig::new(n, 2, 100);
        for boat in [BoatSide::Start, BoatSide::Far] {
            let s = PuzzleState::new(1, 2, boat, 0);
            assert!(!is_valid(&config, &s), "N={n}");
            assert!(!Rules::new(config).is_valid(&s), "N={n}");
        }
    }
}

#[test]
fn malformed_parameters_yield_no_moves() {
    let empty = PuzzleState::new(0, 0, BoatSide::Start, 0);
    assert!(successors(&PuzzleConfig::new(-2, 2, 5), &empty).is_empty());

    let full = PuzzleState::new(3, 3, BoatSide::Start, 0);
    assert!(successors(&PuzzleConfig::new(3, 0, 5), &full).is_empty());
    assert!(successors(&PuzzleConfig::new(3, 2, -1), &full).is_empty());
}

#[test]
fn solution_paths_are_chains_of_legal_crossings() {
    for (n, m, k) in [(3, 2, 11), (2, 2, 5), (4, 3, 9), (5, 4, 20)] {
        let config = PuzzleConfig::new(n, m, k);
        let outcome = Puzzle::new("chain", config).solve().unwrap();
        let solution = outcome.solution().expect("solvable");
        let states = solution.states();

        assert_eq!(states[0], PuzzleState::initial(&config));
        assert!(solution.goal().is_goal());
        for (i, w) in states.windows(2).enumerate() {
            assert!(successors(&config, &w[0]).contains(&w[1]), "step {i}");
            assert_eq!(w[1].crossings, w[0].crossings + 1);
        }
        assert!(solution.crossings() as i32 <= k);
    }
}
