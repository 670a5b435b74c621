use river_crossing::core::config::PuzzleConfig;
use river_crossing::core::state::PuzzleState;
use river_crossing::rules::heuristic::Heuristic;
use river_crossing::rules::Rules;
use river_crossing::scenario::{Puzzle, ResourceLimits};
use river_crossing::scenarios;
use river_crossing::search::astar::{astar, BestFirst};
use river_crossing::solution::Outcome;

fn crossings_for(population: i32, capacity: i32, max_crossings: i32) -> Option<usize> {
    let puzzle = Puzzle::new(
        "known",
        PuzzleConfig::new(population, capacity, max_crossings),
    );
    puzzle
        .solve()
        .unwrap()
        .solution()
        .map(|s| s.crossings())
}

#[test]
fn classic_three_by_two_takes_eleven_crossings() {
    assert_eq!(crossings_for(3, 2, 11), Some(11));
    assert_eq!(crossings_for(3, 2, 100), Some(11));
}

#[test]
fn classic_with_short_budget_has_no_solution() {
    assert_eq!(crossings_for(3, 2, 3), None);
    // One below the optimum is already too little.
    assert_eq!(crossings_for(3, 2, 10), None);
}

#[test]
fn single_pair_crosses_in_one_trip() {
    assert_eq!(crossings_for(1, 2, 1), Some(1));
    assert_eq!(crossings_for(1, 2, 7), Some(1));
}

#[test]
fn two_of_each_need_five_crossings() {
    assert_eq!(crossings_for(2, 2, 5), Some(5));
    assert_eq!(crossings_for(2, 2, 1), None);
}

#[test]
fn two_seats_cannot_move_four_of_each() {
    assert_eq!(crossings_for(4, 2, 100), None);
    assert_eq!(crossings_for(5, 2, 100), None);
}

#[test]
fn one_seat_boats_never_finish() {
    assert_eq!(crossings_for(1, 1, 100), None);
    assert_eq!(crossings_for(2, 1, 100), None);
}

#[test]
fn larger_boats() {
    assert_eq!(crossings_for(2, 3, 100), Some(3));
    assert_eq!(crossings_for(3, 3, 100), Some(5));
    assert_eq!(crossings_for(4, 3, 100), Some(9));
    assert_eq!(crossings_for(5, 3, 100), Some(11));
    assert_eq!(crossings_for(6, 3, 100), None);
    assert_eq!(crossings_for(5, 4, 100), Some(7));
}

#[test]
fn built_in_puzzles_reach_their_known_optimum() {
    let expected = [
        ("classic", Some(11)),
        ("classic_tight", None),
        ("pair", Some(5)),
        ("single", Some(1)),
        ("four_by_three", Some(9)),
        ("five_by_three", Some(11)),
    ];
    for (name, crossings) in expected {
        let puzzle = scenarios::by_name(name).unwrap();
        let got = puzzle.solve().unwrap().solution().map(|s| s.crossings());
        assert_eq!(got, crossings, "{name}");
    }
}

#[test]
fn every_heuristic_agrees_on_the_optimum() {
    for (n, m) in [(2, 2), (3, 2), (3, 3), (4, 3), (5, 3), (6, 4)] {
        let config = PuzzleConfig::new(n, m, 100);
        let mut lengths = Heuristic::ALL.into_iter().map(|h| {
            let rules = Rules::new(config).with_heuristic(h);
            astar(&rules, PuzzleState::initial(&config), ResourceLimits::default())
                .unwrap()
                .path()
                .map(|p| p.cost())
        });
        let first = lengths.next().unwrap();
        assert!(first.is_some(), "N={n} M={m} should be solvable");
        assert!(lengths.all(|l| l == first), "N={n} M={m}");
    }
}

#[test]
fn repeated_runs_on_fresh_engines_agree() {
    let config = PuzzleConfig::new(3, 2, 11);
    let rules = Rules::new(config);
    let start = PuzzleState::initial(&config);

    let a = BestFirst::new(&rules, ResourceLimits::default())
        .search(start)
        .unwrap();
    let b = BestFirst::new(&rules, ResourceLimits::default())
        .search(start)
        .unwrap();

    let (pa, pb) = (a.path().unwrap(), b.path().unwrap());
    assert_eq!(pa.cost(), pb.cost());
    assert_eq!(pa.states().len(), pb.states().len());
    assert_eq!(a.stats().expanded, b.stats().expanded);
}

#[test]
fn goal_cost_matches_crossing_count() {
    let config = PuzzleConfig::new(3, 2, 11);
    let rules = Rules::new(config);
    let out = astar(&rules, PuzzleState::initial(&config), ResourceLimits::default()).unwrap();
    let path = out.path().unwrap();
    assert_eq!(path.cost(), 11);
    assert_eq!(path.goal().crossings, 11);
    assert!(path.goal().is_goal());
    assert_eq!(*path.initial(), PuzzleState::initial(&config));
}

#[test]
fn empty_puzzle_is_unsolvable_not_an_error() {
    // Nobody to row the boat across.
    match Puzzle::new("empty", PuzzleConfig::new(0, 2, 0)).solve().unwrap() {
        Outcome::Unsolvable { stats } => assert_eq!(stats.expanded, 1),
        Outcome::Solved(s) => panic!("unexpected solution: {s}"),
    }
}

#[test]
fn a_start_at_the_goal_returns_immediately() {
    let config = PuzzleConfig::new(3, 2, 11);
    let done = PuzzleState::new(0, 0, river_crossing::core::side::BoatSide::Far, 4);
    let out = Puzzle::new("done", config)
        .with_start(done)
        .solve()
        .unwrap();
    let solution = out.solution().unwrap();
    assert_eq!(solution.crossings(), 0);
    assert_eq!(solution.stats.expanded, 0);
}
