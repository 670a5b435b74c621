//! Shortest solutions to the generalised missionaries-and-cannibals river crossing.
//!
//! Two classes of N people cross a river in a boat seating at most M, never leaving the
//! missionaries outnumbered on either bank, within at most K crossings. The transition model
//! lives in [`rules`]; [`search`] is a generic A* engine that explores it.

pub mod core;
pub mod rules;
pub mod scenario;
pub mod scenarios;
pub mod search;
pub mod solution;
