//! Generic best-first search and its bookkeeping.

pub mod astar;
pub mod problem;
pub mod resources;
pub mod stats;
