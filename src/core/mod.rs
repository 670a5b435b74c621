//! Plain value types shared by the rules and the search.
//!
//! Everything here is `Copy`, hash-friendly and free of global state:
//!
//! - [`side`]: which bank the boat is moored at.
//! - [`config`]: the puzzle parameters (population, boat capacity, crossing bound).
//! - [`state`]: a single puzzle configuration plus its identity projection [`state::StateKey`].

pub mod config;
pub mod side;
pub mod state;
