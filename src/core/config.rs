use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Puzzle parameters shared read-only by every state of one run.
///
/// - `population`: members per class (N), all initially on the starting bank
/// - `capacity`: maximum people per crossing (M)
/// - `max_crossings`: crossing budget (K); states beyond it are never admitted
///
/// The rules and the search do not validate these values; out-of-range parameters only yield
/// an empty or meaningless successor set. Boundaries (CLIs, [`crate::scenario::Puzzle`]) call
/// [`PuzzleConfig::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub population: i32,
    pub capacity: i32,
    pub max_crossings: i32,
}

/// Rejections produced by [`PuzzleConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("population must be >= 0 (got {0})")]
    NegativePopulation(i32),
    #[error("boat capacity must be >= 1 (got {0})")]
    CapacityTooSmall(i32),
    #[error("maximum number of crossings must be >= 0 (got {0})")]
    NegativeCrossingBound(i32),
    #[error("start state is not valid: {reason}")]
    InvalidStart { reason: String },
}

impl PuzzleConfig {
    #[inline]
    pub const fn new(population: i32, capacity: i32, max_crossings: i32) -> Self {
        Self {
            population,
            capacity,
            max_crossings,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population < 0 {
            return Err(ConfigError::NegativePopulation(self.population));
        }
        if self.capacity < 1 {
            return Err(ConfigError::CapacityTooSmall(self.capacity));
        }
        if self.max_crossings < 0 {
            return Err(ConfigError::NegativeCrossingBound(self.max_crossings));
        }
        Ok(())
    }

    /// Number of distinct (missionaries, cannibals, boat) identities; an upper bound on the
    /// closed set size.
    #[inline]
    pub fn identity_count(&self) -> usize {
        let per_class = self.population.max(0) as usize + 1;
        per_class * per_class * 2
    }
}
