use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scenario::ResourceCounts;

/// Counters reported by a finished search run, whatever its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub expanded: u64,
    /// Successors pushed onto the frontier.
    pub generated: u64,
    /// Pops whose identity had already been expanded.
    pub stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_peak: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    pub(crate) fn from_counts(counts: ResourceCounts, stale_pops: u64, elapsed: Duration) -> Self {
        Self {
            expanded: counts.expanded,
            generated: counts.generated,
            stale_pops,
            frontier_peak: counts.frontier_peak,
            elapsed,
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded={} generated={} stale_pops={} frontier_peak={} elapsed={}ms",
            self.expanded,
            self.generated,
            self.stale_pops,
            self.frontier_peak,
            self.elapsed.as_millis()
        )
    }
}
