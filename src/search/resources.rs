//! Budget tracking and allocation guards for the search engine.
//!
//! The engine never decreases keys, so the frontier can grow beyond the number of distinct
//! identities. To keep runaway instances from aborting the process, the engine:
//! - bumps counters against [`crate::scenario::ResourceLimits`]
//! - grows its arena and frontier through `try_reserve` and reports failures as
//!   [`crate::scenario::SearchError`]
//! - checks an optional wall-clock deadline every [`CLOCK_CHECK_INTERVAL`] expansions

use std::collections::BinaryHeap;
use std::time::Instant;

use crate::scenario::{ResourceCounts, ResourceLimits, SearchError};

/// Expansions between two reads of the clock.
pub const CLOCK_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
    started: Instant,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Count one expansion; every [`CLOCK_CHECK_INTERVAL`] expansions also check the deadline.
    pub fn bump_expansions(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.bump(stage, "expanded", 1, self.limits.max_expansions, |c| {
            &mut c.expanded
        })?;
        if self.counts.expanded % CLOCK_CHECK_INTERVAL == 0 {
            self.check_clock()?;
        }
        Ok(())
    }

    #[inline]
    pub fn bump_generated(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "generated",
            delta as u64,
            self.limits.max_generated,
            |c| &mut c.generated,
        )
    }

    /// Record the current frontier size.
    pub fn observe_frontier(&mut self, stage: &'static str, len: usize) -> Result<(), SearchError> {
        let observed = len as u64;
        if observed > self.counts.frontier_peak {
            self.counts.frontier_peak = observed;
        }
        let limit = self.limits.max_frontier as u64;
        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric: "frontier",
                limit,
                observed,
                counts: self.counts,
            });
        }
        Ok(())
    }

    pub fn check_clock(&self) -> Result<(), SearchError> {
        match self.limits.time_limit {
            Some(limit) if self.started.elapsed() > limit => Err(SearchError::TimedOut {
                limit,
                counts: self.counts,
            }),
            _ => Ok(()),
        }
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        v.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_heap<T: Ord>(
        &self,
        stage: &'static str,
        structure: &'static str,
        heap: &mut BinaryHeap<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        heap.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut rustc_hash::FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn expansion_budget_is_inclusive() {
        let limits = ResourceLimits {
            max_expansions: 2,
            ..ResourceLimits::unbounded()
        };
        let mut tracker = ResourceTracker::new(limits);
        assert!(tracker.bump_expansions("test").is_ok());
        assert!(tracker.bump_expansions("test").is_ok());
        match tracker.bump_expansions("test") {
            Err(SearchError::LimitExceeded {
                metric, observed, ..
            }) => {
                assert_eq!(metric, "expanded");
                assert_eq!(observed, 3);
            }
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn frontier_peak_is_monotone() {
        let mut tracker = ResourceTracker::new(ResourceLimits::unbounded());
        tracker.observe_frontier("test", 7).unwrap();
        tracker.observe_frontier("test", 3).unwrap();
        assert_eq!(tracker.counts().frontier_peak, 7);
    }

    #[test]
    fn zero_time_limit_trips_the_clock() {
        let limits = ResourceLimits {
            time_limit: Some(Duration::ZERO),
            ..ResourceLimits::unbounded()
        };
        let tracker = ResourceTracker::new(limits);
        std::thread::sleep(Duration::from_millis(2));
        assert!(matches!(
            tracker.check_clock(),
            Err(SearchError::TimedOut { .. })
        ));
    }
}
