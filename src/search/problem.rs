use std::fmt::Debug;
use std::hash::Hash;

/// A state space the best-first engine can explore.
///
/// Implementors supply the transition model; the engine owns all bookkeeping (frontier, closed
/// set, predecessor links). Costs and estimates are non-negative by construction.
pub trait ProblemLike {
    type State: Clone + Debug;
    /// Duplicate-detection identity. May be coarser than the state itself.
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self, s: &Self::State) -> Self::Key;

    fn is_goal(&self, s: &Self::State) -> bool;

    /// Lower bound on the remaining cost to a goal.
    fn estimate(&self, s: &Self::State) -> u32;

    /// Cost of the transition `from -> to`.
    fn cost(&self, from: &Self::State, to: &Self::State) -> u32;

    fn successors(&self, s: &Self::State) -> Vec<Self::State>;

    /// Expected number of distinct keys, used to presize the closed set.
    #[inline]
    fn capacity_hint(&self) -> usize {
        0
    }
}
