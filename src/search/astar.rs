//! Best-first (A*) search over any [`ProblemLike`].
//!
//! The frontier is ordered by `f = g + h`, ties by insertion order. There is no decrease-key:
//! successors are pushed unconditionally and an identity that was already expanded is skipped
//! when it is popped again. States live in an arena owned by the engine; predecessor links are
//! arena indices used only to rebuild the path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::scenario::{ResourceLimits, SearchError};
use crate::search::problem::ProblemLike;
use crate::search::resources::ResourceTracker;
use crate::search::stats::SearchStats;

type NodeId = usize;

/// Upper bound on up-front reservations; larger instances grow on demand.
const PRESIZE_CAP: usize = 1 << 16;

#[derive(Debug, Clone)]
struct Node<S> {
    state: S,
    g: u64,
    parent: Option<NodeId>,
}

/// Frontier entry. `Ord` is reversed so the max-heap pops the smallest `f` first and, among
/// equal `f`, the earliest insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    f: u64,
    seq: u64,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The states from the initial state to a goal, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalPath<S> {
    states: Vec<S>,
    cost: u64,
}

impl<S> GoalPath<S> {
    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn into_states(self) -> Vec<S> {
        self.states
    }

    /// Accumulated cost (`g`) of the goal.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn initial(&self) -> &S {
        &self.states[0]
    }

    pub fn goal(&self) -> &S {
        &self.states[self.states.len() - 1]
    }
}

/// Result of a search run. Running out of frontier is a normal outcome, not an error.
#[derive(Debug, Clone)]
pub enum SearchOutcome<S> {
    Found { path: GoalPath<S>, stats: SearchStats },
    Exhausted { stats: SearchStats },
}

impl<S> SearchOutcome<S> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&GoalPath<S>> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::Exhausted { stats } => stats,
        }
    }
}

/// A single-use A* engine. [`BestFirst::search`] consumes it, so every run starts from an empty
/// frontier and closed set.
pub struct BestFirst<'p, P: ProblemLike> {
    problem: &'p P,
    arena: Vec<Node<P::State>>,
    frontier: BinaryHeap<Entry>,
    closed: FxHashSet<P::Key>,
    tracker: ResourceTracker,
    next_seq: u64,
    stale_pops: u64,
}

impl<'p, P: ProblemLike> BestFirst<'p, P> {
    pub fn new(problem: &'p P, limits: ResourceLimits) -> Self {
        Self {
            problem,
            arena: Vec::new(),
            frontier: BinaryHeap::new(),
            closed: FxHashSet::default(),
            tracker: ResourceTracker::new(limits),
            next_seq: 0,
            stale_pops: 0,
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn search(mut self, initial: P::State) -> Result<SearchOutcome<P::State>, SearchError> {
        if self.problem.is_goal(&initial) {
            debug!("initial state is already a goal");
            return Ok(SearchOutcome::Found {
                path: GoalPath {
                    states: vec![initial],
                    cost: 0,
                },
                stats: self.stats(),
            });
        }

        let hint = self.problem.capacity_hint().min(PRESIZE_CAP);
        self.tracker
            .try_reserve_set("astar_init", "closed", &mut self.closed, hint)?;
        self.tracker
            .try_reserve_vec("astar_init", "arena", &mut self.arena, hint)?;

        let root = self.alloc(initial, 0, None);
        self.push(root)?;

        while let Some(entry) = self.frontier.pop() {
            let (state, g) = {
                let node = &self.arena[entry.node];
                (node.state.clone(), node.g)
            };

            if self.problem.is_goal(&state) {
                let path = self.trace_back(entry.node);
                let stats = self.stats();
                debug!(cost = path.cost, steps = path.states.len() - 1, %stats, "goal reached");
                return Ok(SearchOutcome::Found { path, stats });
            }

            if !self.closed.insert(self.problem.key(&state)) {
                self.stale_pops += 1;
                continue;
            }

            self.tracker.bump_expansions("astar_expand")?;
            trace!(node = entry.node, f = entry.f, g = g, state = ?state, "expand");

            let successors = self.problem.successors(&state);
            self.tracker
                .bump_generated("astar_expand", successors.len())?;
            self.tracker.try_reserve_vec(
                "astar_expand",
                "arena",
                &mut self.arena,
                successors.len(),
            )?;
            self.tracker.try_reserve_heap(
                "astar_expand",
                "frontier",
                &mut self.frontier,
                successors.len(),
            )?;

            for next in successors {
                let step = u64::from(self.problem.cost(&state, &next));
                let id = self.alloc(next, g + step, Some(entry.node));
                self.push(id)?;
            }
        }

        let stats = self.stats();
        debug!(%stats, "frontier exhausted without reaching a goal");
        Ok(SearchOutcome::Exhausted { stats })
    }

    fn alloc(&mut self, state: P::State, g: u64, parent: Option<NodeId>) -> NodeId {
        let id = self.arena.len();
        self.arena.push(Node { state, g, parent });
        id
    }

    fn push(&mut self, node: NodeId) -> Result<(), SearchError> {
        let n = &self.arena[node];
        let f = n.g + u64::from(self.problem.estimate(&n.state));
        self.frontier.push(Entry {
            f,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
        self.tracker
            .observe_frontier("astar_push", self.frontier.len())
    }

    fn trace_back(&self, goal: NodeId) -> GoalPath<P::State> {
        let mut states = Vec::new();
        let mut cursor = Some(goal);
        while let Some(id) = cursor {
            let node = &self.arena[id];
            states.push(node.state.clone());
            cursor = node.parent;
        }
        states.reverse();
        GoalPath {
            states,
            cost: self.arena[goal].g,
        }
    }

    fn stats(&self) -> SearchStats {
        SearchStats::from_counts(
            self.tracker.counts(),
            self.stale_pops,
            self.tracker.started().elapsed(),
        )
    }
}

/// Run a fresh [`BestFirst`] engine from `initial`.
pub fn astar<P: ProblemLike>(
    problem: &P,
    initial: P::State,
    limits: ResourceLimits,
) -> Result<SearchOutcome<P::State>, SearchError> {
    BestFirst::new(problem, limits).search(initial)
}
