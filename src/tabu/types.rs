//! Core trait and memory structure for Tabu Search problems.

use rand::Rng;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// A candidate move: the neighbor it leads to and that neighbor's cost.
#[derive(Debug, Clone, PartialEq)]
pub struct TabuMove<S: Clone> {
    /// The resulting solution after applying this move.
    pub solution: S,
    /// Cost of the resulting solution (higher is better).
    pub cost: u64,
}

/// Defines a maximization problem for Tabu Search.
///
/// Users implement this trait to specify:
/// - How to create an initial solution
/// - How to evaluate a solution's cost
/// - How to enumerate the neighborhood of a solution
///
/// Solutions themselves are stored in the tabu list, so they must be
/// comparable and hashable.
pub trait TabuProblem: Send + Sync {
    /// The solution type.
    type Solution: Clone + Eq + Hash + Send;

    /// Creates an initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Evaluates the cost of a solution (higher is better).
    fn cost(&self, solution: &Self::Solution) -> u64;

    /// Generates the neighborhood of `solution` together with each
    /// neighbor's cost.
    ///
    /// The order matters: among equally good admissible neighbors the
    /// runner adopts the first one.
    fn neighbors<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Vec<TabuMove<Self::Solution>>;
}

/// Bounded short-term memory of recently adopted solutions.
///
/// Entries are kept in insertion order. Pushing past `capacity` evicts the
/// oldest entry. A capacity of zero remembers nothing.
///
/// ```
/// use knapsack_metaheur::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push("a");
/// tabu.push("b");
/// assert_eq!(tabu.push("c"), Some("a"));
/// assert!(!tabu.contains(&"a"));
/// assert!(tabu.contains(&"c"));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList<S> {
    capacity: usize,
    queue: VecDeque<S>,
    members: HashSet<S>,
}

impl<S: Clone + Eq + Hash> TabuList<S> {
    /// Creates an empty list holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity + 1),
            members: HashSet::with_capacity(capacity + 1),
        }
    }

    /// Returns `true` if `solution` is currently forbidden.
    pub fn contains(&self, solution: &S) -> bool {
        self.members.contains(solution)
    }

    /// Records `solution`, returning the evicted oldest entry if the list
    /// overflowed.
    pub fn push(&mut self, solution: S) -> Option<S> {
        self.members.insert(solution.clone());
        self.queue.push_back(solution);

        if self.queue.len() > self.capacity {
            let oldest = self.queue.pop_front()?;
            if !self.queue.contains(&oldest) {
                self.members.remove(&oldest);
            }
            Some(oldest)
        } else {
            None
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.queue.iter()
    }
}
