//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate an initial solution (also the initial best)
//! 2. At each iteration:
//!    a. Generate the full neighborhood of the current solution
//!    b. Drop neighbors present in the tabu list
//!    c. Move to the first neighbor with the strictly greatest cost
//!    d. Update the best solution on strict improvement
//!    e. Push the adopted solution onto the tabu list
//! 3. Terminate after max iterations, or as soon as no neighbor is admissible
//!
//! There is no aspiration criterion: a tabu neighbor is never adopted, even
//! if it would improve the best solution.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use super::config::TabuConfig;
use super::types::{TabuList, TabuMove, TabuProblem};
use crate::random::rng_from_seed;
use rand::Rng;
use std::hash::Hash;
use tracing::{debug, info, instrument};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: u64,
    /// Number of moves performed.
    pub iterations: usize,
    /// Iteration (1-based) at which the best solution was adopted;
    /// 0 if the initial solution was never improved upon.
    pub best_iteration: usize,
    /// Best cost after each performed iteration.
    pub cost_history: Vec<u64>,
    /// Whether the search stopped because every neighbor was tabu.
    pub exhausted: bool,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_metaheur::tabu::{TabuConfig, TabuMove, TabuProblem, TabuRunner};
    /// use rand::Rng;
    ///
    /// struct Line;
    /// impl TabuProblem for Line {
    ///     type Solution = u32;
    ///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> u32 { 0 }
    ///     fn cost(&self, &x: &u32) -> u64 { u64::from(x.min(10)) }
    ///     fn neighbors<R: Rng>(&self, &x: &u32, _rng: &mut R) -> Vec<TabuMove<u32>> {
    ///         vec![TabuMove { solution: x + 1, cost: self.cost(&(x + 1)) }]
    ///     }
    /// }
    ///
    /// let result = TabuRunner::run(&Line, &TabuConfig::default().with_max_iterations(20));
    /// assert_eq!(result.best, 10);
    /// assert_eq!(result.iterations, 20);
    /// ```
    pub fn run<P: TabuProblem>(problem: &P, config: &TabuConfig) -> TabuResult<P::Solution> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Executes Tabu Search drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(
        level = "debug",
        skip_all,
        fields(max_iterations = config.max_iterations, tabu_size = config.tabu_size)
    )]
    pub fn run_with_rng<P: TabuProblem, R: Rng>(
        problem: &P,
        config: &TabuConfig,
        rng: &mut R,
    ) -> TabuResult<P::Solution> {
        // Initialize
        let mut current = problem.initial_solution(rng);
        let mut best = current.clone();
        let mut best_cost = problem.cost(&current);
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_size);
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut exhausted = false;

        for iteration in 1..=config.max_iterations {
            let neighbors = problem.neighbors(&current, rng);

            let Some(mv) = best_admissible(neighbors, &tabu) else {
                debug!(iteration, "no admissible neighbor, stopping");
                exhausted = true;
                break;
            };

            // Move to neighbor
            current = mv.solution;
            let current_cost = mv.cost;

            // Update global best
            if current_cost > best_cost {
                best = current.clone();
                best_cost = current_cost;
                best_iteration = iteration;
            }

            tabu.push(current.clone());
            cost_history.push(best_cost);
            debug!(iteration, current_cost, best_cost, "move applied");
        }

        info!(
            best_cost,
            iterations = cost_history.len(),
            best_iteration,
            exhausted,
            "tabu search finished"
        );

        TabuResult {
            best,
            best_cost,
            iterations: cost_history.len(),
            best_iteration,
            cost_history,
            exhausted,
        }
    }
}

/// Picks the first non-tabu move with the strictly greatest cost.
///
/// Returns `None` when every move is tabu (or there are none).
pub(crate) fn best_admissible<S: Clone + Eq + Hash>(
    neighbors: Vec<TabuMove<S>>,
    tabu: &TabuList<S>,
) -> Option<TabuMove<S>> {
    let mut chosen: Option<TabuMove<S>> = None;
    for mv in neighbors {
        if tabu.contains(&mv.solution) {
            continue;
        }
        match &chosen {
            Some(best) if mv.cost <= best.cost => {}
            _ => chosen = Some(mv),
        }
    }
    chosen
}
