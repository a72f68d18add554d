//! Core trait definitions for the GA engine.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generational loop in [`GaRunner`](super::GaRunner)
//! and a concrete problem encoding.

use rand::Rng;

/// Fitness score of an individual. Higher is better.
///
/// Scores are non-negative so that roulette selection can weigh
/// individuals directly by their fitness.
pub type Fitness = u64;

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] once per individual and stores the result via
/// [`set_fitness`](Individual::set_fitness), so selection never
/// re-evaluates.
pub trait Individual: Clone + Send + Sync {
    /// Returns the cached fitness of this individual.
    fn fitness(&self) -> Fitness;

    /// Stores the evaluated fitness.
    fn set_fitness(&mut self, fitness: Fitness);
}

/// Defines a GA optimization problem.
///
/// Implementors describe how to create random individuals, how to score
/// them, and how to recombine and perturb them. The runner owns every
/// decision about *when* these operators apply (crossover rate, parent
/// selection, replacement).
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate a
/// population in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual. It does not need to be feasible.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual.
    fn evaluate(&self, individual: &Self::Individual) -> Fitness;

    /// Recombines two parents into exactly one offspring.
    ///
    /// Only called when the runner has decided recombination happens;
    /// the no-crossover path copies a parent without calling this.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Mutates an offspring in place. `rate` is the configured mutation rate.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rate: f64, rng: &mut R);

    /// Called at the end of each generation with the best fitness of the
    /// new population. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Fitness) {}
}
