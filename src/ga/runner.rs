//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → replace.
//!
//! Replacement is fully generational. No individual survives into the next
//! generation unless it is selected again and passes through the operators.

use super::config::GaConfig;
use super::selection::total_fitness;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Result;
use crate::random::rng_from_seed;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The fittest individual of the final population.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population, then of each generation.
    ///
    /// Without elitism this sequence is not necessarily monotone.
    pub fitness_history: Vec<Fitness>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            max_generations = config.max_generations
        )
    )]
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        // 1. Initialize and evaluate
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(find_best(&population).fitness());

        // 2. Generational loop
        for gen in 0..config.max_generations {
            population = next_generation(problem, &population, config, rng);

            let best_fitness = find_best(&population).fitness();
            fitness_history.push(best_fitness);
            debug!(generation = gen + 1, best_fitness, "generation complete");

            problem.on_generation(gen + 1, best_fitness);
        }

        // 3. Extract best of the final population
        let best = find_best(&population).clone();
        info!(
            best_fitness = best.fitness(),
            generations = config.max_generations,
            "genetic search finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

/// Breeds and evaluates a complete replacement population.
///
/// Every slot gets one offspring: parent1 via `config.first_parent`,
/// parent2 via `config.second_parent`, recombined with probability
/// `crossover_rate` (otherwise a 50/50 copy of either parent), then mutated.
pub(crate) fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut offspring = Vec::with_capacity(config.population_size);
    let total = total_fitness(population);

    for _ in 0..config.population_size {
        let first = config.first_parent.select_with_total(population, total, rng);
        let second = config.second_parent.select_with_total(population, total, rng);
        let parent1 = &population[first];
        let parent2 = &population[second];

        let mut child = if rng.random_bool(config.crossover_rate) {
            problem.crossover(parent1, parent2, rng)
        } else if rng.random_bool(0.5) {
            parent1.clone()
        } else {
            parent2.clone()
        };

        problem.mutate(&mut child, config.mutation_rate, rng);
        offspring.push(child);
    }

    // Selection above only read the previous generation's fitness.
    evaluate_population(problem, &mut offspring, config.parallel);
    offspring
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the first individual with the highest fitness.
fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .reduce(|best, ind| {
            if ind.fitness() > best.fitness() {
                ind
            } else {
                best
            }
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
