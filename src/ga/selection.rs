//! Parent selection strategies.
//!
//! Both strategies assume **maximization**: a higher fitness is better.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Fitness, Individual};
use rand::seq::index;
use rand::Rng;

/// Strategy for choosing one parent from a population.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::ga::Selection;
///
/// let first = Selection::Tournament(5);
/// let second = Selection::Roulette;
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Selection {
    /// Sample `k` distinct individuals (or the whole population if it is
    /// smaller) and keep the fittest. The first one encountered wins ties.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// When every individual scores zero, the last individual is returned.
    ///
    /// # Complexity
    /// O(n) per selection. Summing the population is another O(n), which
    /// [`Selection::select_with_total`] lets callers pay once per generation.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(5)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, total_fitness(population), rng),
        }
    }

    /// Like [`select`](Self::select), with the population's
    /// [`total_fitness`] already computed.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_with_total<I: Individual, R: Rng>(
        &self,
        population: &[I],
        total: Fitness,
        rng: &mut R,
    ) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, total, rng),
        }
    }
}

/// Saturating sum of the population's fitness.
pub fn total_fitness<I: Individual>(population: &[I]) -> Fitness {
    population
        .iter()
        .fold(0, |acc: Fitness, ind| acc.saturating_add(ind.fitness()))
}

/// Tournament selection without replacement.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let size = k.clamp(1, n);

    let mut best: Option<(usize, Fitness)> = None;
    for idx in index::sample(rng, n, size) {
        let fitness = population[idx].fitness();
        match best {
            Some((_, f)) if fitness <= f => {}
            _ => best = Some((idx, fitness)),
        }
    }
    best.map_or(n - 1, |(idx, _)| idx)
}

/// Roulette wheel selection on raw fitness.
fn roulette<I: Individual, R: Rng>(population: &[I], total: Fitness, rng: &mut R) -> usize {
    let last = population.len() - 1;
    if total == 0 {
        return last;
    }

    let threshold = rng.random_range(0.0..total as f64);
    let mut cumulative: Fitness = 0;
    for (i, ind) in population.iter().enumerate() {
        cumulative = cumulative.saturating_add(ind.fitness());
        if cumulative as f64 >= threshold {
            return i;
        }
    }

    last // floating-point fallback
}
