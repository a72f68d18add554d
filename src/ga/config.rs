//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use knapsack_metaheur::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.first_parent, Selection::Tournament(5));
/// assert_eq!(config.second_parent, Selection::Roulette);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run. Zero returns the best of the
    /// initial population.
    pub max_generations: usize,

    /// Strategy for the first parent of each offspring.
    pub first_parent: Selection,

    /// Strategy for the second parent of each offspring.
    pub second_parent: Selection,

    /// Probability that two parents are actually recombined (0.0–1.0).
    ///
    /// Otherwise one of the two parents, chosen 50/50, is copied.
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate populations in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Evaluation is
    /// pure, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 500,
            first_parent: Selection::Tournament(5),
            second_parent: Selection::Roulette,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy for both parents.
    pub fn with_selection(mut self, first: Selection, second: Selection) -> Self {
        self.first_parent = first;
        self.second_parent = second;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Rates set through the builders are already clamped; fields assigned
    /// directly (or deserialized) are checked here.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must lie in [0, 1], got {rate}"
                )));
            }
        }
        for selection in [self.first_parent, self.second_parent] {
            if selection == Selection::Tournament(0) {
                return Err(Error::InvalidConfig(
                    "tournament size must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }
}
