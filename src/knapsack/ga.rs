//! Genetic Algorithm binding for the knapsack problem.

use super::model::Knapsack;
use crate::error::Result;
use crate::ga::operators::{bit_flip_mutation, random_bits, random_crossover};
use crate::ga::{Fitness, GaConfig, GaProblem, GaResult, GaRunner, Individual};
use rand::Rng;

/// A bit-vector individual with its cached fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    pub bits: Vec<bool>,
    pub fitness: Fitness,
}

impl Chromosome {
    /// Wraps `bits` with an unevaluated (zero) fitness.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits, fitness: 0 }
    }
}

impl Individual for Chromosome {
    fn fitness(&self) -> Fitness {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }
}

impl GaProblem for Knapsack {
    type Individual = Chromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::new(random_bits(self.len(), rng))
    }

    fn evaluate(&self, individual: &Chromosome) -> Fitness {
        self.fitness(&individual.bits)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        Chromosome::new(random_crossover(&parent1.bits, &parent2.bits, rng))
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rate: f64, rng: &mut R) {
        bit_flip_mutation(&mut individual.bits, rate, rng);
    }
}

impl Knapsack {
    /// Runs the genetic solver on this instance.
    pub fn solve_genetic(&self, config: &GaConfig) -> Result<GaResult<Chromosome>> {
        GaRunner::run(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::Item;
    use crate::random::create_rng;

    fn small_instance() -> Knapsack {
        Knapsack::new(
            vec![
                Item::new(2, 3),
                Item::new(3, 4),
                Item::new(4, 5),
                Item::new(5, 6),
            ],
            5,
        )
    }

    #[test]
    fn test_small_instance_reaches_optimum() {
        let knapsack = small_instance();
        let config = GaConfig::default().with_seed(42);

        let result = knapsack.solve_genetic(&config).unwrap();

        assert!(result.best_fitness >= 7, "got {}", result.best_fitness);
        assert_eq!(result.best.bits.len(), 4);
        assert_eq!(knapsack.fitness(&result.best.bits), result.best_fitness);
    }

    #[test]
    fn test_individuals_match_item_count() {
        let knapsack = small_instance();
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let ind = knapsack.create_individual(&mut rng);
            assert_eq!(ind.bits.len(), knapsack.len());
        }
    }

    #[test]
    fn test_evaluate_uses_zeroing_rule() {
        let knapsack = small_instance();
        assert_eq!(knapsack.evaluate(&Chromosome::new(vec![true, true, false, false])), 7);
        assert_eq!(knapsack.evaluate(&Chromosome::new(vec![true, true, true, false])), 0);
    }

    #[test]
    fn test_crossover_preserves_length_and_parents() {
        let knapsack = small_instance();
        let p1 = Chromosome::new(vec![true; 4]);
        let p2 = Chromosome::new(vec![false; 4]);
        let mut rng = create_rng(11);

        let child = knapsack.crossover(&p1, &p2, &mut rng);

        assert_eq!(child.bits.len(), 4);
        assert!(child.bits[0], "first bit always comes from parent1");
        assert!(!child.bits[3], "last bit always comes from parent2");
        assert_eq!(p1.bits, vec![true; 4]);
        assert_eq!(p2.bits, vec![false; 4]);
    }

    #[test]
    fn test_all_infeasible_instance_still_returns() {
        // Every item is heavier than the capacity, so every non-empty packing
        // scores zero and roulette keeps falling back to the last individual.
        let knapsack = Knapsack::new(vec![Item::new(10, 1); 6], 5);
        let config = GaConfig::default().with_max_generations(20).with_seed(1);

        let result = knapsack.solve_genetic(&config).unwrap();

        assert_eq!(result.best_fitness, 0);
        assert_eq!(result.best.bits.len(), 6);
    }
}
