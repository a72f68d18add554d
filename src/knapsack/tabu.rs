//! Tabu Search binding for the knapsack problem.
//!
//! The neighborhood of a bit vector is its complete Hamming-distance-1
//! neighborhood: one neighbor per item, obtained by flipping that item's bit.

use super::model::Knapsack;
use crate::ga::operators::random_bits;
use crate::tabu::{TabuConfig, TabuMove, TabuProblem, TabuResult, TabuRunner};
use rand::Rng;

/// All single-bit flips of `solution`, in index order.
///
/// Neighbor `i` differs from `solution` exactly at position `i`.
pub fn flip_neighbors(solution: &[bool]) -> Vec<Vec<bool>> {
    (0..solution.len())
        .map(|i| {
            let mut neighbor = solution.to_vec();
            neighbor[i] = !neighbor[i];
            neighbor
        })
        .collect()
}

impl TabuProblem for Knapsack {
    type Solution = Vec<bool>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        random_bits(self.len(), rng)
    }

    fn cost(&self, solution: &Vec<bool>) -> u64 {
        self.fitness(solution)
    }

    fn neighbors<R: Rng>(
        &self,
        solution: &Vec<bool>,
        _rng: &mut R,
    ) -> Vec<TabuMove<Vec<bool>>> {
        flip_neighbors(solution)
            .into_iter()
            .map(|neighbor| TabuMove {
                cost: self.fitness(&neighbor),
                solution: neighbor,
            })
            .collect()
    }
}

impl Knapsack {
    /// Runs the tabu solver on this instance.
    pub fn solve_tabu(&self, config: &TabuConfig) -> TabuResult<Vec<bool>> {
        TabuRunner::run(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::Item;
    use crate::random::create_rng;
    use crate::tabu::TabuList;
    use proptest::prelude::*;
    use std::sync::Mutex;

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
    fn test_neighbors_cover_every_position_once() {
        let current = vec![true, false, false, true, true];
        let neighbors = flip_neighbors(&current);

        assert_eq!(neighbors.len(), current.len());
        let mut covered = vec![0; current.len()];
        for neighbor in &neighbors {
            let diff: Vec<usize> = (0..current.len())
                .filter(|&i| neighbor[i] != current[i])
                .collect();
            assert_eq!(diff.len(), 1, "neighbor must differ in exactly one bit");
            covered[diff[0]] += 1;
        }
        assert_eq!(covered, vec![1; current.len()]);
    }

    #[test]
    fn test_neighbor_costs_use_fitness() {
        let knapsack = small_instance();
        let mut rng = create_rng(1);
        let moves = knapsack.neighbors(&vec![true, false, false, false], &mut rng);
        let costs: Vec<u64> = moves.iter().map(|m| m.cost).collect();
        // [], [0,1], [0,2] over, [0,3] over
        assert_eq!(costs, vec![0, 7, 0, 0]);
    }

    #[test]
    fn test_small_instance_reaches_optimum() {
        let knapsack = small_instance();
        let config = TabuConfig::default().with_seed(42);

        let result = knapsack.solve_tabu(&config);

        assert!(result.best_cost >= 7, "got {}", result.best_cost);
        assert_eq!(knapsack.fitness(&result.best), result.best_cost);
        assert!(result.iterations <= config.max_iterations);
    }

    /// Wraps the knapsack and records every solution the runner asks the
    /// neighborhood of, i.e. the trajectory of current solutions.
    struct Recording {
        inner: Knapsack,
        trajectory: Mutex<Vec<Vec<bool>>>,
    }

    impl TabuProblem for Recording {
        type Solution = Vec<bool>;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
            self.inner.initial_solution(rng)
        }

        fn cost(&self, solution: &Vec<bool>) -> u64 {
            self.inner.cost(solution)
        }

        fn neighbors<R: Rng>(
            &self,
            solution: &Vec<bool>,
            rng: &mut R,
        ) -> Vec<TabuMove<Vec<bool>>> {
            self.trajectory.lock().unwrap().push(solution.clone());
            self.inner.neighbors(solution, rng)
        }
    }

    #[test]
    fn test_never_adopts_a_tabu_solution() {
        let tabu_size = 3;
        let problem = Recording {
            inner: Knapsack::new(
                (1..=8).map(|i| Item::new(i, 10 - i)).collect(),
                12,
            ),
            trajectory: Mutex::new(Vec::new()),
        };
        let config = TabuConfig::default()
            .with_max_iterations(200)
            .with_tabu_size(tabu_size)
            .with_seed(7);

        let result = TabuRunner::run(&problem, &config);
        let trajectory = problem.trajectory.into_inner().unwrap();

        // Replay the tabu list: the initial solution is never inserted.
        let mut tabu = TabuList::new(tabu_size);
        for window in trajectory.windows(2) {
            let next = &window[1];
            assert!(!tabu.contains(next), "adopted a tabu solution: {next:?}");
            tabu.push(next.clone());
            assert!(tabu.len() <= tabu_size);
        }
        assert!(result.iterations <= 200);
    }

    #[test]
    fn test_best_never_regresses() {
        let knapsack = Knapsack::new((1..=10).map(|i| Item::new(i, i * 2 % 7 + 1)).collect(), 15);
        let config = TabuConfig::default().with_max_iterations(300).with_seed(3);

        let result = knapsack.solve_tabu(&config);

        let mut rng = create_rng(3);
        let initial = knapsack.initial_solution(&mut rng);
        let initial_cost = knapsack.fitness(&initial);

        assert!(result.best_cost >= initial_cost);
        for window in result.cost_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_empty_instance_terminates_immediately() {
        let knapsack = Knapsack::new(vec![], 10);
        let result = knapsack.solve_tabu(&TabuConfig::default().with_seed(1));
        assert!(result.best.is_empty());
        assert_eq!(result.iterations, 0);
        assert!(result.exhausted);
    }

    proptest! {
        #[test]
        fn prop_flip_neighbors_are_hamming_one(
            bits in prop::collection::vec(any::<bool>(), 0..40)
        ) {
            let neighbors = flip_neighbors(&bits);
            prop_assert_eq!(neighbors.len(), bits.len());
            for (i, neighbor) in neighbors.iter().enumerate() {
                for (j, (&a, &b)) in neighbor.iter().zip(&bits).enumerate() {
                    prop_assert_eq!(a != b, i == j);
                }
            }
        }
    }
}
