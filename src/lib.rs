//! 0/1 knapsack optimization with two metaheuristics.
//!
//! - **Genetic Algorithm (GA)**: Generational evolution of a bit-string
//!   population with tournament and roulette selection, single-point
//!   crossover, and bit-flip mutation.
//! - **Tabu Search (TS)**: Best-improvement walk over the single-bit-flip
//!   neighborhood, with a bounded FIFO memory of recently visited
//!   solutions that may not be revisited.
//!
//! Both solvers optimize the same objective: the total value of the packed
//! items, or zero when their total weight exceeds the capacity.
//!
//! # Architecture
//!
//! The [`ga`] and [`tabu`] engines are problem-agnostic and driven through
//! the [`ga::GaProblem`] and [`tabu::TabuProblem`] traits. The [`knapsack`]
//! module supplies the problem model, implements both traits for it, and
//! provides the text-file I/O used by the `knapsack` binary. All randomness
//! flows from one seedable generator ([`random`]).

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;
pub mod tabu;

pub use error::{Error, Result};
