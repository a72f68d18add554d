//! Genetic Algorithm engine.
//!
//! A generational GA built on trait-based abstractions. Problems plug in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! recombine, and mutate individuals. The runner decides when each operator
//! applies.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its cached fitness
//! - [`GaProblem`]: Problem definition (initialization, evaluation, operators)
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, rates, parent selection, seed
//! - [`Selection`]: Tournament and roulette wheel selection
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best individual of the final population plus statistics
//!
//! # Submodules
//!
//! - [`operators`]: Bit-string initialization, single-point crossover,
//!   bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{total_fitness, Selection};
pub use types::{Fitness, GaProblem, Individual};
