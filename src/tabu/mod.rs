//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that remembers recently
//! adopted solutions (the tabu list) and forbids returning to them,
//! preventing cycling and pushing the search out of local optima.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
pub use types::{TabuList, TabuMove, TabuProblem};
