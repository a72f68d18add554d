//! The 0/1 knapsack problem.
//!
//! [`Knapsack`] is the shared problem model: an immutable item list plus a
//! weight capacity, with the fitness rule both solvers optimize. It
//! implements [`GaProblem`](crate::ga::GaProblem) over [`Chromosome`]s and
//! [`TabuProblem`](crate::tabu::TabuProblem) over plain `Vec<bool>`
//! solutions.
//!
//! # Example
//!
//! ```
//! use knapsack_metaheur::ga::GaConfig;
//! use knapsack_metaheur::knapsack::{io::SelectionReport, Item, Knapsack};
//!
//! let knapsack = Knapsack::new(
//!     vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)],
//!     5,
//! );
//! let result = knapsack
//!     .solve_genetic(&GaConfig::default().with_seed(42))
//!     .unwrap();
//! print!("{}", SelectionReport::new(&knapsack, &result.best.bits));
//! ```

mod ga;
pub mod io;
mod model;
mod tabu;

pub use ga::Chromosome;
pub use model::{Item, Knapsack};
pub use tabu::flip_neighbors;
