use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use knapsack_metaheur::ga::GaConfig;
use knapsack_metaheur::tabu::TabuConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "knapsack")]
#[command(
    author,
    version,
    about = "Solve a 0/1 knapsack instance with a genetic algorithm or tabu search"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Solver settings (YAML with optional `genetic` and `tabu` sections)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Items, one `<weight>,<value>` per line
    #[arg(short, long, value_name = "FILE", default_value = "items.txt", global = true)]
    pub items: PathBuf,

    /// Capacity, read from the first line
    #[arg(short = 'C', long, value_name = "FILE", default_value = "capacity.txt", global = true)]
    pub capacity: PathBuf,

    /// Seed for the random generator; overrides the config file
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Log to stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Evolve a population with tournament/roulette selection
    Genetic(GeneticArgs),
    /// Walk the single-flip neighborhood with a tabu list
    Tabu(TabuArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GeneticArgs {
    /// Individuals per generation
    #[arg(long)]
    pub population_size: Option<usize>,

    /// Probability that two parents are recombined
    #[arg(long)]
    pub crossover_rate: Option<f64>,

    /// Per-bit flip probability
    #[arg(long)]
    pub mutation_rate: Option<f64>,

    /// Number of generations
    #[arg(long)]
    pub generations: Option<usize>,

    /// Evaluate fitness on one thread
    #[arg(long)]
    pub sequential: bool,
}

impl GeneticArgs {
    /// Layers these flags over `config`.
    pub fn apply(&self, mut config: GaConfig, seed: Option<u64>) -> GaConfig {
        if let Some(n) = self.population_size {
            config = config.with_population_size(n);
        }
        if let Some(rate) = self.crossover_rate {
            config = config.with_crossover_rate(rate);
        }
        if let Some(rate) = self.mutation_rate {
            config = config.with_mutation_rate(rate);
        }
        if let Some(n) = self.generations {
            config = config.with_max_generations(n);
        }
        if self.sequential {
            config = config.with_parallel(false);
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TabuArgs {
    /// Maximum tabu list length
    #[arg(long)]
    pub tabu_size: Option<usize>,

    /// Iteration bound
    #[arg(long)]
    pub max_iterations: Option<usize>,
}

impl TabuArgs {
    /// Layers these flags over `config`.
    pub fn apply(&self, mut config: TabuConfig, seed: Option<u64>) -> TabuConfig {
        if let Some(size) = self.tabu_size {
            config = config.with_tabu_size(size);
        }
        if let Some(n) = self.max_iterations {
            config = config.with_max_iterations(n);
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        config
    }
}

/// Contents of the `--config` file. Missing sections and fields keep their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub genetic: GaConfig,
    pub tabu: TabuConfig,
}

impl SolverConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}
