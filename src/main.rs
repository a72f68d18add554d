//! knapsack: 0/1 knapsack solver [command line]
//!
//! Reads an items file (`<weight>,<value>` per line) and a capacity file,
//! runs the chosen metaheuristic, and prints the packed items.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, SolverConfig};
use knapsack_metaheur::knapsack::io::{load_capacity, load_items, SelectionReport};
use knapsack_metaheur::knapsack::Knapsack;
use tracing::{info, Level};

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SolverConfig::load(cli.config.as_deref())?;

    let items = load_items(&cli.items)
        .with_context(|| format!("failed to load items from {}", cli.items.display()))?;
    let capacity = load_capacity(&cli.capacity)
        .with_context(|| format!("failed to load capacity from {}", cli.capacity.display()))?;
    let knapsack = Knapsack::new(items, capacity);
    info!(
        items = knapsack.items().len(),
        capacity = knapsack.capacity(),
        "instance loaded"
    );

    let solution = match &cli.command {
        Command::Genetic(args) => {
            let config = args.apply(config.genetic, cli.seed);
            knapsack.solve_genetic(&config)?.best.bits
        }
        Command::Tabu(args) => {
            let config = args.apply(config.tabu, cli.seed);
            knapsack.solve_tabu(&config).best
        }
    };

    info!(
        value = knapsack.fitness(&solution),
        weight = knapsack.total_weight(&solution),
        capacity = knapsack.capacity(),
        "solution found"
    );
    print!("{}", SelectionReport::new(&knapsack, &solution));
    Ok(())
}
