/// stepnet
///
/// Trains step-activation classifiers on two-input boolean functions.
///
/// Run with:
///   cargo run --release -- search --task xor --seed 7
///   cargo run --release -- delta --task and --json
///
/// Set RUST_LOG=debug to see every improvement / epoch in the log as well.
mod args;
mod report;

use std::error::Error;
use std::{io, process};

use clap::Parser;
use log::info;

use stepnet::{
    random_search, train_perceptron, BooleanTask, Model, Perceptron, RunConfig, TwoLayerNetwork,
};

use args::{Cli, Command};
use report::{print_verification, DeltaConsole, JsonLines, SearchConsole};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.common.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            RunConfig::load_json(path)?
        }
        None => RunConfig::default(),
    };

    // Command-line flags win over the configuration file.
    match cli.command {
        Command::Search { task, seed, iterations } => {
            config.task = task.or(config.task);
            if seed.is_some() {
                config.random_search.seed = seed;
            }
            if let Some(iterations) = iterations {
                config.random_search.max_iterations = iterations;
            }
            run_search(&config, cli.common.json)
        }
        Command::Delta { task, epochs, rate } => {
            config.task = task.or(config.task);
            if let Some(epochs) = epochs {
                config.delta_rule.max_epochs = epochs;
            }
            if let Some(rate) = rate {
                config.delta_rule.learning_rate = rate;
            }
            run_delta(&config, cli.common.json)
        }
    }
}

fn run_search(config: &RunConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let task = config.task.unwrap_or(BooleanTask::Xor);
    let dataset = task.dataset();
    info!("random search on {task}, budget {}", config.random_search.max_iterations);

    if json {
        let mut reporter = JsonLines::new(io::stdout().lock());
        random_search::<TwoLayerNetwork, _>(&dataset, &config.random_search, &mut reporter)?;
    } else {
        let mut reporter = SearchConsole { task: task.to_string() };
        reporter.begin();
        let outcome =
            random_search::<TwoLayerNetwork, _>(&dataset, &config.random_search, &mut reporter)?;
        print_verification(&outcome.params.verify(&dataset));
    }
    Ok(())
}

fn run_delta(config: &RunConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let task = config.task.unwrap_or(BooleanTask::And);
    let dataset = task.dataset();
    if !task.is_linearly_separable() {
        info!("{task} is not linearly separable, the perceptron will not converge");
    }

    if json {
        let mut reporter = JsonLines::new(io::stdout().lock());
        train_perceptron(&dataset, &config.delta_rule, &mut reporter)?;
    } else {
        let mut reporter = DeltaConsole;
        let initial: Perceptron = config.delta_rule.initial_perceptron();
        reporter.begin(&initial, config.delta_rule.learning_rate);
        let outcome = train_perceptron(&dataset, &config.delta_rule, &mut reporter)?;
        print_verification(&outcome.params.verify(&dataset));
    }
    Ok(())
}
