use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stepnet::BooleanTask;

/// Trains step-activation classifiers on two-input boolean functions.
#[derive(Debug, Parser)]
#[command(name = "stepnet")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[command(flatten)]
    pub common: Common,
}

/// Options shared by every mode.
#[derive(Debug, Args)]
pub struct Common {
    /// JSON run configuration
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
    /// Print events as JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Random search over a 2-2-1 step network (default task: xor)
    Search {
        /// and | or | nand | xor
        #[arg(short, long)]
        task: Option<BooleanTask>,
        /// Seed for the candidate sequence
        #[arg(short, long, value_name = "INT")]
        seed: Option<u64>,
        /// Number of candidates to try
        #[arg(short, long, value_name = "INT")]
        iterations: Option<usize>,
    },
    /// Delta-rule training of a single perceptron (default task: and)
    Delta {
        /// and | or | nand | xor
        #[arg(short, long)]
        task: Option<BooleanTask>,
        /// Epoch limit
        #[arg(short, long, value_name = "INT")]
        epochs: Option<usize>,
        /// Learning rate
        #[arg(short, long, value_name = "FLOAT")]
        rate: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(line: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("stepnet").chain(line.split_whitespace()))
    }

    #[test]
    fn reads_search_flags() {
        let cli = parse_str("search --task XOR --seed 7 --iterations 1000").unwrap();
        match cli.command {
            Command::Search { task, seed, iterations } => {
                assert_eq!(task, Some(BooleanTask::Xor));
                assert_eq!(seed, Some(7));
                assert_eq!(iterations, Some(1000));
            }
            other => panic!("expected search, got {other:?}"),
        }
        assert!(!cli.common.json);
    }

    #[test]
    fn reads_delta_flags_and_global_options() {
        let cli = parse_str("delta --task or --epochs 50 --rate 0.5 --json --config run.json").unwrap();
        match cli.command {
            Command::Delta { task, epochs, rate } => {
                assert_eq!(task, Some(BooleanTask::Or));
                assert_eq!(epochs, Some(50));
                assert_eq!(rate, Some(0.5));
            }
            other => panic!("expected delta, got {other:?}"),
        }
        assert!(cli.common.json);
        assert_eq!(cli.common.config, Some(PathBuf::from("run.json")));
    }

    #[test]
    fn rejects_missing_and_malformed_values() {
        assert!(parse_str("").is_err());
        assert!(parse_str("search --seed").is_err());
        assert!(parse_str("search --iterations lots").is_err());
        assert!(parse_str("search --task maybe").is_err());
        assert!(parse_str("search --epochs 3").is_err());
    }
}
