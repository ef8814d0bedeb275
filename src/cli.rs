use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::pin::Pin;
use crate::sampler::Strategy;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Seed for the random source; runs with the same seed repeat exactly")]
    pub seed: Option<u64>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Log more (repeat for trace output)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Guess a fixed PIN at random and report how many attempts it takes
    Pin(PinArgs),
    /// Average and mix two normal populations and bin the results
    Mix(MixArgs),
}

#[derive(Args)]
pub struct PinArgs {
    #[arg(short, long, help = "The PIN to guess, as a digit string (leading zeros count)")]
    pub target: Option<Pin>,

    #[arg(long, value_enum, help = "Whether repeated guesses count again")]
    pub strategy: Option<Strategy>,

    #[arg(long, conflicts_with = "strategy", help = "Shorthand for --strategy no-repetition")]
    pub no_repeat: bool,

    #[arg(long, value_delimiter = ',', help = "Comma-separated batch sizes, each at least 2")]
    pub sizes: Option<Vec<usize>>,

    #[arg(long, help = "Give up a trial after this many raw draws")]
    pub max_draws: Option<u64>,

    #[arg(short, long, help = "Write an SVG error-bar plot to this path")]
    pub plot: Option<PathBuf>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct MixArgs {
    #[arg(short = 'n', long, help = "Number of samples per simulation")]
    pub samples: Option<usize>,

    #[arg(short, long, help = "Number of histogram bins")]
    pub bins: Option<usize>,

    #[arg(short, long, help = "Probability that a mixture sample comes from the first population")]
    pub weight: Option<f64>,

    #[arg(long, help = "Write average.svg and mixture.svg into this directory")]
    pub plot_dir: Option<PathBuf>,
}

impl Cli {
    /// Layers command-line flags over `config`.
    pub fn apply(&self, config: &mut Config) {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        match &self.command {
            Command::Pin(args) => {
                let pin = &mut config.pin;
                if let Some(target) = args.target {
                    pin.target = target;
                }
                if let Some(strategy) = args.strategy {
                    pin.strategy = strategy;
                }
                if args.no_repeat {
                    pin.strategy = Strategy::NoRepetition;
                }
                if let Some(sizes) = &args.sizes {
                    pin.sizes = sizes.clone();
                }
                if args.max_draws.is_some() {
                    pin.max_draws = args.max_draws;
                }
                if args.plot.is_some() {
                    pin.plot = args.plot.clone();
                }
            }
            Command::Mix(args) => {
                let mix = &mut config.mix;
                if let Some(samples) = args.samples {
                    mix.samples = samples;
                }
                if let Some(bins) = args.bins {
                    mix.bins = bins;
                }
                if let Some(weight) = args.weight {
                    mix.weight = weight;
                }
                if args.plot_dir.is_some() {
                    mix.plot_dir = args.plot_dir.clone();
                }
            }
        }
    }
}
