use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use pinsim::cli::{Cli, Command};
use pinsim::config::{Config, MixConfig, PinConfig};
use pinsim::logging::init_tracing;
use pinsim::report::{write_summary, SweepReport};
use pinsim::{mixing, plot, sweep, Histogram, Sampler, Summary};
use rand::rngs::StdRng;
use rand::{rng, RngCore, SeedableRng};
use tracing::{info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    cli.apply(&mut config);

    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => {
            info!(seed, "using seeded random source");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rng()),
    };

    match cli.command {
        Command::Pin(ref args) => run_pin(&config.pin, args.json, &mut *rng),
        Command::Mix(_) => run_mix(&config.mix, &mut *rng),
    }
}

fn run_pin(config: &PinConfig, json: bool, rng: &mut dyn RngCore) -> Result<()> {
    let sampler = Sampler::new(config.target, config.strategy).with_max_draws(config.max_draws);
    if config.max_draws.is_some_and(|cap| cap < config.target.space()) {
        warn!(
            max_draws = ?config.max_draws,
            space = config.target.space(),
            "draw cap is below the number of possible PINs; trials may fail"
        );
    }
    info!(target_pin = %config.target, strategy = %config.strategy, sizes = ?config.sizes, "starting sweep");

    let points = sweep(&sampler, &config.sizes, rng).context("Simulation failed")?;

    let report = SweepReport::new(config.target, config.strategy, &points);
    let mut out = io::stdout().lock();
    if json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }
    out.flush()?;

    if let Some(path) = &config.plot {
        let title = format!("Attempts to guess {} ({})", config.target, config.strategy);
        plot::save(&plot::error_bars_svg(&points, &title), path)
            .with_context(|| format!("Failed to write plot to {}", path.display()))?;
    }
    Ok(())
}

fn run_mix(config: &MixConfig, rng: &mut dyn RngCore) -> Result<()> {
    let mix = mixing::run(config.samples, config.weight, &config.populations, rng)?;
    let (u, z) = (&mix.average, &mix.mixture);

    let mut out = io::stdout().lock();
    for (name, sample) in [("U", u), ("Z", z)] {
        let summary = Summary::of(sample.view())?;
        write_summary(&mut out, name, &summary)?;
    }
    out.flush()?;

    if let Some(dir) = &config.plot_dir {
        for (file, title, sample) in [
            ("average.svg", "Histogram of U", u),
            ("mixture.svg", "Histogram of Z", z),
        ] {
            let hist = Histogram::new(sample.view(), config.bins)?;
            let path = dir.join(file);
            plot::save(&plot::histogram_svg(&hist, title), &path)
                .with_context(|| format!("Failed to write plot to {}", path.display()))?;
        }
    }
    Ok(())
}
