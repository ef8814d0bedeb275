//! Batches of trials and sweeps over batch sizes.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SimError};
use crate::sampler::Sampler;
use crate::stats::Summary;

/// Outcomes of `n` independent trials, in the order they ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch {
    pub counts: Vec<u64>,
    pub summary: Summary,
}

/// One point of an error-bar plot.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub size: usize,
    pub mean: f64,
    pub std_dev: f64,
}

pub fn run_batch<R: Rng + ?Sized>(sampler: &Sampler, n: usize, rng: &mut R) -> Result<Batch> {
    if n < 2 {
        return Err(SimError::InsufficientSamples { got: n });
    }
    let mut counts = Vec::with_capacity(n);
    for i in 0..n {
        let count = sampler.trial(rng)?;
        debug!(trial = i, count, "trial finished");
        counts.push(count);
    }
    let summary = Summary::of_counts(&counts)?;
    info!(
        target_pin = %sampler.target(),
        strategy = %sampler.strategy(),
        n,
        mean = summary.mean,
        std_dev = summary.std_dev,
        "batch finished"
    );
    Ok(Batch { counts, summary })
}

/// Runs one batch per size, in order. Fails on the first size below 2
/// before any trial runs.
pub fn sweep<R: Rng + ?Sized>(
    sampler: &Sampler,
    sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<SweepPoint>> {
    if let Some(&bad) = sizes.iter().find(|&&n| n < 2) {
        return Err(SimError::InsufficientSamples { got: bad });
    }
    sizes
        .iter()
        .map(|&size| {
            let batch = run_batch(sampler, size, rng)?;
            Ok(SweepPoint {
                size,
                mean: batch.summary.mean,
                std_dev: batch.summary.std_dev,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::Strategy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sampler(target: &str, strategy: Strategy) -> Sampler {
        Sampler::new(target.parse().unwrap(), strategy)
    }

    #[test]
    fn batch_of_one_is_rejected_before_sampling() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let s = sampler("2022", Strategy::WithRepetition).with_max_draws(Some(0));
        assert!(matches!(
            run_batch(&s, 1, &mut rng),
            Err(SimError::InsufficientSamples { got: 1 })
        ));
    }

    #[test]
    fn batch_keeps_every_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let batch = run_batch(&sampler("5", Strategy::WithRepetition), 50, &mut rng).unwrap();
        assert_eq!(batch.counts.len(), 50);
        assert!(batch.counts.iter().all(|&c| c >= 1));
        assert_eq!(batch.summary.n, 50);
    }

    #[test]
    fn sweep_reports_sizes_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let points = sweep(&sampler("12", Strategy::NoRepetition), &[2, 10, 30], &mut rng).unwrap();
        let sizes: Vec<_> = points.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![2, 10, 30]);
        assert!(points.iter().all(|p| p.std_dev >= 0.0));
    }

    #[test]
    fn sweep_with_a_small_size_fails_up_front() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let s = sampler("12", Strategy::NoRepetition).with_max_draws(Some(0));
        assert!(matches!(
            sweep(&s, &[10, 1, 30], &mut rng),
            Err(SimError::InsufficientSamples { got: 1 })
        ));
    }
}
