//! Combining two normal populations: the per-sample average of both, and a
//! random per-sample choice between them.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SimError};
use crate::normal_distr::NormalDistribution;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Populations {
    pub x: NormalDistribution,
    pub y: NormalDistribution,
}

impl Default for Populations {
    /// `X ~ N(100, 10)` and `Y ~ N(300, 10)`.
    fn default() -> Self {
        Self {
            x: NormalDistribution::from_parts(100.0, 10.0),
            y: NormalDistribution::from_parts(300.0, 10.0),
        }
    }
}

/// `n` samples of `0.5 * (X + Y)`.
pub fn simulate_average<R: Rng + ?Sized>(
    n: usize,
    pops: &Populations,
    rng: &mut R,
) -> Array1<f64> {
    let xs: Array1<f64> = (0..n).map(|_| rng.sample(pops.x)).collect();
    let ys: Array1<f64> = (0..n).map(|_| rng.sample(pops.y)).collect();
    let u = 0.5 * (xs + ys);
    info!(n, "average sample drawn");
    u
}

/// `n` samples where each comes from `X` with probability `weight` and from
/// `Y` otherwise.
pub fn simulate_mixture<R: Rng + ?Sized>(
    n: usize,
    weight: f64,
    pops: &Populations,
    rng: &mut R,
) -> Result<Array1<f64>> {
    if !(0.0..=1.0).contains(&weight) {
        return Err(SimError::InvalidDistribution(format!(
            "mixture weight {weight} is outside [0, 1]"
        )));
    }
    let z: Array1<f64> = (0..n)
        .map(|_| {
            if rng.random::<f64>() < weight {
                rng.sample(pops.x)
            } else {
                rng.sample(pops.y)
            }
        })
        .collect();
    info!(n, weight, "mixture sample drawn");
    Ok(z)
}

/// Both simulations over the same populations.
#[derive(Debug, Clone)]
pub struct MixRun {
    pub average: Array1<f64>,
    pub mixture: Array1<f64>,
}

/// Runs the average and the mixture simulation. Refuses fewer than two
/// samples up front, since neither sample could be summarised.
pub fn run<R: Rng + ?Sized>(
    n: usize,
    weight: f64,
    pops: &Populations,
    rng: &mut R,
) -> Result<MixRun> {
    if n < 2 {
        return Err(SimError::InsufficientSamples { got: n });
    }
    let average = simulate_average(n, pops, rng);
    let mixture = simulate_mixture(n, weight, pops, rng)?;
    Ok(MixRun { average, mixture })
}
