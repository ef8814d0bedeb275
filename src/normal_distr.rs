use std::f64::consts::PI;
use rand::distr::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Normal distribution sampled with the Box-Muller transform.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNormal")]
pub struct NormalDistribution {
    mean: f64,
    std_dev: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNormal {
    mean: f64,
    std_dev: f64,
}

impl TryFrom<RawNormal> for NormalDistribution {
    type Error = SimError;

    fn try_from(raw: RawNormal) -> Result<Self> {
        Self::new(raw.mean, raw.std_dev)
    }
}

impl NormalDistribution {
    /// Skips validation; only for parameters known to be valid.
    pub(crate) const fn from_parts(mean: f64, std_dev: f64) -> Self {
        NormalDistribution { mean, std_dev }
    }

    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SimError::InvalidDistribution(format!(
                "N({mean}, {std_dev}) needs a finite mean and a finite, non-negative std dev"
            )));
        }
        Ok(NormalDistribution { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution<f64> for NormalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // u1 in (0, 1] keeps ln finite
        let u1: f64 = 1.0 - rng.random::<f64>();
        let u2: f64 = rng.random();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        self.mean + z0 * self.std_dev
    }
}
