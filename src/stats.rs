//! Descriptive statistics over simulation outcomes.

use ndarray::{Array1, ArrayView1};
use serde::Serialize;

use crate::error::{Result, SimError};

/// Sample summary with a Bessel-corrected (n - 1) standard deviation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Fails with [`SimError::InsufficientSamples`] below two samples, where
    /// the sample standard deviation is undefined.
    pub fn of(samples: ArrayView1<'_, f64>) -> Result<Self> {
        let n = samples.len();
        if n < 2 {
            return Err(SimError::InsufficientSamples { got: n });
        }
        let mean = samples
            .mean()
            .ok_or(SimError::InsufficientSamples { got: n })?;
        let std_dev = samples.std(1.0);
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Ok(Self {
            n,
            mean,
            std_dev,
            min,
            max,
        })
    }

    pub fn of_counts(counts: &[u64]) -> Result<Self> {
        let samples: Array1<f64> = counts.iter().map(|&c| c as f64).collect();
        Self::of(samples.view())
    }
}

/// Equal-width bins over `[min, max]` of a sample. Every bin is half-open
/// except the last, which also takes the maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn new(samples: ArrayView1<'_, f64>, bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(SimError::InvalidDistribution(
                "histogram needs at least one bin".into(),
            ));
        }
        if samples.is_empty() {
            return Err(SimError::InvalidDistribution(
                "cannot bin an empty sample".into(),
            ));
        }
        if !samples.iter().all(|v| v.is_finite()) {
            return Err(SimError::InvalidDistribution(
                "cannot bin NaN or infinite samples".into(),
            ));
        }
        let lo = samples.fold(f64::INFINITY, |acc, &v| acc.min(v));
        let hi = samples.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        if !(hi - lo).is_finite() {
            return Err(SimError::InvalidDistribution(format!(
                "sample range [{lo}, {hi}] is too wide to bin"
            )));
        }
        // a constant sample gets a unit-wide range centred on its value
        let (lo, hi) = if hi > lo { (lo, hi) } else { (lo - 0.5, hi + 0.5) };
        Ok(Self::fill(samples, bins, lo, hi))
    }

    fn fill(samples: ArrayView1<'_, f64>, bins: usize, lo: f64, hi: f64) -> Self {
        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0u64; bins];
        for &v in samples {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self { edges, counts }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }
}
