use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mixing::Populations;
use crate::pin::{Pin, DEFAULT_TARGET};
use crate::sampler::Strategy;

/// Run parameters. Every field has a default, so a config file only needs
/// the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub seed: Option<u64>,
    pub pin: PinConfig,
    pub mix: MixConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinConfig {
    pub target: Pin,
    pub strategy: Strategy,
    pub sizes: Vec<usize>,
    pub max_draws: Option<u64>,
    pub plot: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MixConfig {
    pub samples: usize,
    pub bins: usize,
    pub weight: f64,
    pub populations: Populations,
    pub plot_dir: Option<PathBuf>,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            strategy: Strategy::WithRepetition,
            sizes: vec![10, 50, 100, 500, 1000],
            max_draws: None,
            plot: None,
        }
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            samples: 10_000,
            bins: 50,
            weight: 0.5,
            populations: Populations::default(),
            plot_dir: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
