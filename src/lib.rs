//! Monte Carlo exercises.
//!
//! * [`sampler`] and [`batch`]: guess a fixed digit PIN at random, with or
//!   without repeating earlier guesses, and summarise how many attempts it
//!   takes over batches of trials.
//! * [`mixing`]: average and mix two normal populations.
//!
//! Randomness is always passed in, so a seeded generator reproduces a run.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mixing;
pub mod normal_distr;
pub mod pin;
pub mod plot;
pub mod report;
pub mod sampler;
pub mod stats;

pub use batch::{run_batch, sweep, Batch, SweepPoint};
pub use error::{Result, SimError};
pub use pin::Pin;
pub use sampler::{Sampler, Strategy, TrialTrace};
pub use stats::{Histogram, Summary};
