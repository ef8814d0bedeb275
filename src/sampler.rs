//! Single-trial samplers: draw PINs until the target comes up.

use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SimError};
use crate::pin::Pin;

/// Whether a guess that was already tried in the current trial counts again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    WithRepetition,
    NoRepetition,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::WithRepetition => f.write_str("with-repetition"),
            Strategy::NoRepetition => f.write_str("no-repetition"),
        }
    }
}

/// Every counted draw of one trial, in order, plus how many repeats were
/// thrown away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialTrace {
    pub counted: Vec<Pin>,
    pub discarded: u64,
}

impl TrialTrace {
    pub fn count(&self) -> u64 {
        self.counted.len() as u64
    }
}

/// One bit per possible PIN of a width. Width 9 needs 10^9 bits (125 MB)
/// no matter how many draws a trial makes.
#[derive(Debug)]
struct SeenSet {
    words: Vec<u64>,
}

impl SeenSet {
    fn new(space: u64) -> Self {
        Self {
            words: vec![0; space.div_ceil(64) as usize],
        }
    }

    /// Returns `true` if `pin` was not seen before.
    fn insert(&mut self, pin: &Pin) -> bool {
        let (word, bit) = (pin.index() / 64, pin.index() % 64);
        let mask = 1u64 << bit;
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Sampler {
    target: Pin,
    strategy: Strategy,
    max_draws: Option<u64>,
}

impl Sampler {
    pub fn new(target: Pin, strategy: Strategy) -> Self {
        Self {
            target,
            strategy,
            max_draws: None,
        }
    }

    /// Caps the raw number of draws in a trial, discarded repeats included.
    /// Without a cap a trial runs until it hits.
    pub fn with_max_draws(mut self, max_draws: Option<u64>) -> Self {
        self.max_draws = max_draws;
        self
    }

    pub fn target(&self) -> Pin {
        self.target
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Runs one trial and returns the number of counted draws.
    pub fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u64> {
        self.run(rng, |_| {}).map(|(count, _)| count)
    }

    /// Runs one trial and records every counted draw.
    pub fn trace<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialTrace> {
        let mut counted = Vec::new();
        let (_, discarded) = self.run(rng, |pin| counted.push(*pin))?;
        Ok(TrialTrace { counted, discarded })
    }

    /// Returns `(counted, discarded)` draws. `on_count` sees each counted
    /// draw; the last one it sees is the target.
    fn run<R, F>(&self, rng: &mut R, mut on_count: F) -> Result<(u64, u64)>
    where
        R: Rng + ?Sized,
        F: FnMut(&Pin),
    {
        let mut seen = match self.strategy {
            Strategy::WithRepetition => None,
            Strategy::NoRepetition => Some(SeenSet::new(self.target.space())),
        };
        let mut count = 0u64;
        let mut discarded = 0u64;
        loop {
            if let Some(limit) = self.max_draws {
                if count + discarded >= limit {
                    return Err(SimError::DrawLimitExceeded { limit });
                }
            }
            let attempt = self.target.random_like(rng);
            if seen.as_mut().is_some_and(|seen| !seen.insert(&attempt)) {
                discarded += 1;
                continue;
            }
            count += 1;
            on_count(&attempt);
            if attempt == self.target {
                trace!(target_pin = %self.target, count, discarded, "hit");
                return Ok((count, discarded));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pin(s: &str) -> Pin {
        s.parse().unwrap()
    }

    #[test]
    fn with_repetition_stops_on_first_hit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sampler = Sampler::new(pin("7"), Strategy::WithRepetition);
        for _ in 0..100 {
            let trace = sampler.trace(&mut rng).unwrap();
            let (last, rest) = trace.counted.split_last().unwrap();
            assert_eq!(*last, sampler.target());
            assert!(rest.iter().all(|p| *p != sampler.target()));
            assert_eq!(trace.discarded, 0);
        }
    }

    #[test]
    fn no_repetition_counts_distinct_draws_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let sampler = Sampler::new(pin("42"), Strategy::NoRepetition);
        let mut saw_discards = false;
        for _ in 0..100 {
            let trace = sampler.trace(&mut rng).unwrap();
            let unique: HashSet<_> = trace.counted.iter().collect();
            assert_eq!(unique.len(), trace.counted.len());
            assert!(trace.count() >= 1 && trace.count() <= 100);
            assert_eq!(trace.counted.last(), Some(&sampler.target()));
            saw_discards |= trace.discarded > 0;
        }
        assert!(saw_discards);
    }

    #[test]
    fn trace_and_trial_agree_for_the_same_seed() {
        let sampler = Sampler::new(pin("314"), Strategy::NoRepetition);
        let count = sampler.trial(&mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let trace = sampler.trace(&mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(count, trace.count());
    }

    #[test]
    fn draw_cap_stops_a_long_trial() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sampler =
            Sampler::new(pin("123456789"), Strategy::WithRepetition).with_max_draws(Some(50));
        assert!(matches!(
            sampler.trial(&mut rng),
            Err(SimError::DrawLimitExceeded { limit: 50 })
        ));
    }

    #[test]
    fn seen_set_is_one_bit_per_pin() {
        let mut seen = SeenSet::new(pin("123456789").space());
        assert_eq!(seen.words.len(), 15_625_000);
        assert!(seen.insert(&pin("999999999")));
        assert!(!seen.insert(&pin("999999999")));
        assert!(seen.insert(&pin("000000000")));
        assert_eq!(SeenSet::new(pin("7").space()).words.len(), 1);
    }

    #[test]
    fn wide_no_repetition_trial_stays_within_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let sampler =
            Sampler::new(pin("123456789"), Strategy::NoRepetition).with_max_draws(Some(10_000));
        assert!(matches!(
            sampler.trial(&mut rng),
            Err(SimError::DrawLimitExceeded { limit: 10_000 })
        ));
    }

    #[test]
    fn strategy_names_match_cli_values() {
        assert_eq!(Strategy::NoRepetition.to_string(), "no-repetition");
        assert_eq!(
            serde_json::to_string(&Strategy::WithRepetition).unwrap(),
            "\"with-repetition\""
        );
    }
}
