//! Text and JSON summaries written to stdout by the binary.

use std::io::{self, Write};

use serde::Serialize;

use crate::batch::SweepPoint;
use crate::pin::Pin;
use crate::sampler::Strategy;
use crate::stats::Summary;

#[derive(Debug, Serialize)]
pub struct SweepReport<'a> {
    pub target: Pin,
    pub strategy: Strategy,
    pub expected: f64,
    pub points: &'a [SweepPoint],
}

impl<'a> SweepReport<'a> {
    pub fn new(target: Pin, strategy: Strategy, points: &'a [SweepPoint]) -> Self {
        Self {
            target,
            strategy,
            expected: expected_attempts(target, strategy),
            points,
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "target {} ({}), expected mean {:.1}",
            self.target, self.strategy, self.expected
        )?;
        writeln!(out, "{:>10} {:>14} {:>14}", "trials", "mean", "std dev")?;
        for p in self.points {
            writeln!(out, "{:>10} {:>14.2} {:>14.2}", p.size, p.mean, p.std_dev)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

/// Theoretical mean number of counted draws: geometric with p = 1/N when
/// repeats count, otherwise the target's position in a random ordering.
pub fn expected_attempts(target: Pin, strategy: Strategy) -> f64 {
    let space = target.space() as f64;
    match strategy {
        Strategy::WithRepetition => space,
        Strategy::NoRepetition => (space + 1.0) / 2.0,
    }
}

pub fn write_summary<W: Write>(out: &mut W, name: &str, s: &Summary) -> io::Result<()> {
    writeln!(
        out,
        "{name}: n = {}, mean = {:.3}, std dev = {:.3}, range = [{:.3}, {:.3}]",
        s.n, s.mean, s.std_dev, s.min, s.max
    )
}
