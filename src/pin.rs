use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

pub const DEFAULT_WIDTH: u8 = 4;
pub const MAX_WIDTH: u8 = 9;
pub const DEFAULT_TARGET: Pin = Pin {
    value: 2022,
    width: DEFAULT_WIDTH,
};

/// A fixed-width string of decimal digits. Leading zeros are significant,
/// so `"0042"` and `"42"` are different PINs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pin {
    value: u32,
    width: u8,
}

impl Pin {
    /// Draws a PIN of `width` digits, each digit uniform over `0..=9`.
    pub fn random<R: Rng + ?Sized>(width: u8, rng: &mut R) -> Result<Self> {
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(SimError::InvalidPin(format!("<width {width}>")));
        }
        Ok(Self::draw(width, rng))
    }

    /// Draws a PIN with the same width as `self`.
    pub fn random_like<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::draw(self.width, rng)
    }

    fn draw<R: Rng + ?Sized>(width: u8, rng: &mut R) -> Self {
        let value = (0..width).fold(0u32, |acc, _| acc * 10 + rng.random_range(0..10u32));
        Self { value, width }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Position of this PIN among all PINs of its width, in `0..space()`.
    pub fn index(&self) -> usize {
        self.value as usize
    }

    /// Number of distinct PINs of this width.
    pub fn space(&self) -> u64 {
        10u64.pow(self.width as u32)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width as usize)
    }
}

impl FromStr for Pin {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let width = s.len();
        if width == 0 || width > MAX_WIDTH as usize || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SimError::InvalidPin(s.to_string()));
        }
        let value = s
            .parse::<u32>()
            .map_err(|_| SimError::InvalidPin(s.to_string()))?;
        Ok(Self {
            value,
            width: width as u8,
        })
    }
}

impl TryFrom<String> for Pin {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Pin> for String {
    fn from(pin: Pin) -> Self {
        pin.to_string()
    }
}
