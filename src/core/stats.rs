//! Summary statistics over squared-norm samples.
//!
//! Standard deviations are population estimates (divide by N, not N - 1).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Multiplier applied to the standard deviation when building a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sigma {
    One,
    #[default]
    Two,
    Three,
}

impl Sigma {
    pub fn factor(self) -> f64 {
        match self {
            Sigma::One => 1.0,
            Sigma::Two => 2.0,
            Sigma::Three => 3.0,
        }
    }
}

impl TryFrom<u8> for Sigma {
    type Error = Error;

    fn try_from(k: u8) -> Result<Self> {
        match k {
            1 => Ok(Sigma::One),
            2 => Ok(Sigma::Two),
            3 => Ok(Sigma::Three),
            other => Err(Error::InvalidSigma(other)),
        }
    }
}

impl From<Sigma> for u8 {
    fn from(sigma: Sigma) -> u8 {
        match sigma {
            Sigma::One => 1,
            Sigma::Two => 2,
            Sigma::Three => 3,
        }
    }
}

/// Closed interval `[lower, upper]` around a sample mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Both ends divided by the dimension, so that the expected norm maps to 1.
    pub fn normalized(self, dim: usize) -> Self {
        let n = dim as f64;
        Self {
            lower: self.lower / n,
            upper: self.upper / n,
        }
    }
}

pub fn mean(x: &[f64]) -> Result<f64> {
    if x.is_empty() {
        return Err(Error::EmptySample);
    }
    Ok(x.iter().sum::<f64>() / x.len() as f64)
}

pub fn variance(x: &[f64]) -> Result<f64> {
    let m = mean(x)?;
    let ss: f64 = x.iter().map(|&v| (v - m) * (v - m)).sum();
    Ok(ss / x.len() as f64)
}

pub fn std_dev(x: &[f64]) -> Result<f64> {
    variance(x).map(f64::sqrt)
}

/// `(mean - k*std, mean + k*std)` of `x`.
///
/// A single value has zero spread, so both ends collapse onto it.
pub fn k_std_estimates(x: &[f64], sigma: Sigma) -> Result<Bounds> {
    let m = mean(x)?;
    let half = sigma.factor() * std_dev(x)?;
    Ok(Bounds {
        lower: m - half,
        upper: m + half,
    })
}

pub fn one_std_estimates(x: &[f64]) -> Result<Bounds> {
    k_std_estimates(x, Sigma::One)
}

pub fn two_std_estimates(x: &[f64]) -> Result<Bounds> {
    k_std_estimates(x, Sigma::Two)
}

pub fn three_std_estimates(x: &[f64]) -> Result<Bounds> {
    k_std_estimates(x, Sigma::Three)
}

/// Quantile of already sorted data, interpolating linearly between order
/// statistics. `q` is clamped to `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
