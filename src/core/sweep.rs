//! Per-dimension statistics of squared norms, single and swept over a range.

use std::iter::StepBy;
use std::ops::RangeInclusive;

use rand::Rng;
use tracing::{debug, info};

use crate::core::sampler::squared_norms;
use crate::core::stats::{Bounds, Sigma, k_std_estimates};
use crate::error::{Error, Result};

/// How often (in visited dimensions) a sweep reports progress at info level.
const PROGRESS_EVERY: usize = 500;

/// Inclusive range of dimensions visited by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimRange {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl DimRange {
    pub fn new(start: usize, end: usize, step: usize) -> Result<Self> {
        let range = Self { start, end, step };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start == 0 || self.start > self.end || self.step == 0 {
            return Err(Error::InvalidRange {
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        Ok(())
    }

    pub fn iter(&self) -> StepBy<RangeInclusive<usize>> {
        (self.start..=self.end).step_by(self.step.max(1))
    }

    pub fn len(&self) -> usize {
        if self.start > self.end || self.step == 0 {
            return 0;
        }
        (self.end - self.start) / self.step + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DimRange {
    fn default() -> Self {
        Self {
            start: 1,
            end: 5000,
            step: 1,
        }
    }
}

/// Squared norms at one dimension together with their k-sigma bounds.
#[derive(Debug, Clone)]
pub struct SingleDimension {
    pub dim: usize,
    pub sigma: Sigma,
    pub norms: Vec<f64>,
    pub bounds: Bounds,
}

pub fn single_dimension<R: Rng + ?Sized>(
    rng: &mut R,
    dim: usize,
    n_samples: usize,
    sigma: Sigma,
) -> Result<SingleDimension> {
    let norms = squared_norms(rng, dim, n_samples)?;
    let bounds = k_std_estimates(&norms, sigma)?;
    debug!(dim, lower = bounds.lower, upper = bounds.upper, "single dimension bounds");
    Ok(SingleDimension {
        dim,
        sigma,
        norms,
        bounds,
    })
}

/// k-sigma bounds of the squared norm at `dim`, divided by `dim`.
pub fn normalized_boundary<R: Rng + ?Sized>(
    rng: &mut R,
    dim: usize,
    n_samples: usize,
    sigma: Sigma,
) -> Result<Bounds> {
    let norms = squared_norms(rng, dim, n_samples)?;
    Ok(k_std_estimates(&norms, sigma)?.normalized(dim))
}

#[derive(Debug, Clone, Default)]
pub struct BoundarySeries {
    pub dims: Vec<usize>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl BoundarySeries {
    fn with_capacity(cap: usize) -> Self {
        Self {
            dims: Vec::with_capacity(cap),
            lower: Vec::with_capacity(cap),
            upper: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, dim: usize, bounds: Bounds) {
        self.dims.push(dim);
        self.lower.push(bounds.lower);
        self.upper.push(bounds.upper);
    }

    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Smallest and largest value across both series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut it = self.lower.iter().chain(self.upper.iter()).copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

pub fn boundary_sweep<R: Rng + ?Sized>(
    rng: &mut R,
    range: DimRange,
    n_samples: usize,
    sigma: Sigma,
) -> Result<BoundarySeries> {
    range.validate()?;
    let mut series = BoundarySeries::with_capacity(range.len());
    for (i, dim) in range.iter().enumerate() {
        let bounds = normalized_boundary(rng, dim, n_samples, sigma)?;
        debug!(dim, lower = bounds.lower, upper = bounds.upper, "boundary");
        series.push(dim, bounds);
        if (i + 1) % PROGRESS_EVERY == 0 {
            info!("boundary sweep: {}/{} dimensions", i + 1, range.len());
        }
    }
    Ok(series)
}

/// Empirical probability that a squared norm falls below, inside or above the
/// band `[(1 - band) * dim, (1 + band) * dim]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalFractions {
    pub below: f64,
    pub within: f64,
    pub above: f64,
}

impl IntervalFractions {
    pub fn from_norms(norms: &[f64], dim: usize, band: f64) -> Result<Self> {
        check_band(band)?;
        if norms.is_empty() {
            return Err(Error::EmptySample);
        }
        let n = dim as f64;
        let lo = n * (1.0 - band);
        let hi = n * (1.0 + band);

        let (mut below, mut within, mut above) = (0usize, 0usize, 0usize);
        for &v in norms {
            if v < lo {
                below += 1;
            } else if v > hi {
                above += 1;
            } else {
                within += 1;
            }
        }
        let total = norms.len() as f64;
        Ok(Self {
            below: below as f64 / total,
            within: within as f64 / total,
            above: above as f64 / total,
        })
    }

    pub fn sum(&self) -> f64 {
        self.below + self.within + self.above
    }
}

pub fn check_band(band: f64) -> Result<()> {
    if band > 0.0 && band < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidBand(band))
    }
}

pub fn interval_fractions<R: Rng + ?Sized>(
    rng: &mut R,
    dim: usize,
    n_samples: usize,
    band: f64,
) -> Result<IntervalFractions> {
    let norms = squared_norms(rng, dim, n_samples)?;
    IntervalFractions::from_norms(&norms, dim, band)
}

#[derive(Debug, Clone, Default)]
pub struct IntervalSeries {
    pub band: f64,
    pub dims: Vec<usize>,
    pub below: Vec<f64>,
    pub within: Vec<f64>,
    pub above: Vec<f64>,
}

impl IntervalSeries {
    fn with_capacity(band: f64, cap: usize) -> Self {
        Self {
            band,
            dims: Vec::with_capacity(cap),
            below: Vec::with_capacity(cap),
            within: Vec::with_capacity(cap),
            above: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, dim: usize, f: IntervalFractions) {
        self.dims.push(dim);
        self.below.push(f.below);
        self.within.push(f.within);
        self.above.push(f.above);
    }

    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<IntervalFractions> {
        Some(IntervalFractions {
            below: *self.below.get(i)?,
            within: *self.within.get(i)?,
            above: *self.above.get(i)?,
        })
    }
}

pub fn interval_sweep<R: Rng + ?Sized>(
    rng: &mut R,
    range: DimRange,
    n_samples: usize,
    band: f64,
) -> Result<IntervalSeries> {
    range.validate()?;
    check_band(band)?;
    let mut series = IntervalSeries::with_capacity(band, range.len());
    for (i, dim) in range.iter().enumerate() {
        let fractions = interval_fractions(rng, dim, n_samples, band)?;
        debug!(
            dim,
            below = fractions.below,
            within = fractions.within,
            above = fractions.above,
            "interval fractions"
        );
        series.push(dim, fractions);
        if (i + 1) % PROGRESS_EVERY == 0 {
            info!("interval sweep: {}/{} dimensions", i + 1, range.len());
        }
    }
    Ok(series)
}
