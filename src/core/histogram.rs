//! Density histogram with automatically chosen bins.
//!
//! Bin width follows the usual "auto" rule: the narrower of Sturges and
//! Freedman-Diaconis, falling back to Sturges when the interquartile range is
//! zero. Bins are equal width; the last bin is closed on the right.

use crate::core::stats::quantile;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Histogram {
    /// `bins + 1` increasing edges.
    pub edges: Vec<f64>,
    /// Count per bin divided by `N * bin_width`.
    pub densities: Vec<f64>,
}

impl Histogram {
    pub fn auto(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptySample);
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let (min, max) = (sorted[0], sorted[sorted.len() - 1]);

        let (lo, hi, bins) = if max > min {
            let width = auto_bin_width(&sorted);
            let bins = ((max - min) / width).ceil().max(1.0) as usize;
            (min, max, bins)
        } else {
            (min - 0.5, max + 0.5, 1)
        };
        Ok(Self::with_edges(values, lo, hi, bins))
    }

    fn with_edges(values: &[f64], lo: f64, hi: f64, bins: usize) -> Self {
        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            if v < lo || v > hi {
                continue;
            }
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let total = values.len() as f64;
        let densities = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&c, e)| c as f64 / (total * (e[1] - e[0])))
            .collect();
        Self { edges, densities }
    }

    pub fn bins(&self) -> usize {
        self.densities.len()
    }

    /// `(left_edge, right_edge, density)` per bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.densities.iter())
            .map(|(e, &d)| (e[0], e[1], d))
    }

    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }
}

fn auto_bin_width(sorted: &[f64]) -> f64 {
    let n = sorted.len() as f64;
    let range = sorted[sorted.len() - 1] - sorted[0];
    let sturges = range / (n.log2() + 1.0);

    let q1 = quantile(sorted, 0.25).unwrap_or(sorted[0]);
    let q3 = quantile(sorted, 0.75).unwrap_or(sorted[0]);
    let fd = 2.0 * (q3 - q1) * n.powf(-1.0 / 3.0);

    if fd > 0.0 { fd.min(sturges) } else { sturges }
}
