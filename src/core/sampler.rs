//! Squared Euclidean norms of standard Normal vectors.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{Error, Result};

pub fn squared_norm(row: &[f64]) -> f64 {
    row.iter().map(|&z| z * z).sum()
}

/// Draw `n_samples` vectors from N(0, I_dim) and return their squared norms.
///
/// Rows are reduced as they are drawn; the full `n_samples x dim` matrix is
/// never held in memory.
pub fn squared_norms<R: Rng + ?Sized>(
    rng: &mut R,
    dim: usize,
    n_samples: usize,
) -> Result<Vec<f64>> {
    if dim == 0 {
        return Err(Error::ZeroDimension);
    }
    if n_samples == 0 {
        return Err(Error::ZeroSamples);
    }
    let mut row = vec![0.0f64; dim];
    let norms = (0..n_samples)
        .map(|_| {
            for z in row.iter_mut() {
                *z = rng.sample(StandardNormal);
            }
            squared_norm(&row)
        })
        .collect();
    Ok(norms)
}
