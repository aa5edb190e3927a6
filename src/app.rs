//! Runs the sampling pipeline and writes the requested figures.

use std::error::Error;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::time::Instant;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::cli::{Args, Figure};
use crate::config::AppConfig;
use crate::core::sweep::{boundary_sweep, interval_sweep, single_dimension};
use crate::plots;

/// Fold command-line overrides into the loaded config.
pub fn apply_overrides(cfg: &mut AppConfig, args: &Args) {
    if let Some(dir) = &args.out_dir {
        cfg.output.dir = dir.clone();
    }
    if let Some(n) = args.samples {
        cfg.sampling.n_samples = n;
    }
    if let Some(seed) = args.seed {
        cfg.sampling.seed = Some(seed);
    }
    if let Some(max_dim) = args.max_dim {
        cfg.sweep.dim_max = max_dim;
    }
}

/// Render `figure` according to `cfg`, returning the paths written.
pub fn run(cfg: &AppConfig, figure: Figure) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    cfg.validate()?;
    create_dir_all(&cfg.output.dir)?;

    match cfg.sampling.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            run_with_rng(&mut StdRng::seed_from_u64(seed), cfg, figure)
        }
        None => run_with_rng(&mut rand::rng(), cfg, figure),
    }
}

fn run_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &AppConfig,
    figure: Figure,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let n_samples = cfg.sampling.n_samples;
    let size = cfg.output.size();
    let mut written = Vec::new();

    if figure.includes(Figure::Histogram) {
        let started = Instant::now();
        let dim = cfg.histogram.dimension;
        let single = single_dimension(rng, dim, n_samples, cfg.histogram.sigma)?;
        let path = cfg.output.dir.join(plots::histogram_file_name(dim));
        plots::render_norm_histogram(&path, &plots::histogram_title(dim), &single, size)?;
        info!(
            "n={dim}: bounds [{:.3}, {:.3}] -> {} ({:.2?})",
            single.bounds.lower,
            single.bounds.upper,
            path.display(),
            started.elapsed()
        );
        written.push(path);
    }

    if figure.includes(Figure::Boundary) {
        let started = Instant::now();
        let range = cfg.sweep.range()?;
        info!(
            "Boundary sweep over n={}..={} (step {}), N={n_samples}",
            range.start, range.end, range.step
        );
        let series = boundary_sweep(rng, range, n_samples, cfg.sweep.sigma)?;
        let path = cfg.output.dir.join(plots::BOUNDARY_FILE);
        plots::render_boundary_sweep(&path, &series, cfg.sweep.sigma.factor(), size)?;
        if let (Some(lo), Some(hi)) = (series.lower.last(), series.upper.last()) {
            info!("Largest dimension: normalized bounds [{lo:.4}, {hi:.4}]");
        }
        info!("Saved {} ({:.2?})", path.display(), started.elapsed());
        written.push(path);
    }

    if figure.includes(Figure::Interval) {
        let started = Instant::now();
        let range = cfg.sweep.range()?;
        info!(
            "Interval sweep over n={}..={} (step {}), band={}",
            range.start, range.end, range.step, cfg.sweep.band
        );
        let series = interval_sweep(rng, range, n_samples, cfg.sweep.band)?;
        let path = cfg.output.dir.join(plots::INTERVAL_FILE);
        plots::render_interval_sweep(&path, &series, size)?;
        if let Some(last) = series.get(series.len().saturating_sub(1)) {
            info!("Largest dimension: within-band fraction {:.4}", last.within);
        }
        info!("Saved {} ({:.2?})", path.display(), started.elapsed());
        written.push(path);
    }

    Ok(written)
}
