use std::fs;
use std::path::PathBuf;

use ndnormal::app;
use ndnormal::cli::{Args, Figure};
use ndnormal::config::AppConfig;
use ndnormal::core::stats::Sigma;
use ndnormal::core::sweep::{DimRange, boundary_sweep, interval_sweep, single_dimension};
use ndnormal::plots;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn unique_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "ndnormal_render_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&path).unwrap();
    path
}

fn assert_non_empty_file(path: &PathBuf) {
    let meta = fs::metadata(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    assert!(meta.len() > 0, "{} is empty", path.display());
}

#[test]
fn renders_each_figure_to_png() {
    let dir = unique_dir("figures");
    let mut rng = StdRng::seed_from_u64(21);

    let single = single_dimension(&mut rng, 100, 1000, Sigma::Two).unwrap();
    let hist_path = dir.join(plots::histogram_file_name(100));
    plots::render_norm_histogram(&hist_path, &plots::histogram_title(100), &single, (640, 400))
        .unwrap();
    assert_non_empty_file(&hist_path);

    let range = DimRange::new(1, 40, 1).unwrap();
    let bounds = boundary_sweep(&mut rng, range, 200, Sigma::Two).unwrap();
    let boundary_path = dir.join(plots::BOUNDARY_FILE);
    plots::render_boundary_sweep(&boundary_path, &bounds, 2.0, (640, 400)).unwrap();
    assert_non_empty_file(&boundary_path);

    let intervals = interval_sweep(&mut rng, range, 200, 0.05).unwrap();
    let interval_path = dir.join(plots::INTERVAL_FILE);
    plots::render_interval_sweep(&interval_path, &intervals, (640, 400)).unwrap();
    assert_non_empty_file(&interval_path);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn pipeline_honours_overrides_and_selection() {
    let dir = unique_dir("pipeline");
    let config_path = dir.join("config.toml");
    let out_dir = dir.join("plots");
    let args = Args::parse_from([
        "ndnormal".to_string(),
        "--config".to_string(),
        config_path.to_string_lossy().to_string(),
        "--out-dir".to_string(),
        out_dir.to_string_lossy().to_string(),
        "--samples".to_string(),
        "200".to_string(),
        "--seed".to_string(),
        "9".to_string(),
        "--max-dim".to_string(),
        "20".to_string(),
        "--figure".to_string(),
        "interval".to_string(),
    ]);

    let mut cfg = AppConfig::load_or_default(&args.config);
    assert!(config_path.exists(), "defaults template should be written");
    app::apply_overrides(&mut cfg, &args);
    assert_eq!(cfg.sampling.n_samples, 200);
    assert_eq!(cfg.sampling.seed, Some(9));
    assert_eq!(cfg.sweep.dim_max, 20);

    let written = app::run(&cfg, args.figure).unwrap();
    assert_eq!(written, vec![out_dir.join(plots::INTERVAL_FILE)]);
    assert_non_empty_file(&written[0]);
    assert!(!out_dir.join(plots::BOUNDARY_FILE).exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn pipeline_rejects_invalid_config() {
    let mut cfg = AppConfig::default();
    cfg.sweep.band = 0.0;
    cfg.output.dir = unique_dir("invalid");
    assert!(app::run(&cfg, Figure::All).is_err());
    let _ = fs::remove_dir_all(&cfg.output.dir);
}
