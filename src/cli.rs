use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which figures to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Figure {
    All,
    Histogram,
    Boundary,
    Interval,
}

impl Figure {
    pub fn includes(self, other: Figure) -> bool {
        self == Figure::All || self == other
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Directory the PNG figures are written to (overrides config)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Samples drawn per dimension (overrides config)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Seed for reproducible figures (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest dimension visited by the sweeps (overrides config)
    #[arg(long)]
    pub max_dim: Option<usize>,

    /// Figure to render
    #[arg(long, value_enum, default_value_t = Figure::All)]
    pub figure: Figure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_everything() {
        let args = Args::parse_from(["ndnormal"]);
        assert_eq!(args.config, "config.toml");
        assert_eq!(args.figure, Figure::All);
        assert!(args.samples.is_none());
        assert!(Figure::All.includes(Figure::Interval));
    }

    #[test]
    fn overrides_parse() {
        let args = Args::parse_from([
            "ndnormal",
            "--figure",
            "boundary",
            "--samples",
            "200",
            "--seed",
            "3",
            "--max-dim",
            "40",
            "--out-dir",
            "/tmp/plots",
        ]);
        assert_eq!(args.figure, Figure::Boundary);
        assert!(!args.figure.includes(Figure::Histogram));
        assert_eq!(args.samples, Some(200));
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.max_dim, Some(40));
        assert_eq!(args.out_dir, Some(PathBuf::from("/tmp/plots")));
    }
}
