use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::stats::Sigma;
use crate::core::sweep::{DimRange, check_band};
use crate::core::util::format_compact;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "SamplingConfig::default_n_samples")]
    pub n_samples: usize,
    /// Fixed seed for reproducible figures; unset draws from the thread RNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SamplingConfig {
    fn default_n_samples() -> usize {
        10_000
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            n_samples: Self::default_n_samples(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramConfig {
    #[serde(default = "HistogramConfig::default_dimension")]
    pub dimension: usize,
    #[serde(default)]
    pub sigma: Sigma,
}

impl HistogramConfig {
    fn default_dimension() -> usize {
        100
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            dimension: Self::default_dimension(),
            sigma: Sigma::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "SweepConfig::default_dim_min")]
    pub dim_min: usize,
    #[serde(default = "SweepConfig::default_dim_max")]
    pub dim_max: usize,
    #[serde(default = "SweepConfig::default_dim_step")]
    pub dim_step: usize,
    #[serde(default)]
    pub sigma: Sigma,
    /// Half-width of the interval band, relative to the dimension.
    #[serde(default = "SweepConfig::default_band")]
    pub band: f64,
}

impl SweepConfig {
    fn default_dim_min() -> usize {
        1
    }
    fn default_dim_max() -> usize {
        5000
    }
    fn default_dim_step() -> usize {
        1
    }
    fn default_band() -> f64 {
        0.05
    }

    pub fn range(&self) -> Result<DimRange> {
        DimRange::new(self.dim_min, self.dim_max, self.dim_step)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            dim_min: Self::default_dim_min(),
            dim_max: Self::default_dim_max(),
            dim_step: Self::default_dim_step(),
            sigma: Sigma::default(),
            band: Self::default_band(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,
    #[serde(default = "OutputConfig::default_width")]
    pub width: u32,
    #[serde(default = "OutputConfig::default_height")]
    pub height: u32,
}

impl OutputConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("target/plots/concentration")
    }
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        700
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub histogram: HistogramConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sampling.n_samples == 0 {
            return Err(Error::ZeroSamples);
        }
        if self.histogram.dimension == 0 {
            return Err(Error::ZeroDimension);
        }
        self.sweep.range()?;
        check_band(self.sweep.band)
    }

    /// Render the defaults as a TOML template with every value commented out.
    fn commented_defaults() -> Option<String> {
        let text = toml::to_string_pretty(&Self::default()).ok()?;
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
            } else {
                let mut out_line = line.to_string();
                if let Some((lhs, rhs)) = line.split_once('=') {
                    let rhs_trim = rhs.trim();
                    if rhs_trim.contains('.') && !rhs_trim.contains('"') {
                        if let Ok(val) = rhs_trim.parse::<f64>() {
                            let mut formatted = format_compact(val);
                            if !formatted.contains('.') {
                                formatted.push_str(".0");
                            }
                            out_line = format!("{} = {}", lhs.trim(), formatted);
                        }
                    }
                }
                commented.push_str("# ");
                commented.push_str(&out_line);
                commented.push('\n');
            }
        }
        Some(commented)
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        match Self::commented_defaults() {
            Some(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            None => warn!("Failed to serialize default config; continuing with defaults"),
        }
        Self::default()
    }
}
