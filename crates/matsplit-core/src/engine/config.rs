use super::filters::ThresholdFilter;
use std::path::PathBuf;
use thiserror::Error;

/// Column used for stratification when the caller does not name one.
pub const DEFAULT_STRATIFY_COLUMN: &str = "chemical_system";
/// Fraction of each category drawn into the validation partition by default.
pub const DEFAULT_VAL_SIZE: f64 = 0.2;
/// RNG seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Well-known column targeted by the structure-size filter.
pub const NUM_SITES_COLUMN: &str = "num_sites";
/// Well-known column targeted by the stability filter.
pub const ENERGY_ABOVE_HULL_COLUMN: &str = "energy_above_hull";

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("val_size must be strictly between 0 and 1, got {0}")]
    ValSizeOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub stratify_by: String,
    pub val_size: f64,
    pub seed: u64,
    pub max_num_sites: Option<f64>,
    pub energy_above_hull_max: Option<f64>,
}

impl SplitConfig {
    /// The threshold filters this configuration enables, in application
    /// order: structure size first, then stability.
    pub fn threshold_filters(&self) -> Vec<ThresholdFilter> {
        let mut filters = Vec::new();
        if let Some(max) = self.max_num_sites {
            filters.push(ThresholdFilter::new(NUM_SITES_COLUMN, max));
        }
        if let Some(max) = self.energy_above_hull_max {
            filters.push(ThresholdFilter::new(ENERGY_ABOVE_HULL_COLUMN, max));
        }
        filters
    }
}

#[derive(Default)]
pub struct SplitConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    stratify_by: Option<String>,
    val_size: Option<f64>,
    seed: Option<u64>,
    max_num_sites: Option<f64>,
    energy_above_hull_max: Option<f64>,
}

impl SplitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }
    pub fn stratify_by(mut self, column: impl Into<String>) -> Self {
        self.stratify_by = Some(column.into());
        self
    }
    pub fn val_size(mut self, fraction: f64) -> Self {
        self.val_size = Some(fraction);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn max_num_sites(mut self, max: f64) -> Self {
        self.max_num_sites = Some(max);
        self
    }
    pub fn energy_above_hull_max(mut self, max: f64) -> Self {
        self.energy_above_hull_max = Some(max);
        self
    }

    pub fn build(self) -> Result<SplitConfig, ConfigError> {
        let val_size = self.val_size.unwrap_or(DEFAULT_VAL_SIZE);
        if !(val_size > 0.0 && val_size < 1.0) {
            return Err(ConfigError::ValSizeOutOfRange(val_size));
        }
        Ok(SplitConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            stratify_by: self
                .stratify_by
                .unwrap_or_else(|| DEFAULT_STRATIFY_COLUMN.to_string()),
            val_size,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            max_num_sites: self.max_num_sites,
            energy_above_hull_max: self.energy_above_hull_max,
        })
    }
}
