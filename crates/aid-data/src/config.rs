//! Configuration types for dataset generation.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Default directory the dataset files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "src/data";

/// Default number of random project draws.
pub const DEFAULT_TOTAL_PROJECTS: usize = 180;

pub const ENV_OUTPUT_DIR: &str = "AID_DATA_OUTPUT_DIR";
pub const ENV_TOTAL_PROJECTS: &str = "AID_DATA_TOTAL_PROJECTS";
pub const ENV_SEED: &str = "AID_DATA_SEED";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("High-need bias must be within [0, 1], got {0}")]
    BiasOutOfRange(f64),
    #[error("Project count range {min}..={max} is empty or starts at zero")]
    InvalidProjectCount { min: u32, max: u32 },
    #[error("Total projects must be at least 1")]
    NoProjects,
    #[error("{total_projects} projects of up to {max} each overflow the project counters")]
    ProjectCountOverflow { total_projects: usize, max: u32 },
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenConfig {
    /// Directory the four JSON files are written to.
    pub output_dir: PathBuf,

    /// Number of (org, region, aid type) draws.
    pub total_projects: usize,

    /// Probability that a draw targets the high-need region subset.
    pub high_need_bias: f64,

    /// Smallest project count a single draw contributes.
    pub project_count_min: u32,

    /// Largest project count a single draw contributes.
    pub project_count_max: u32,

    /// Seed for reproducible edges. `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            total_projects: DEFAULT_TOTAL_PROJECTS,
            high_need_bias: 0.7,
            project_count_min: 1,
            project_count_max: 15,
            seed: None,
        }
    }
}

impl GenConfig {
    /// Builds a configuration from the defaults overlaid with any
    /// `AID_DATA_*` environment variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GenConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|d| !d.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup(ENV_TOTAL_PROJECTS) {
            config.total_projects = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_TOTAL_PROJECTS,
                value,
            })?;
        }

        if let Some(value) = lookup(ENV_SEED) {
            let seed = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_SEED,
                value,
            })?;
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_projects == 0 {
            return Err(ConfigError::NoProjects);
        }
        if !(0.0..=1.0).contains(&self.high_need_bias) {
            return Err(ConfigError::BiasOutOfRange(self.high_need_bias));
        }
        if self.project_count_min == 0 || self.project_count_min > self.project_count_max {
            return Err(ConfigError::InvalidProjectCount {
                min: self.project_count_min,
                max: self.project_count_max,
            });
        }
        // Every edge's project_count, and their sum, must fit in a u32.
        let worst_case =
            (self.total_projects as u64).saturating_mul(self.project_count_max as u64);
        if worst_case > u32::MAX as u64 {
            return Err(ConfigError::ProjectCountOverflow {
                total_projects: self.total_projects,
                max: self.project_count_max,
            });
        }
        Ok(())
    }

    pub fn project_count_range(&self) -> RangeInclusive<u32> {
        self.project_count_min..=self.project_count_max
    }
}
