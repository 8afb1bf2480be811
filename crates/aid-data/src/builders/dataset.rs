//! Fluent builder for generating the aid dataset.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{self, RegionTable};
use crate::config::{ConfigError, GenConfig};
use crate::generators::{EdgeGenConfig, EdgeGenerator, OrgGenerator, RegionGenerator};
use crate::models::{AidEdge, AidType, Country, Organization, Region};
use crate::writer::{DatasetWriter, WriteError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to write dataset: {0}")]
    Write(#[from] WriteError),
}

/// The four generated collections.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub countries: Vec<Country>,
    pub regions: Vec<Region>,
    pub orgs: Vec<Organization>,
    pub edges: Vec<AidEdge>,
}

/// Entity counts for a generated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub country_count: usize,
    pub region_count: usize,
    pub org_count: usize,
    pub edge_count: usize,
    /// Sum of `project_count` across all edges.
    pub total_projects: u64,
    pub projects_by_aid_type: BTreeMap<AidType, u64>,
}

impl Dataset {
    pub fn summary(&self) -> DatasetSummary {
        let mut projects_by_aid_type = BTreeMap::new();
        for edge in &self.edges {
            *projects_by_aid_type.entry(edge.aid_type).or_insert(0) += u64::from(edge.project_count);
        }

        DatasetSummary {
            country_count: self.countries.len(),
            region_count: self.regions.len(),
            org_count: self.orgs.len(),
            edge_count: self.edges.len(),
            total_projects: self.edges.iter().map(|e| u64::from(e.project_count)).sum(),
            projects_by_aid_type,
        }
    }
}

/// Builder for generating (and writing) a dataset.
///
/// # Example
///
/// ```rust,ignore
/// let dataset = DatasetBuilder::new()
///     .with_total_projects(180)
///     .with_seed(12345)
///     .with_output_dir("src/data")
///     .build()?;
/// ```
pub struct DatasetBuilder {
    config: GenConfig,

    // Seed tables
    countries: Vec<Country>,
    region_table: RegionTable,
    org_names: Vec<String>,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a builder over the built-in seed tables with default settings.
    pub fn new() -> Self {
        Self::from_config(GenConfig::default())
    }

    pub fn from_config(config: GenConfig) -> Self {
        Self {
            config,
            countries: catalog::default_countries(),
            region_table: catalog::default_region_table(),
            org_names: catalog::default_org_names(),
        }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Sets the number of random project draws.
    pub fn with_total_projects(mut self, count: usize) -> Self {
        self.config.total_projects = count;
        self
    }

    /// Sets the probability that a draw targets a high-need region.
    pub fn with_high_need_bias(mut self, bias: f64) -> Self {
        self.config.high_need_bias = bias;
        self
    }

    pub fn with_project_count_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.config.project_count_min = *range.start();
        self.config.project_count_max = *range.end();
        self
    }

    /// Makes edge generation reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_countries(mut self, countries: Vec<Country>) -> Self {
        self.countries = countries;
        self
    }

    pub fn with_region_table(mut self, table: RegionTable) -> Self {
        self.region_table = table;
        self
    }

    pub fn with_org_names(mut self, names: Vec<String>) -> Self {
        self.org_names = names;
        self
    }

    /// Generates the dataset with the given RNG (ignores the configured seed).
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<Dataset, ConfigError> {
        self.config.validate()?;
        let start = Instant::now();

        let orgs = OrgGenerator::new(self.org_names.clone()).generate();
        let regions = RegionGenerator::new(self.region_table.clone()).generate(&self.countries);
        debug!(
            "Generated {} organizations and {} regions",
            orgs.len(),
            regions.len()
        );

        let edges = EdgeGenerator::with_config(EdgeGenConfig::from(&self.config))
            .generate(&orgs, &regions, rng);

        info!("Generated dataset in {}ms", start.elapsed().as_millis());

        Ok(Dataset {
            countries: self.countries.clone(),
            regions,
            orgs,
            edges,
        })
    }

    /// Generates the dataset, seeding the RNG from the config when a seed is set.
    pub fn generate(&self) -> Result<Dataset, ConfigError> {
        match self.config.seed {
            Some(seed) => self.build_data(&mut StdRng::seed_from_u64(seed)),
            None => self.build_data(&mut rand::thread_rng()),
        }
    }

    /// Generates the dataset and writes it to the configured output directory.
    pub fn build(self) -> Result<Dataset, BuildError> {
        let dataset = self.generate()?;
        DatasetWriter::new(self.config.output_dir.clone()).write(&dataset)?;
        Ok(dataset)
    }
}
