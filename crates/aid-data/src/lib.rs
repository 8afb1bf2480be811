//! Synthetic dataset generation for the aid map.
//!
//! This crate fabricates a small humanitarian-aid dataset (countries, regions,
//! organizations and aid edges between them) and writes it as JSON files for
//! seeding demo visualizations.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aid_data::prelude::*;
//!
//! let dataset = DatasetBuilder::new()
//!     .with_total_projects(180)
//!     .with_output_dir("src/data")
//!     .build()?;
//!
//! println!("{} aid edges", dataset.edges.len());
//! ```

pub mod builders;
pub mod catalog;
pub mod config;
pub mod generators;
pub mod models;
pub mod writer;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{BuildError, Dataset, DatasetBuilder, DatasetSummary};
    pub use crate::catalog::{RegionRow, RegionTable};
    pub use crate::config::{ConfigError, GenConfig};
    pub use crate::generators::{EdgeGenConfig, EdgeGenerator, OrgGenerator, RegionGenerator};
    pub use crate::models::{AidEdge, AidType, Country, NeedLevel, Organization, Region};
    pub use crate::writer::{DatasetWriter, WriteError};
}
