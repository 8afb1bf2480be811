//! Writing generated datasets to JSON files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::builders::Dataset;

pub const COUNTRIES_FILE: &str = "countries.json";
pub const REGIONS_FILE: &str = "regions.json";
pub const ORGS_FILE: &str = "orgs.json";
pub const AID_EDGES_FILE: &str = "aid_edges.json";

/// Every file a dataset write produces, in write order.
pub const DATASET_FILES: [&str; 4] = [COUNTRIES_FILE, REGIONS_FILE, ORGS_FILE, AID_EDGES_FILE];

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes each dataset collection to its own pretty-printed JSON file.
///
/// Files are overwritten unconditionally and written one after another, so a
/// failure partway leaves earlier files replaced and later ones untouched.
pub struct DatasetWriter {
    output_dir: PathBuf,
}

impl DatasetWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes all four collections, creating the output directory if needed.
    /// Returns the written paths.
    pub fn write(&self, dataset: &Dataset) -> Result<Vec<PathBuf>, WriteError> {
        fs::create_dir_all(&self.output_dir)?;
        info!("Writing dataset to {}", self.output_dir.display());

        Ok(vec![
            self.write_collection(COUNTRIES_FILE, &dataset.countries)?,
            self.write_collection(REGIONS_FILE, &dataset.regions)?,
            self.write_collection(ORGS_FILE, &dataset.orgs)?,
            self.write_collection(AID_EDGES_FILE, &dataset.edges)?,
        ])
    }

    /// Serializes `items` as a JSON array with 2-space indentation.
    fn write_collection<T: Serialize>(
        &self,
        file_name: &str,
        items: &[T],
    ) -> Result<PathBuf, WriteError> {
        let path = self.output_dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);

        // Non-ASCII text is written as raw UTF-8, not \uXXXX escapes.
        serde_json::to_writer_pretty(&mut writer, items)?;
        writer.flush()?;

        debug!("Wrote {} records to {}", items.len(), path.display());
        Ok(path)
    }
}
