//! Fluent builder API for datasets.
//!
//! The [`DatasetBuilder`] runs the generators in order and optionally
//! writes the result with a [`DatasetWriter`](crate::writer::DatasetWriter).

mod dataset;

pub use dataset::{BuildError, Dataset, DatasetBuilder, DatasetSummary};
