//! Entity generators for the aid dataset.
//!
//! - [`OrgGenerator`]: Derive organizations and their ids from display names
//! - [`RegionGenerator`]: Flatten the per-country region table
//! - [`EdgeGenerator`]: Sample aid edges biased toward high-need regions

pub mod edge;
pub mod org;
pub mod region;

pub use edge::{EdgeGenConfig, EdgeGenerator};
pub use org::{OrgGenerator, org_id};
pub use region::{RegionGenerator, display_name};
