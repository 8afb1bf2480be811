//! Entity types written to the dataset files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative severity tag attached to countries and regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedLevel {
    Low,
    Medium,
    High,
}

impl NeedLevel {
    pub const ALL: [NeedLevel; 3] = [NeedLevel::Low, NeedLevel::Medium, NeedLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            NeedLevel::Low => "low",
            NeedLevel::Medium => "medium",
            NeedLevel::High => "high",
        }
    }
}

impl fmt::Display for NeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of assistance delivered along an aid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AidType {
    Food,
    Medical,
    Infrastructure,
}

impl AidType {
    pub const ALL: [AidType; 3] = [AidType::Food, AidType::Medical, AidType::Infrastructure];

    pub fn as_str(&self) -> &'static str {
        match self {
            AidType::Food => "food",
            AidType::Medical => "medical",
            AidType::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for AidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub population: u64,
    pub need_level: NeedLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// `<country_id>-<slug>`
    pub id: String,
    pub country_id: String,
    pub name: String,
    pub population: u64,
    pub need_level: NeedLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// Aggregated aid flow from one organization to one region for one aid type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidEdge {
    pub org_id: String,
    pub region_id: String,
    pub aid_type: AidType,
    pub project_count: u32,
}
