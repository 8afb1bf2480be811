//! Hardcoded seed tables the dataset is built from.

use std::collections::HashMap;

use crate::models::Country;
use crate::models::NeedLevel::{self, High, Low, Medium};

/// One row of the per-country region table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRow {
    /// Lowercase, hyphenated region slug (e.g. `blue-nile`).
    pub slug: String,
    pub population: u64,
    pub need_level: NeedLevel,
}

impl RegionRow {
    pub fn new(slug: impl Into<String>, population: u64, need_level: NeedLevel) -> Self {
        Self {
            slug: slug.into(),
            population,
            need_level,
        }
    }
}

/// Country id -> region rows.
pub type RegionTable = HashMap<String, Vec<RegionRow>>;

const COUNTRIES: &[(&str, &str, u64, NeedLevel)] = &[
    ("syria", "Syria", 21_500_000, High),
    ("yemen", "Yemen", 33_000_000, High),
    ("sudan", "Sudan", 45_000_000, High),
    ("afghanistan", "Afghanistan", 40_000_000, High),
    ("somalia", "Somalia", 17_000_000, High),
    ("palestine", "Palestine", 5_000_000, High),
    ("myanmar", "Myanmar", 54_000_000, Medium),
    ("ethiopia", "Ethiopia", 120_000_000, Medium),
];

#[rustfmt::skip]
const REGIONS: &[(&str, &[(&str, u64, NeedLevel)])] = &[
    ("syria", &[
        ("aleppo", 4_500_000, High), ("idlib", 3_000_000, High), ("damascus", 2_500_000, Medium),
        ("homs", 1_500_000, Medium), ("raqqa", 900_000, High),
    ]),
    ("yemen", &[
        ("sanaa", 4_000_000, High), ("aden", 1_200_000, Medium), ("taiz", 2_800_000, High),
        ("hodeidah", 2_000_000, High), ("marib", 1_000_000, High),
    ]),
    ("sudan", &[
        ("khartoum", 6_000_000, High), ("darfur", 9_000_000, High), ("kordofan", 4_000_000, High),
        ("blue-nile", 1_200_000, Medium),
    ]),
    ("afghanistan", &[
        ("kabul", 4_500_000, High), ("herat", 2_000_000, Medium), ("kandahar", 1_500_000, High),
        ("mazar", 1_000_000, Medium),
    ]),
    ("somalia", &[
        ("mogadishu", 2_500_000, High), ("baidoa", 800_000, High), ("hargeisa", 1_200_000, Low),
        ("kismayo", 500_000, High),
    ]),
    ("palestine", &[
        ("gaza", 2_300_000, High), ("west-bank-north", 1_500_000, Medium),
        ("west-bank-south", 1_200_000, Medium),
    ]),
    ("myanmar", &[
        ("rakhine", 3_000_000, High), ("yangon", 7_000_000, Low), ("mandalay", 1_500_000, Low),
    ]),
    ("ethiopia", &[
        ("tigray", 6_000_000, High), ("amhara", 20_000_000, Medium), ("oromia", 35_000_000, Medium),
        ("somali-region", 5_000_000, High),
    ]),
];

pub const NGO_NAMES: [&str; 15] = [
    "World Food Programme",
    "Médecins Sans Frontières",
    "ICRC",
    "UN Refugee Agency",
    "UNICEF",
    "Oxfam",
    "International Rescue Committee",
    "World Health Organization",
    "Save the Children",
    "Islamic Relief",
    "CARE International",
    "Mercy Corps",
    "Norwegian Refugee Council",
    "Action Against Hunger",
    "Direct Relief",
];

/// The eight seeded countries, in table order.
pub fn default_countries() -> Vec<Country> {
    COUNTRIES
        .iter()
        .map(|&(id, name, population, need_level)| Country {
            id: id.to_string(),
            name: name.to_string(),
            population,
            need_level,
        })
        .collect()
}

pub fn default_region_table() -> RegionTable {
    REGIONS
        .iter()
        .map(|&(country_id, rows)| {
            let rows = rows
                .iter()
                .map(|&(slug, population, need_level)| RegionRow::new(slug, population, need_level))
                .collect();
            (country_id.to_string(), rows)
        })
        .collect()
}

pub fn default_org_names() -> Vec<String> {
    NGO_NAMES.iter().map(|name| name.to_string()).collect()
}
