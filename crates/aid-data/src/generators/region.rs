//! Region generation from the per-country region table.

use tracing::debug;

use crate::catalog::RegionTable;
use crate::models::{Country, Region};

/// Turns a region slug into a display name: every alphabetic run is
/// capitalized, then hyphens become spaces (`west-bank-north` -> `West Bank North`).
pub fn display_name(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len());
    let mut prev_alpha = false;

    for c in slug.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            name.push(if c == '-' { ' ' } else { c });
            prev_alpha = false;
        }
    }

    name
}

/// Flattens a [`RegionTable`] into region records.
pub struct RegionGenerator {
    table: RegionTable,
}

impl RegionGenerator {
    pub fn new(table: RegionTable) -> Self {
        Self { table }
    }

    /// Generates regions in country order, then table row order.
    ///
    /// Countries missing from the table contribute nothing.
    pub fn generate(&self, countries: &[Country]) -> Vec<Region> {
        let mut regions = Vec::new();

        for country in countries {
            let Some(rows) = self.table.get(&country.id) else {
                debug!("No region rows for country {}", country.id);
                continue;
            };

            regions.extend(rows.iter().map(|row| Region {
                id: format!("{}-{}", country.id, row.slug),
                country_id: country.id.clone(),
                name: display_name(&row.slug),
                population: row.population,
                need_level: row.need_level,
            }));
        }

        regions
    }
}

impl Default for RegionGenerator {
    fn default() -> Self {
        Self::new(crate::catalog::default_region_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RegionRow, default_countries, default_region_table};
    use crate::models::NeedLevel;
    use std::collections::HashSet;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("aleppo"), "Aleppo");
        assert_eq!(display_name("blue-nile"), "Blue Nile");
        assert_eq!(display_name("west-bank-north"), "West Bank North");
    }

    #[test]
    fn test_default_regions() {
        let countries = default_countries();
        let regions = RegionGenerator::default().generate(&countries);
        let expected: usize = default_region_table().values().map(Vec::len).sum();

        assert_eq!(regions.len(), expected);

        let country_ids: HashSet<_> = countries.iter().map(|c| c.id.as_str()).collect();
        for region in &regions {
            assert!(country_ids.contains(region.country_id.as_str()));
            assert!(region.id.starts_with(&format!("{}-", region.country_id)));
        }

        let gaza = regions.iter().find(|r| r.id == "palestine-gaza").unwrap();
        assert_eq!(gaza.name, "Gaza");
        assert_eq!(gaza.population, 2_300_000);
        assert_eq!(gaza.need_level, NeedLevel::High);
    }

    #[test]
    fn test_regions_follow_country_order() {
        let regions = RegionGenerator::default().generate(&default_countries());

        assert_eq!(regions.first().unwrap().id, "syria-aleppo");
        assert_eq!(regions.last().unwrap().id, "ethiopia-somali-region");
    }

    #[test]
    fn test_country_without_rows_is_skipped() {
        let mut countries = default_countries();
        countries.push(Country {
            id: "atlantis".into(),
            name: "Atlantis".into(),
            population: 1,
            need_level: NeedLevel::Low,
        });

        let regions = RegionGenerator::default().generate(&countries);

        assert!(regions.iter().all(|r| r.country_id != "atlantis"));
        assert_eq!(
            regions.len(),
            RegionGenerator::default().generate(&default_countries()).len()
        );
    }

    #[test]
    fn test_custom_table() {
        let mut table = RegionTable::new();
        table.insert(
            "syria".into(),
            vec![RegionRow::new("old-city", 10, NeedLevel::Medium)],
        );

        let regions = RegionGenerator::new(table).generate(&default_countries());

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].id, "syria-old-city");
        assert_eq!(regions[0].name, "Old City");
    }
}
