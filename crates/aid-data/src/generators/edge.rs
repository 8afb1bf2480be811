//! Aid edge generation.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::Rng;
use tracing::{debug, warn};

use crate::config::GenConfig;
use crate::models::{AidEdge, AidType, NeedLevel, Organization, Region};

/// Configuration for edge sampling.
#[derive(Debug, Clone)]
pub struct EdgeGenConfig {
    /// Number of (org, region, aid type) draws.
    pub total_projects: usize,
    /// Probability that a draw targets a high-need region.
    pub high_need_bias: f64,
    /// Project count contributed by a single draw.
    pub project_count: RangeInclusive<u32>,
}

impl Default for EdgeGenConfig {
    fn default() -> Self {
        Self::from(&GenConfig::default())
    }
}

impl From<&GenConfig> for EdgeGenConfig {
    fn from(config: &GenConfig) -> Self {
        Self {
            total_projects: config.total_projects,
            high_need_bias: config.high_need_bias,
            project_count: config.project_count_range(),
        }
    }
}

/// Samples aid edges between organizations and regions.
///
/// Each draw picks a uniform organization, a region (from the high-need
/// subset with probability `high_need_bias`, otherwise from all regions),
/// a uniform aid type and a project count. Draws that hit an existing
/// `(org, region, aid type)` triple add to its `project_count`.
pub struct EdgeGenerator {
    config: EdgeGenConfig,
}

impl EdgeGenerator {
    pub fn new() -> Self {
        Self {
            config: EdgeGenConfig::default(),
        }
    }

    pub fn with_config(config: EdgeGenConfig) -> Self {
        Self { config }
    }

    /// Generates edges in first-draw order.
    pub fn generate(
        &self,
        orgs: &[Organization],
        regions: &[Region],
        rng: &mut impl Rng,
    ) -> Vec<AidEdge> {
        if orgs.is_empty() || regions.is_empty() {
            warn!(
                "Cannot generate aid edges from {} organizations and {} regions",
                orgs.len(),
                regions.len()
            );
            return Vec::new();
        }
        if self.config.project_count.is_empty() {
            warn!(
                "Empty project count range {:?}, no edges generated",
                self.config.project_count
            );
            return Vec::new();
        }

        let high_need: Vec<&Region> = regions
            .iter()
            .filter(|r| r.need_level == NeedLevel::High)
            .collect();
        if high_need.is_empty() {
            debug!("No high-need regions, sampling from all regions");
        }

        let mut edges: Vec<AidEdge> = Vec::new();
        let mut index: HashMap<(&str, &str, AidType), usize> = HashMap::new();

        for _ in 0..self.config.total_projects {
            let org = &orgs[rng.gen_range(0..orgs.len())];

            let targets_high_need = rng.gen_range(0.0..1.0) < self.config.high_need_bias;
            let region = if targets_high_need && !high_need.is_empty() {
                high_need[rng.gen_range(0..high_need.len())]
            } else {
                &regions[rng.gen_range(0..regions.len())]
            };

            let aid_type = AidType::ALL[rng.gen_range(0..AidType::ALL.len())];
            let count = rng.gen_range(self.config.project_count.clone());

            let key = (org.id.as_str(), region.id.as_str(), aid_type);
            match index.get(&key) {
                Some(&i) => {
                    let edge = &mut edges[i];
                    edge.project_count = edge.project_count.saturating_add(count);
                }
                None => {
                    index.insert(key, edges.len());
                    edges.push(AidEdge {
                        org_id: org.id.clone(),
                        region_id: region.id.clone(),
                        aid_type,
                        project_count: count,
                    });
                }
            }
        }

        debug!(
            "Accumulated {} draws into {} edges",
            self.config.total_projects,
            edges.len()
        );
        edges
    }
}

impl Default for EdgeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_countries;
    use crate::generators::{OrgGenerator, RegionGenerator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn fixtures() -> (Vec<Organization>, Vec<Region>) {
        let orgs = OrgGenerator::default().generate();
        let regions = RegionGenerator::default().generate(&default_countries());
        (orgs, regions)
    }

    #[test]
    fn test_edges_are_unique_and_bounded() {
        let (orgs, regions) = fixtures();
        let mut rng = rand::thread_rng();
        let edges = EdgeGenerator::new().generate(&orgs, &regions, &mut rng);

        assert!(!edges.is_empty());
        assert!(edges.len() <= 180);

        let triples: HashSet<_> = edges
            .iter()
            .map(|e| (e.org_id.as_str(), e.region_id.as_str(), e.aid_type))
            .collect();
        assert_eq!(triples.len(), edges.len());

        let total: u32 = edges.iter().map(|e| e.project_count).sum();
        assert!((180..=180 * 15).contains(&total));
        assert!(edges.iter().all(|e| e.project_count >= 1));
    }

    #[test]
    fn test_edges_reference_known_entities() {
        let (orgs, regions) = fixtures();
        let mut rng = rand::thread_rng();
        let edges = EdgeGenerator::new().generate(&orgs, &regions, &mut rng);

        let org_ids: HashSet<_> = orgs.iter().map(|o| o.id.as_str()).collect();
        let region_ids: HashSet<_> = regions.iter().map(|r| r.id.as_str()).collect();
        for edge in &edges {
            assert!(org_ids.contains(edge.org_id.as_str()));
            assert!(region_ids.contains(edge.region_id.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_edges() {
        let (orgs, regions) = fixtures();
        let edge_gen = EdgeGenerator::new();

        let a = edge_gen.generate(&orgs, &regions, &mut StdRng::seed_from_u64(12345));
        let b = edge_gen.generate(&orgs, &regions, &mut StdRng::seed_from_u64(12345));

        assert_eq!(a, b);
    }

    #[test]
    fn test_full_bias_targets_high_need_only() {
        let (orgs, regions) = fixtures();
        let edge_gen = EdgeGenerator::with_config(EdgeGenConfig {
            high_need_bias: 1.0,
            ..Default::default()
        });
        let edges = edge_gen.generate(&orgs, &regions, &mut StdRng::seed_from_u64(1));

        let high_need: HashSet<_> = regions
            .iter()
            .filter(|r| r.need_level == NeedLevel::High)
            .map(|r| r.id.as_str())
            .collect();
        assert!(
            edges
                .iter()
                .all(|e| high_need.contains(e.region_id.as_str()))
        );
    }

    #[test]
    fn test_repeated_draws_accumulate() {
        let orgs = vec![Organization {
            id: "oxfam".into(),
            name: "Oxfam".into(),
        }];
        let regions = vec![Region {
            id: "yemen-taiz".into(),
            country_id: "yemen".into(),
            name: "Taiz".into(),
            population: 2_800_000,
            need_level: NeedLevel::High,
        }];
        let edge_gen = EdgeGenerator::with_config(EdgeGenConfig {
            total_projects: 50,
            high_need_bias: 0.7,
            project_count: 2..=2,
        });

        let edges = edge_gen.generate(&orgs, &regions, &mut rand::thread_rng());

        // One org and one region leave only the aid type free.
        assert!(edges.len() <= AidType::ALL.len());
        assert_eq!(edges.iter().map(|e| e.project_count).sum::<u32>(), 100);
    }

    #[test]
    fn test_accumulation_saturates() {
        let orgs = vec![Organization {
            id: "oxfam".into(),
            name: "Oxfam".into(),
        }];
        let regions = vec![Region {
            id: "sudan-darfur".into(),
            country_id: "sudan".into(),
            name: "Darfur".into(),
            population: 9_000_000,
            need_level: NeedLevel::High,
        }];
        let edge_gen = EdgeGenerator::with_config(EdgeGenConfig {
            total_projects: 10,
            high_need_bias: 0.7,
            project_count: u32::MAX..=u32::MAX,
        });

        let edges = edge_gen.generate(&orgs, &regions, &mut StdRng::seed_from_u64(5));

        // Ten draws over three aid types always repeat a triple.
        assert!(edges.len() < 10);
        assert!(edges.iter().all(|e| e.project_count == u32::MAX));
    }

    #[test]
    fn test_no_high_need_regions_falls_back() {
        let (orgs, mut regions) = fixtures();
        regions.retain(|r| r.need_level != NeedLevel::High);

        let edge_gen = EdgeGenerator::with_config(EdgeGenConfig {
            high_need_bias: 1.0,
            ..Default::default()
        });
        let edges = edge_gen.generate(&orgs, &regions, &mut rand::thread_rng());

        assert!(!edges.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let (orgs, regions) = fixtures();
        let mut rng = rand::thread_rng();
        let edge_gen = EdgeGenerator::new();

        assert!(edge_gen.generate(&[], &regions, &mut rng).is_empty());
        assert!(edge_gen.generate(&orgs, &[], &mut rng).is_empty());
    }
}
