//! Organization generation from display names.

use crate::models::Organization;

/// Accented characters the id derivation folds to ASCII.
const ACCENT_FOLDS: [(char, char); 3] = [('é', 'e'), ('è', 'e'), ('ç', 'c')];

/// Derives an organization id: lowercase, spaces become hyphens, and the
/// accents in [`ACCENT_FOLDS`] are folded. Other characters pass through.
pub fn org_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '-',
            c => ACCENT_FOLDS
                .iter()
                .find(|(accented, _)| *accented == c)
                .map_or(c, |&(_, plain)| plain),
        })
        .collect()
}

/// Builds organization records from a list of display names.
pub struct OrgGenerator {
    names: Vec<String>,
}

impl OrgGenerator {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Generates one organization per name, preserving order.
    ///
    /// Ids are not checked for collisions.
    pub fn generate(&self) -> Vec<Organization> {
        self.names
            .iter()
            .map(|name| Organization {
                id: org_id(name),
                name: name.clone(),
            })
            .collect()
    }
}

impl Default for OrgGenerator {
    fn default() -> Self {
        Self::new(crate::catalog::default_org_names())
    }
}
