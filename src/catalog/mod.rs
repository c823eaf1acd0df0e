// Catalog data model — the static set of solution exemplars.
//
// These are the types that flow through the engine. The catalog is loaded
// once (from the builtin JSON or a user-supplied file), validated, and
// injected into the components that need it — there is no global state.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The five S5 classification categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum S5Category {
    Smart,
    Sensing,
    Sustainable,
    Social,
    Safe,
}

impl S5Category {
    /// All five categories, in their canonical display order.
    pub const ALL: [S5Category; 5] = [
        S5Category::Smart,
        S5Category::Sensing,
        S5Category::Sustainable,
        S5Category::Social,
        S5Category::Safe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            S5Category::Smart => "Smart",
            S5Category::Sensing => "Sensing",
            S5Category::Sustainable => "Sustainable",
            S5Category::Social => "Social",
            S5Category::Safe => "Safe",
        }
    }
}

impl fmt::Display for S5Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The Big Five personality trait labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "Openness",
            BigFiveTrait::Conscientiousness => "Conscientiousness",
            BigFiveTrait::Extraversion => "Extraversion",
            BigFiveTrait::Agreeableness => "Agreeableness",
            BigFiveTrait::Neuroticism => "Neuroticism",
        }
    }
}

impl fmt::Display for BigFiveTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The per-category descriptive feature text of an exemplar, plus the
/// free-form narrative about its associated personality traits.
///
/// Serde names match the reference catalog JSON, which capitalizes the
/// category keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S5Features {
    #[serde(rename = "Smart")]
    pub smart: String,
    #[serde(rename = "Sensing")]
    pub sensing: String,
    #[serde(rename = "Sustainable")]
    pub sustainable: String,
    #[serde(rename = "Social")]
    pub social: String,
    #[serde(rename = "Safe")]
    pub safe: String,
    #[serde(rename = "Associated Personality Traits")]
    pub traits_narrative: String,
}

impl S5Features {
    /// The descriptive text for one category.
    pub fn text(&self, category: S5Category) -> &str {
        match category {
            S5Category::Smart => &self.smart,
            S5Category::Sensing => &self.sensing,
            S5Category::Sustainable => &self.sustainable,
            S5Category::Social => &self.social,
            S5Category::Safe => &self.safe,
        }
    }
}

/// One solution exemplar in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub s5_features: S5Features,
    pub personality_traits: Vec<BigFiveTrait>,
}

impl CatalogEntry {
    pub fn has_trait(&self, t: BigFiveTrait) -> bool {
        self.personality_traits.contains(&t)
    }
}

/// The ordered, immutable set of exemplars. Fixed at load time; the
/// matcher's tie-breaking and the ranker's stable sort both depend on
/// this order, so it is never resorted in place.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// The reference catalog shipped with the binary (23 exemplars).
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

impl Catalog {
    /// Build a catalog from entries, validating invariants.
    ///
    /// Fails if two entries share an id or if any entry has an empty name
    /// or description. An empty entry list is allowed — the matcher and
    /// ranker both handle it.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = BTreeMap::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                anyhow::bail!("Catalog entry {} has an empty name", entry.id);
            }
            if entry.description.trim().is_empty() {
                anyhow::bail!("Catalog entry {} has an empty description", entry.id);
            }
            if let Some(other) = seen.insert(entry.id, &entry.name) {
                anyhow::bail!(
                    "Duplicate catalog id {}: {:?} and {:?}",
                    entry.id,
                    other,
                    entry.name
                );
            }
        }
        Ok(Self { entries })
    }

    /// The builtin reference catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Self::new(entries)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            entries = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            s5_features: S5Features {
                smart: String::new(),
                sensing: String::new(),
                sustainable: String::new(),
                social: String::new(),
                safe: String::new(),
                traits_narrative: String::new(),
            },
            personality_traits: vec![BigFiveTrait::Openness],
        }
    }

    #[test]
    fn builtin_catalog_has_23_entries() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 23);
    }

    #[test]
    fn builtin_catalog_every_entry_has_traits() {
        let catalog = Catalog::builtin().unwrap();
        for entry in catalog.entries() {
            assert!(
                !entry.personality_traits.is_empty(),
                "Entry {} has no traits",
                entry.id
            );
        }
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = Catalog::new(vec![entry(1, "a"), entry(1, "b")]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_name_rejected() {
        let mut e = entry(1, "a");
        e.name = "  ".to_string();
        assert!(Catalog::new(vec![e]).is_err());
    }

    #[test]
    fn empty_catalog_allowed() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn category_display_names() {
        assert_eq!(S5Category::Sustainable.to_string(), "Sustainable");
        assert_eq!(BigFiveTrait::Neuroticism.to_string(), "Neuroticism");
    }
}
