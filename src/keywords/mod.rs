// Keyword tables — per-category keyword sets loaded from CSV.
//
// Each S5 category has its own row-oriented file with a `Keyword` column
// and an optional `Level` column (1-3). Malformed rows fail at load time,
// never inside per-request classification.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::catalog::S5Category;

/// One keyword, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub text: String,
    /// Keyword strength, 1 (basic) to 3 (advanced). Absent for sets that
    /// only support boolean classification.
    pub level: Option<u8>,
}

/// The keyword set for a single category.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

/// Raw CSV row. `Level` deserializes as a string so a non-integer value
/// produces our own error message rather than a serde type error.
#[derive(Debug, Deserialize)]
struct KeywordRow {
    #[serde(rename = "Keyword")]
    keyword: String,
    #[serde(rename = "Level")]
    level: Option<String>,
}

impl KeywordSet {
    /// Parse a keyword set from CSV text.
    ///
    /// Every keyword is lowercased on the way in. When the `Level` column
    /// is present, every row must carry an integer in 1..=3 — a missing or
    /// non-integer value aborts the load.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers().context("Failed to read CSV header")?;
        if !headers.iter().any(|h| h == "Keyword") {
            anyhow::bail!("Keyword CSV is missing the required `Keyword` column");
        }
        let has_level_column = headers.iter().any(|h| h == "Level");

        let mut keywords = Vec::new();
        for (line, row) in csv_reader.deserialize::<KeywordRow>().enumerate() {
            let row = row.with_context(|| format!("Malformed keyword row {}", line + 2))?;

            let text = row.keyword.trim().to_lowercase();
            if text.is_empty() {
                anyhow::bail!("Empty keyword at row {}", line + 2);
            }

            let level = if has_level_column {
                let raw = row.level.unwrap_or_default();
                let level: u8 = raw.trim().parse().map_err(|_| {
                    anyhow::anyhow!("Non-integer level {raw:?} for keyword {text:?}")
                })?;
                if !(1..=3).contains(&level) {
                    anyhow::bail!("Level {level} for keyword {text:?} is outside 1..=3");
                }
                Some(level)
            } else {
                None
            };

            keywords.push(Keyword { text, level });
        }

        Ok(Self { keywords })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// True when every keyword in the set carries a level.
    pub fn is_leveled(&self) -> bool {
        self.keywords.iter().all(|k| k.level.is_some()) && !self.keywords.is_empty()
    }
}

/// The full table: one keyword set per S5 category.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    sets: BTreeMap<S5Category, KeywordSet>,
}

// Builtin keyword files, embedded so the CLI works with zero setup.
const BUILTIN_SMART: &str = include_str!("../../data/keywords/smart.csv");
const BUILTIN_SENSING: &str = include_str!("../../data/keywords/sensing.csv");
const BUILTIN_SUSTAINABLE: &str = include_str!("../../data/keywords/sustainable.csv");
const BUILTIN_SOCIAL: &str = include_str!("../../data/keywords/social.csv");
const BUILTIN_SAFE: &str = include_str!("../../data/keywords/safe.csv");

impl KeywordTable {
    /// Build a table from per-category sets. Any category not supplied
    /// gets an empty set.
    pub fn new(sets: BTreeMap<S5Category, KeywordSet>) -> Self {
        Self { sets }
    }

    /// The builtin keyword table.
    pub fn builtin() -> Result<Self> {
        let mut sets = BTreeMap::new();
        for (category, csv_text) in [
            (S5Category::Smart, BUILTIN_SMART),
            (S5Category::Sensing, BUILTIN_SENSING),
            (S5Category::Sustainable, BUILTIN_SUSTAINABLE),
            (S5Category::Social, BUILTIN_SOCIAL),
            (S5Category::Safe, BUILTIN_SAFE),
        ] {
            let set = KeywordSet::from_csv_reader(csv_text.as_bytes())
                .with_context(|| format!("Builtin keyword set for {category}"))?;
            sets.insert(category, set);
        }
        Ok(Self { sets })
    }

    /// Load a table from a directory containing `smart.csv`, `sensing.csv`,
    /// `sustainable.csv`, `social.csv`, and `safe.csv`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sets = BTreeMap::new();
        for category in S5Category::ALL {
            let path = dir.join(format!("{}.csv", category.as_str().to_lowercase()));
            let file = File::open(&path)
                .with_context(|| format!("Failed to open keyword file {}", path.display()))?;
            let set = KeywordSet::from_csv_reader(file)
                .with_context(|| format!("Keyword file {}", path.display()))?;
            sets.insert(category, set);
        }
        let table = Self { sets };
        info!(
            dir = %dir.display(),
            keywords = table.total_keywords(),
            "Loaded keyword table"
        );
        Ok(table)
    }

    pub fn set(&self, category: S5Category) -> &KeywordSet {
        static EMPTY: KeywordSet = KeywordSet {
            keywords: Vec::new(),
        };
        self.sets.get(&category).unwrap_or(&EMPTY)
    }

    pub fn total_keywords(&self) -> usize {
        self.sets.values().map(KeywordSet::len).sum()
    }

    /// Check that every category's set carries levels.
    /// Call this before running the classifier in leveled mode.
    pub fn require_levels(&self) -> Result<()> {
        for category in S5Category::ALL {
            if !self.set(category).is_leveled() {
                anyhow::bail!(
                    "Keyword set for {category} has no levels — leveled classification \
                     needs a `Level` column (1-3) in every keyword file"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leveled_csv() {
        let csv = "Keyword,Level\nai,3\nCloud,1\n";
        let set = KeywordSet::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
        // Lowercased on load
        assert_eq!(set.iter().nth(1).unwrap().text, "cloud");
        assert_eq!(set.iter().next().unwrap().level, Some(3));
        assert!(set.is_leveled());
    }

    #[test]
    fn parses_boolean_only_csv() {
        let csv = "Keyword\nsolar\nrenewable\n";
        let set = KeywordSet::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|k| k.level.is_none()));
        assert!(!set.is_leveled());
    }

    #[test]
    fn missing_keyword_column_fails() {
        let csv = "Word,Level\nai,3\n";
        assert!(KeywordSet::from_csv_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn non_integer_level_fails() {
        let csv = "Keyword,Level\nai,high\n";
        let err = KeywordSet::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Non-integer level"));
    }

    #[test]
    fn out_of_range_level_fails() {
        let csv = "Keyword,Level\nai,4\n";
        assert!(KeywordSet::from_csv_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn empty_level_cell_fails() {
        let csv = "Keyword,Level\nai,\n";
        assert!(KeywordSet::from_csv_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn builtin_table_loads_and_is_leveled() {
        let table = KeywordTable::builtin().unwrap();
        assert!(table.total_keywords() > 0);
        table.require_levels().unwrap();
    }
}
