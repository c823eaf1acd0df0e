// S5 keyword classification.
//
// Determines, for each of the five categories, whether any of its
// keywords appears in the combined product text. Matching is raw
// substring containment on lowercased text — no tokenization, so
// "smart" matches inside "smartphone". That behavior is intentional
// and matched by the shipped keyword sets (some of which carry partial
// stems like "recycl").
//
// Two modes share one code path: Simple gives a boolean per category,
// Leveled additionally buckets the matched keywords by their level and
// computes a 0-100 compliance score.

use serde::Serialize;

use crate::catalog::S5Category;
use crate::keywords::KeywordTable;

/// How category results are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassifierMode {
    /// Boolean per category: did any keyword match?
    Simple,
    /// Matched keywords bucketed by level 1-3, plus a compliance score.
    Leveled,
}

/// Matched keywords partitioned by level. Each keyword lands in exactly
/// one bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LevelMatches {
    pub level1: Vec<String>,
    pub level2: Vec<String>,
    pub level3: Vec<String>,
}

impl LevelMatches {
    pub fn count(&self) -> usize {
        self.level1.len() + self.level2.len() + self.level3.len()
    }

    fn weighted_sum(&self) -> usize {
        self.level1.len() + 2 * self.level2.len() + 3 * self.level3.len()
    }

    /// Compliance score: the average level of the matched keywords,
    /// normalized to 0-100. Defined as 0 when nothing matched.
    pub fn compliance(&self) -> f64 {
        let count = self.count();
        if count == 0 {
            return 0.0;
        }
        self.weighted_sum() as f64 / (3.0 * count as f64) * 100.0
    }
}

/// The result for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub category: S5Category,
    /// True when at least one keyword matched, in either mode.
    pub matched: bool,
    /// Leveled mode only: which keywords matched, by level.
    pub levels: Option<LevelMatches>,
    /// Leveled mode only: 0-100 compliance score.
    pub compliance: Option<f64>,
}

/// Per-category classification of one product, in canonical S5 order.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub mode: ClassifierMode,
    pub categories: Vec<CategoryResult>,
}

impl ClassificationResult {
    pub fn category(&self, category: S5Category) -> &CategoryResult {
        // classify() always emits all five categories, in ALL order
        self.categories
            .iter()
            .find(|r| r.category == category)
            .expect("classification covers every category")
    }

    /// Improvement suggestions for every category with no match.
    pub fn feedback(&self) -> Vec<(S5Category, &'static str)> {
        self.categories
            .iter()
            .filter(|r| !r.matched)
            .map(|r| (r.category, improvement_suggestion(r.category)))
            .collect()
    }
}

/// Fixed improvement suggestion per category.
pub fn improvement_suggestion(category: S5Category) -> &'static str {
    match category {
        S5Category::Smart => {
            "Consider adding AI, IoT, or cloud integration to make the product smarter."
        }
        S5Category::Sensing => {
            "You could add sensors or data collection to improve monitoring capabilities."
        }
        S5Category::Sustainable => {
            "Incorporate renewable energy sources or make your product more eco-friendly."
        }
        S5Category::Social => {
            "Think about adding community engagement or social inclusion elements."
        }
        S5Category::Safe => "Ensure the product is secure and follows safety protocols.",
    }
}

/// Classifies combined product text against a keyword table.
pub struct KeywordClassifier {
    mode: ClassifierMode,
}

impl KeywordClassifier {
    pub fn new(mode: ClassifierMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ClassifierMode {
        self.mode
    }

    /// Lowercased concatenation of name, description, and feature phrases,
    /// joined by single spaces — the text every category is matched against.
    pub fn combined_text(name: &str, description: &str, features: &[String]) -> String {
        let mut parts = vec![name.to_string(), description.to_string()];
        parts.extend(features.iter().cloned());
        parts.join(" ").to_lowercase()
    }

    /// Classify pre-combined (lowercased) text against every category.
    pub fn classify(&self, combined_text: &str, table: &KeywordTable) -> ClassificationResult {
        let categories = S5Category::ALL
            .iter()
            .map(|&category| self.classify_category(combined_text, category, table))
            .collect();

        ClassificationResult {
            mode: self.mode,
            categories,
        }
    }

    fn classify_category(
        &self,
        combined_text: &str,
        category: S5Category,
        table: &KeywordTable,
    ) -> CategoryResult {
        let set = table.set(category);

        match self.mode {
            ClassifierMode::Simple => {
                let matched = set.iter().any(|k| combined_text.contains(&k.text));
                CategoryResult {
                    category,
                    matched,
                    levels: None,
                    compliance: None,
                }
            }
            ClassifierMode::Leveled => {
                let mut levels = LevelMatches::default();
                for keyword in set.iter() {
                    if !combined_text.contains(&keyword.text) {
                        continue;
                    }
                    // Levels are validated to 1..=3 at load and leveled mode
                    // is gated on require_levels(); a keyword that still has
                    // no level gets skipped, never promoted to a level
                    match keyword.level {
                        Some(1) => levels.level1.push(keyword.text.clone()),
                        Some(2) => levels.level2.push(keyword.text.clone()),
                        Some(3) => levels.level3.push(keyword.text.clone()),
                        _ => {}
                    }
                }
                let compliance = levels.compliance();
                CategoryResult {
                    category,
                    matched: levels.count() > 0,
                    levels: Some(levels),
                    compliance: Some(compliance),
                }
            }
        }
    }
}
