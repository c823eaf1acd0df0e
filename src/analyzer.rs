// Analyzer facade — orchestrates the engine for one request.
//
// This is the boundary the request layer (the CLI here) talks to. Input
// validation happens in these methods; the pure functions underneath are
// never invoked with missing required fields. The catalog and keyword
// table are injected at construction and immutable afterwards, so an
// Analyzer can serve any number of requests with no coordination.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::catalog::{BigFiveTrait, Catalog, CatalogEntry, S5Category};
use crate::classify::{ClassificationResult, ClassifierMode, KeywordClassifier};
use crate::keywords::KeywordTable;
use crate::matching::matcher;
use crate::ranking::{self, Ranked, TraitVector};

/// The exemplar a query matched, with its similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedExemplar {
    pub id: u32,
    pub name: String,
    /// Average name/description similarity in [0,1]. There is no cutoff
    /// here — callers decide whether a low score is worth surfacing.
    pub score: f64,
}

/// Traits suggested for a product, from its best-matching exemplar.
/// `traits` is empty when nothing matched (empty catalog or zero-score scan).
#[derive(Debug, Clone, Serialize)]
pub struct TraitSuggestion {
    pub matched: Option<MatchedExemplar>,
    pub traits: Vec<BigFiveTrait>,
}

/// One improvement suggestion for an S5 category the product missed.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackItem {
    pub category: S5Category,
    pub suggestion: &'static str,
}

/// The full analyze flow: classification, feedback for missing
/// categories, suggested traits, and the trait vector they seed.
#[derive(Debug, Clone, Serialize)]
pub struct ProductAnalysis {
    pub product_name: String,
    pub classification: ClassificationResult,
    pub feedback: Vec<FeedbackItem>,
    pub suggestion: TraitSuggestion,
    /// Weight 1.0 per suggested trait — the sliders' starting position.
    pub seeded_vector: TraitVector,
}

pub struct Analyzer {
    catalog: Catalog,
    keywords: KeywordTable,
    classifier: KeywordClassifier,
    top_n: usize,
}

impl Analyzer {
    /// Build an analyzer over an immutable catalog and keyword table.
    ///
    /// Leveled mode requires every keyword set to carry levels; that is
    /// checked here so it cannot fail per-request.
    pub fn new(
        catalog: Catalog,
        keywords: KeywordTable,
        mode: ClassifierMode,
        top_n: usize,
    ) -> Result<Self> {
        if mode == ClassifierMode::Leveled {
            keywords.require_levels()?;
        }
        info!(
            entries = catalog.len(),
            keywords = keywords.total_keywords(),
            ?mode,
            top_n,
            "Analyzer ready"
        );
        Ok(Self {
            catalog,
            keywords,
            classifier: KeywordClassifier::new(mode),
            top_n,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Full catalog dump, in its defined order.
    pub fn list_catalog(&self) -> &[CatalogEntry] {
        self.catalog.entries()
    }

    /// Suggest personality traits from the best-matching exemplar.
    pub fn suggest_traits(&self, name: &str, description: &str) -> Result<TraitSuggestion> {
        require_field(name, "product name")?;
        require_field(description, "description")?;

        let suggestion = match matcher::best_match(name, description, &self.catalog) {
            Some(m) => TraitSuggestion {
                matched: Some(MatchedExemplar {
                    id: m.entry.id,
                    name: m.entry.name.clone(),
                    score: m.score,
                }),
                traits: m.entry.personality_traits.clone(),
            },
            None => TraitSuggestion {
                matched: None,
                traits: Vec::new(),
            },
        };
        Ok(suggestion)
    }

    /// Classify a product against the five S5 categories.
    pub fn classify_product(
        &self,
        name: &str,
        description: &str,
        features: &[String],
    ) -> Result<ClassificationResult> {
        require_field(name, "product name")?;
        require_field(description, "description")?;
        if features.iter().all(|f| f.trim().is_empty()) {
            anyhow::bail!("At least one product feature is required");
        }

        let combined = KeywordClassifier::combined_text(name, description, features);
        Ok(self.classifier.classify(&combined, &self.keywords))
    }

    /// Rank catalog entries by trait affinity. `top_n` of `None` uses the
    /// configured default.
    pub fn rank_by_traits(&self, vector: &TraitVector, top_n: Option<usize>) -> Vec<Ranked<'_>> {
        ranking::rank(&self.catalog, vector, top_n.unwrap_or(self.top_n))
    }

    /// The single-button flow: classify, collect feedback for missing
    /// categories, suggest traits from the best match, and seed a trait
    /// vector from the suggestion.
    pub fn analyze_product(
        &self,
        name: &str,
        description: &str,
        features: &[String],
    ) -> Result<ProductAnalysis> {
        let classification = self.classify_product(name, description, features)?;
        let feedback = classification
            .feedback()
            .into_iter()
            .map(|(category, suggestion)| FeedbackItem {
                category,
                suggestion,
            })
            .collect();
        let suggestion = self.suggest_traits(name, description)?;
        let seeded_vector = TraitVector::from_traits(&suggestion.traits);

        Ok(ProductAnalysis {
            product_name: name.to_string(),
            classification,
            feedback,
            suggestion,
            seeded_vector,
        })
    }
}

fn require_field(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("Missing required field: {field}");
    }
    Ok(())
}
