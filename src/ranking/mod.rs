// Trait-weighted ranking of catalog entries.
//
// An entry's match score is the sum of the user's weights for the traits
// the entry carries. The sort is stable and descending, so entries with
// equal scores keep their original catalog order — an all-zero vector
// returns the catalog order unchanged, truncated to top-N.

use serde::{Deserialize, Serialize};

use crate::catalog::{BigFiveTrait, Catalog, CatalogEntry};

/// How many recommendations to return by default.
/// Overridable via S5MATCH_TOP_N or the --top-n flag.
pub const DEFAULT_TOP_N: usize = 7;

/// Weighted Big Five trait vector, one weight per label.
///
/// Weights are typically 0.0-1.0 (slider positions) but are not clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitVector {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl TraitVector {
    /// A vector with weight 1.0 for each listed trait and 0.0 elsewhere —
    /// how suggested traits seed the sliders.
    pub fn from_traits(traits: &[BigFiveTrait]) -> Self {
        let mut vector = Self::default();
        for &t in traits {
            *vector.weight_mut(t) = 1.0;
        }
        vector
    }

    pub fn weight(&self, t: BigFiveTrait) -> f64 {
        match t {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }

    fn weight_mut(&mut self, t: BigFiveTrait) -> &mut f64 {
        match t {
            BigFiveTrait::Openness => &mut self.openness,
            BigFiveTrait::Conscientiousness => &mut self.conscientiousness,
            BigFiveTrait::Extraversion => &mut self.extraversion,
            BigFiveTrait::Agreeableness => &mut self.agreeableness,
            BigFiveTrait::Neuroticism => &mut self.neuroticism,
        }
    }
}

/// A catalog entry with its trait-affinity score.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<'a> {
    pub entry: &'a CatalogEntry,
    pub score: f64,
}

/// Sum of the vector's weights over the traits the entry carries.
pub fn match_score(entry: &CatalogEntry, vector: &TraitVector) -> f64 {
    BigFiveTrait::ALL
        .iter()
        .filter(|&&t| entry.has_trait(t))
        .map(|&t| vector.weight(t))
        .sum()
}

/// Rank catalog entries by trait affinity, descending, keeping the top
/// `top_n`. Zero-score entries are included if they make the cut.
pub fn rank<'a>(catalog: &'a Catalog, vector: &TraitVector, top_n: usize) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = catalog
        .entries()
        .iter()
        .map(|entry| Ranked {
            entry,
            score: match_score(entry, vector),
        })
        .collect();

    // Stable sort: equal scores keep catalog order
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::S5Features;

    fn entry(id: u32, traits: &[BigFiveTrait]) -> CatalogEntry {
        CatalogEntry {
            id,
            name: format!("entry {id}"),
            description: format!("description {id}"),
            s5_features: S5Features {
                smart: String::new(),
                sensing: String::new(),
                sustainable: String::new(),
                social: String::new(),
                safe: String::new(),
                traits_narrative: String::new(),
            },
            personality_traits: traits.to_vec(),
        }
    }

    fn ids(ranked: &[Ranked]) -> Vec<u32> {
        ranked.iter().map(|r| r.entry.id).collect()
    }

    #[test]
    fn score_sums_matching_trait_weights() {
        let e = entry(1, &[BigFiveTrait::Extraversion, BigFiveTrait::Neuroticism]);
        let vector = TraitVector {
            extraversion: 0.8,
            neuroticism: 0.3,
            openness: 1.0, // not carried by the entry
            ..Default::default()
        };
        assert!((match_score(&e, &vector) - 1.1).abs() < 1e-9);
    }

    #[test]
    fn higher_scores_rank_first() {
        let catalog = Catalog::new(vec![
            entry(1, &[BigFiveTrait::Openness]),
            entry(2, &[BigFiveTrait::Extraversion]),
            entry(3, &[BigFiveTrait::Extraversion, BigFiveTrait::Openness]),
        ])
        .unwrap();
        let vector = TraitVector {
            extraversion: 1.0,
            openness: 0.5,
            ..Default::default()
        };
        assert_eq!(ids(&rank(&catalog, &vector, 10)), vec![3, 2, 1]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            entry(1, &[BigFiveTrait::Openness]),
            entry(2, &[BigFiveTrait::Extraversion]),
            entry(3, &[BigFiveTrait::Extraversion]),
            entry(4, &[BigFiveTrait::Extraversion]),
        ])
        .unwrap();
        let vector = TraitVector {
            extraversion: 1.0,
            ..Default::default()
        };
        assert_eq!(ids(&rank(&catalog, &vector, 10)), vec![2, 3, 4, 1]);
    }

    #[test]
    fn zero_vector_preserves_catalog_order() {
        let catalog = Catalog::new(vec![
            entry(5, &[BigFiveTrait::Openness]),
            entry(3, &[BigFiveTrait::Neuroticism]),
            entry(9, &[BigFiveTrait::Agreeableness]),
        ])
        .unwrap();
        let ranked = rank(&catalog, &TraitVector::default(), 2);
        assert_eq!(ids(&ranked), vec![5, 3]);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn top_n_truncates() {
        let catalog = Catalog::new(
            (1..=10)
                .map(|id| entry(id, &[BigFiveTrait::Openness]))
                .collect(),
        )
        .unwrap();
        assert_eq!(rank(&catalog, &TraitVector::default(), 7).len(), 7);
        assert_eq!(rank(&catalog, &TraitVector::default(), 20).len(), 10);
    }

    #[test]
    fn from_traits_sets_unit_weights() {
        let vector =
            TraitVector::from_traits(&[BigFiveTrait::Openness, BigFiveTrait::Neuroticism]);
        assert_eq!(vector.openness, 1.0);
        assert_eq!(vector.neuroticism, 1.0);
        assert_eq!(vector.extraversion, 0.0);
    }

    #[test]
    fn ranking_is_idempotent() {
        let catalog = Catalog::new(vec![
            entry(1, &[BigFiveTrait::Openness]),
            entry(2, &[BigFiveTrait::Extraversion]),
        ])
        .unwrap();
        let vector = TraitVector {
            extraversion: 0.7,
            ..Default::default()
        };
        let first = ids(&rank(&catalog, &vector, 7));
        let second = ids(&rank(&catalog, &vector, 7));
        assert_eq!(first, second);
    }
}
