// Unit tests for trait-weighted ranking over the builtin reference
// catalog: ordering, stability among ties, truncation, and purity.

use s5match::catalog::{BigFiveTrait, Catalog};
use s5match::ranking::{rank, TraitVector, DEFAULT_TOP_N};

#[test]
fn default_top_n_is_seven() {
    assert_eq!(DEFAULT_TOP_N, 7);
}

#[test]
fn extraversion_entries_rank_strictly_before_others() {
    let catalog = Catalog::builtin().unwrap();
    let vector = TraitVector {
        extraversion: 1.0,
        ..Default::default()
    };
    let ranked = rank(&catalog, &vector, catalog.len());

    // Every Extraversion entry must come before every non-Extraversion entry
    let first_without = ranked
        .iter()
        .position(|r| !r.entry.has_trait(BigFiveTrait::Extraversion));
    if let Some(boundary) = first_without {
        assert!(
            ranked[boundary..]
                .iter()
                .all(|r| !r.entry.has_trait(BigFiveTrait::Extraversion)),
            "an Extraversion entry ranked below a non-Extraversion one"
        );
    }

    // In the reference catalog only entries 4 and 13 lack Extraversion,
    // and stability keeps them in catalog order at the tail.
    let tail: Vec<u32> = ranked.iter().rev().take(2).map(|r| r.entry.id).collect();
    assert_eq!(tail, vec![13, 4]);
}

#[test]
fn equal_scores_preserve_catalog_order() {
    let catalog = Catalog::builtin().unwrap();
    let vector = TraitVector {
        extraversion: 1.0,
        ..Default::default()
    };
    let ranked = rank(&catalog, &vector, catalog.len());

    // Among the tied Extraversion entries, ids must appear in ascending
    // catalog order (builtin ids are ordered 1..=23)
    let extraverted: Vec<u32> = ranked
        .iter()
        .filter(|r| r.entry.has_trait(BigFiveTrait::Extraversion))
        .map(|r| r.entry.id)
        .collect();
    let mut sorted = extraverted.clone();
    sorted.sort_unstable();
    assert_eq!(extraverted, sorted);
}

#[test]
fn zero_vector_returns_catalog_order_truncated() {
    let catalog = Catalog::builtin().unwrap();
    let ranked = rank(&catalog, &TraitVector::default(), DEFAULT_TOP_N);
    let ids: Vec<u32> = ranked.iter().map(|r| r.entry.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(ranked.iter().all(|r| r.score == 0.0));
}

#[test]
fn top_n_never_exceeds_catalog_size() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(rank(&catalog, &TraitVector::default(), 100).len(), 23);
    assert_eq!(rank(&catalog, &TraitVector::default(), 7).len(), 7);
    assert_eq!(rank(&catalog, &TraitVector::default(), 0).len(), 0);
}

#[test]
fn repeated_ranking_is_identical() {
    let catalog = Catalog::builtin().unwrap();
    let vector = TraitVector {
        openness: 0.4,
        agreeableness: 0.9,
        neuroticism: 0.2,
        ..Default::default()
    };
    let first: Vec<u32> = rank(&catalog, &vector, 7).iter().map(|r| r.entry.id).collect();
    let second: Vec<u32> = rank(&catalog, &vector, 7).iter().map(|r| r.entry.id).collect();
    assert_eq!(first, second);
}

#[test]
fn zero_score_entries_fill_out_top_n() {
    let catalog = Catalog::builtin().unwrap();
    // Only entry 13 carries Conscientiousness; weight it alone and the
    // other six slots fill with zero-score entries in catalog order.
    let vector = TraitVector {
        conscientiousness: 1.0,
        ..Default::default()
    };
    let ranked = rank(&catalog, &vector, 7);
    assert_eq!(ranked[0].entry.id, 13);
    assert!(ranked[1..].iter().all(|r| r.score == 0.0));
    let rest: Vec<u32> = ranked[1..].iter().map(|r| r.entry.id).collect();
    assert_eq!(rest, vec![1, 2, 3, 4, 5, 6]);
}
