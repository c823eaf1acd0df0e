// Best-match selection over the catalog.
//
// Every entry is scored as the average of two similarities: query name
// against entry name, query description against entry description. The
// scan keeps the first entry with a strictly greater score than anything
// seen before it, so ties resolve to the earliest catalog entry.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::matching::similarity::similarity;

/// The winning entry of a best-match scan, with its component scores.
#[derive(Debug, Clone, Serialize)]
pub struct BestMatch<'a> {
    pub entry: &'a CatalogEntry,
    /// Average of the name and description similarities, in [0,1].
    pub score: f64,
    pub name_similarity: f64,
    pub description_similarity: f64,
}

/// Find the catalog entry most similar to the queried product.
///
/// Returns `None` for an empty catalog, or when no entry scores above
/// zero (which includes both query strings being empty against a catalog
/// of non-empty entries). There is no other threshold — a low-but-nonzero
/// maximum still wins, and the caller decides whether the score is good
/// enough to surface.
pub fn best_match<'a>(
    query_name: &str,
    query_description: &str,
    catalog: &'a Catalog,
) -> Option<BestMatch<'a>> {
    let mut best: Option<BestMatch<'a>> = None;
    let mut highest_score = 0.0;

    for entry in catalog.entries() {
        let name_similarity = similarity(query_name, &entry.name);
        let description_similarity = similarity(query_description, &entry.description);
        let score = (name_similarity + description_similarity) / 2.0;

        // Strict comparison: the first entry to reach the maximum wins.
        if score > highest_score {
            highest_score = score;
            best = Some(BestMatch {
                entry,
                score,
                name_similarity,
                description_similarity,
            });
        }
    }

    best
}
