// Ratcliff/Obershelp sequence similarity.
//
// The score is `2*M / T` where M is the total length of the matching
// blocks found by recursively locating the longest common contiguous
// block, and T is the combined length of both strings. 1.0 means
// identical, 0.0 means no characters in common. Comparison is
// case-insensitive.
//
// This is the classic ratio metric, not an edit-distance approximation.
// The recursive block structure produces different scores than
// Levenshtein would, so the two are not interchangeable.

use std::collections::HashMap;

/// Case-insensitive similarity ratio in [0.0, 1.0].
///
/// Two empty strings are defined to be identical (ratio 1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Index of each character's positions in b, used by the longest-match
    // search to only probe positions that can possibly match.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b2j.entry(ch).or_default().push(j);
    }

    let matches = matching_chars(&a, &b2j, 0, a.len(), 0, b.len());
    2.0 * matches as f64 / total as f64
}

/// Total matched characters between a[alo..ahi] and b[blo..bhi]:
/// the longest common block, plus (recursively) whatever matches in the
/// regions before and after it.
fn matching_chars(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> usize {
    let (i, j, size) = find_longest_match(a, b2j, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + matching_chars(a, b2j, alo, i, blo, j)
        + matching_chars(a, b2j, i + size, ahi, j + size, bhi)
}

/// Find the longest block a[i..i+size] == b[j..j+size] with
/// alo <= i < i+size <= ahi and blo <= j < j+size <= bhi.
///
/// Ties go to the earliest i, then the earliest j, which is what makes
/// the recursive decomposition deterministic.
fn find_longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0usize;

    // j2len[j] = length of the longest block ending at a[i], b[j].
    // Rebuilt per row from the previous row's diagonal predecessors.
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j > blo {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_j2len.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = new_j2len;
    }

    (best_i, best_j, best_size)
}
