//! Fuzzy matching of a free-text topic against the category list.
//!
//! Similarity is the Ratcliff/Obershelp ratio `2 * M / T`, where `M` is the
//! number of characters in the recursively found longest common blocks and
//! `T` the combined length of both strings.

use crate::models::Category;

/// Minimum similarity for a category name to count as a close match.
pub const SIMILARITY_CUTOFF: f64 = 0.6;

/// Find the category best matching `topic`.
///
/// The closest name at or above [`SIMILARITY_CUTOFF`] wins; failing that,
/// the first category whose name contains the topic (case-insensitively).
pub fn match_category<'a>(topic: &str, categories: &'a [Category]) -> Option<&'a Category> {
    if categories.is_empty() || topic.trim().is_empty() {
        return None;
    }

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    if let Some(name) = closest_match(topic, &names, SIMILARITY_CUTOFF) {
        return categories.iter().find(|c| c.name == name);
    }

    let needle = topic.to_lowercase();
    categories
        .iter()
        .find(|c| c.name.to_lowercase().contains(&needle))
}

/// The candidate with the highest similarity to `word`, if it reaches
/// `cutoff`. Equal scores go to the lexicographically greatest candidate.
pub fn closest_match<'a>(word: &str, candidates: &[&'a str], cutoff: f64) -> Option<&'a str> {
    let word: Vec<char> = word.chars().collect();
    let mut best: Option<(f64, &'a str)> = None;

    for &candidate in candidates {
        let chars: Vec<char> = candidate.chars().collect();
        let score = ratio(&chars, &word);
        if score < cutoff {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_score, best_name)) => {
                score > best_score || (score == best_score && candidate > best_name)
            }
        };
        if better {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, name)| name)
}

/// Similarity of two strings in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}

fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(a, b) as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_characters(&a[..start_a], &b[..start_b])
        + matching_characters(&a[start_a + size..], &b[start_b + size..])
}

/// Longest common contiguous block as `(start_a, start_b, len)`. Ties go to
/// the block starting earliest in `a`, then earliest in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // lengths[j + 1] = length of the common run ending at a[i], b[j]
    let mut lengths = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut next = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = lengths[j] + 1;
                next[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        lengths = next;
    }

    best
}
