//! Fuzzy matching for the currency picker.
//!
//! A scored subsequence match: every query character has to appear in order,
//! and runs, word starts and prefixes score higher.

#[derive(Debug, Clone)]
struct FuzzyMatch {
    index: usize,
    score: i32,
}

/// Indices of `items` matching `query`, best first.
///
/// An empty query matches everything in the original order.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<usize> {
    let query_chars: Vec<char> = query.trim().to_lowercase().chars().collect();
    if query_chars.is_empty() {
        return (0..items.len()).collect();
    }

    let mut matches: Vec<FuzzyMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            fuzzy_score(&query_chars, &item.to_lowercase()).map(|score| FuzzyMatch { index, score })
        })
        .collect();

    // Ties keep catalog order
    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));

    matches.into_iter().map(|m| m.index).collect()
}

/// Score `target` against an already-lowercased query; `None` if it does not match.
fn fuzzy_score(query: &[char], target: &str) -> Option<i32> {
    let target_chars: Vec<char> = target.chars().collect();

    let mut score: i32 = 0;
    let mut query_idx = 0;
    let mut prev_match: Option<usize> = None;
    let mut first_match: Option<usize> = None;

    for (idx, &ch) in target_chars.iter().enumerate() {
        if query_idx == query.len() {
            break;
        }
        if ch != query[query_idx] {
            continue;
        }

        score += 10;
        first_match.get_or_insert(idx);

        if prev_match.is_some_and(|prev| idx == prev + 1) {
            score += 15;
        }
        if idx == 0 || !target_chars[idx - 1].is_alphanumeric() {
            score += 10;
        }

        prev_match = Some(idx);
        query_idx += 1;
    }

    if query_idx < query.len() {
        return None;
    }

    if first_match == Some(0) {
        score += 20;
    }

    // Prefer shorter labels
    score -= (target_chars.len() as i32) / 5;

    Some(score)
}
