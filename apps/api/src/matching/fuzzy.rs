//! Fuzzy multi-algorithm similarity.
//!
//! All ratios are in [0, 1] and built on the normalized Indel similarity
//! (`2·LCS / (|a| + |b|)`). `fuzzy_similarity` takes the maximum, so a single
//! algorithm finding a strong match is enough.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

/// Whole-string ratio.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    indel::normalized_similarity(a.chars(), b.chars())
}

/// Best ratio of the shorter string against every equal-length window of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let short_len = short.chars().count();
    let long_chars: Vec<char> = long.chars().collect();

    if short_len == 0 {
        return if long_chars.is_empty() { 1.0 } else { 0.0 };
    }
    if short_len == long_chars.len() {
        return ratio(short, long);
    }

    let mut best = 0.0_f64;
    for window in long_chars.windows(short_len) {
        let score = indel::normalized_similarity(short.chars(), window.iter().copied());
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }
    best
}

/// Ratio after sorting whitespace-separated tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Ratio over the shared token set and each side's remainder; handles
/// reordering and repeated tokens.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();

    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let common = join(set_a.intersection(&set_b));
    let only_a = join(set_a.difference(&set_b));
    let only_b = join(set_b.difference(&set_a));

    let combined_a = join_nonempty(&common, &only_a);
    let combined_b = join_nonempty(&common, &only_b);

    let mut best = ratio(&combined_a, &combined_b);
    if !common.is_empty() {
        best = best
            .max(ratio(&common, &combined_a))
            .max(ratio(&common, &combined_b));
    }
    best
}

/// Maximum of ratio, partial ratio, token-sort and token-set ratio,
/// compared case-insensitively.
pub fn fuzzy_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    [
        ratio(&a, &b),
        partial_ratio(&a, &b),
        token_sort_ratio(&a, &b),
        token_set_ratio(&a, &b),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join<'a, 'b: 'a>(tokens: impl Iterator<Item = &'a &'b str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_identity_and_disjoint() {
        assert_eq!(ratio("python", "python"), 1.0);
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_ratio_is_indel_based() {
        // LCS("kitten", "sitting") = 4 → 2*4 / 13
        let score = ratio("kitten", "sitting");
        assert!((score - 8.0 / 13.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_partial_ratio_finds_substring() {
        assert_eq!(partial_ratio("science", "computer science"), 1.0);
        assert_eq!(partial_ratio("computer science", "science"), 1.0);
    }

    #[test]
    fn test_partial_ratio_empty_side() {
        assert_eq!(partial_ratio("", "abc"), 0.0);
        assert_eq!(partial_ratio("", ""), 1.0);
    }

    #[test]
    fn test_token_sort_ignores_order() {
        assert_eq!(token_sort_ratio("science computer", "computer science"), 1.0);
    }

    #[test]
    fn test_token_set_handles_extra_tokens() {
        assert_eq!(
            token_set_ratio("computer science", "computer science engineering"),
            1.0
        );
        assert_eq!(token_set_ratio("data data science", "science data"), 1.0);
    }

    #[test]
    fn test_token_set_without_overlap() {
        let score = token_set_ratio("biology", "finance");
        assert!(score < 0.5, "score was {score}");
    }

    #[test]
    fn test_fuzzy_similarity_is_case_insensitive_max() {
        assert_eq!(fuzzy_similarity("Computer Science", "computer science"), 1.0);
        let score = fuzzy_similarity("Software Engineering", "Engineering, Software");
        assert!(score > 0.8, "score was {score}");
    }

    #[test]
    fn test_fuzzy_similarity_is_symmetric() {
        let pairs = [
            ("mechanical engineering", "mechanics"),
            ("cs", "computer science"),
            ("statistics", "applied statistics"),
        ];
        for (a, b) in pairs {
            assert_eq!(fuzzy_similarity(a, b), fuzzy_similarity(b, a), "{a} / {b}");
        }
    }
}
