//! List Reducer: scores one requirement against N candidate values and ranks them.

use serde::{Deserialize, Serialize};

/// One scored candidate value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedValue {
    pub value: String,
    pub similarity: f64,
    pub normalized: String,
}

/// Best match plus the full ranking, highest similarity first.
///
/// `similarity`/`best_match` always mirror the head of `all_matches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub similarity: f64,
    pub best_match: Option<String>,
    pub all_matches: Vec<RankedValue>,
}

impl MatchResult {
    /// Sentinel for an empty candidate list.
    pub fn empty() -> Self {
        Self {
            similarity: 0.0,
            best_match: None,
            all_matches: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all_matches.is_empty()
    }
}

/// Ranks already-scored values. Stable: equal scores keep input order.
pub fn rank(mut scored: Vec<RankedValue>) -> MatchResult {
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    match scored.first() {
        Some(head) => MatchResult {
            similarity: head.similarity,
            best_match: Some(head.value.clone()),
            all_matches: scored,
        },
        None => MatchResult::empty(),
    }
}

/// Scores every value with `score` and ranks the results.
pub fn rank_candidates<F, N>(values: &[String], mut score: F, mut normalize: N) -> MatchResult
where
    F: FnMut(&str) -> f64,
    N: FnMut(&str) -> String,
{
    let scored = values
        .iter()
        .map(|value| RankedValue {
            value: value.clone(),
            similarity: score(value),
            normalized: normalize(value),
        })
        .collect();
    rank(scored)
}
