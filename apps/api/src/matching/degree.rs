//! Degree Matcher: rank resolution plus the gap-based score.
//!
//! Resolution order per degree: local rank table → external hierarchy →
//! semantic estimate (rank of the nearest known degree × similarity to it).

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::hierarchy::DegreeHierarchy;
use crate::matching::normalize::{FieldKind, Normalizer};
use crate::matching::reducer::{rank, MatchResult, RankedValue};
use crate::matching::similarity::SemanticSimilarity;
use crate::matching::round2;
use crate::reference::ReferenceData;

pub const MIN_SCORE: f64 = 40.0;
pub const MAX_SCORE: f64 = 140.0;
pub const EXACT_SCORE: f64 = 100.0;
const POINTS_PER_RANK: f64 = 10.0;

/// Where a resolved rank came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RankSource {
    Table,
    Hierarchy,
    Estimated { nearest: String, similarity: f64 },
    /// Nothing to compare against; rank is 0.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankResolution {
    pub degree: String,
    pub normalized: String,
    pub rank: f64,
    pub source: RankSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeMatch {
    pub score: f64,
    pub candidate: RankResolution,
    pub job: RankResolution,
}

/// Gap-based score. A zero job rank scores 0.
pub fn score_from_ranks(candidate_rank: f64, job_rank: f64) -> f64 {
    if job_rank == 0.0 {
        return 0.0;
    }

    // A gap too small to survive rounding still keeps its side of 100.
    let gap = (candidate_rank - job_rank).abs();
    if candidate_rank < job_rank {
        round2((EXACT_SCORE - gap * POINTS_PER_RANK).max(MIN_SCORE)).min(EXACT_SCORE - 0.01)
    } else if candidate_rank > job_rank {
        round2((EXACT_SCORE + gap * POINTS_PER_RANK).min(MAX_SCORE)).max(EXACT_SCORE + 0.01)
    } else {
        EXACT_SCORE
    }
}

#[derive(Clone)]
pub struct DegreeMatcher {
    normalizer: Normalizer,
    reference: Arc<ReferenceData>,
    hierarchy: Arc<dyn DegreeHierarchy>,
    semantic: Arc<dyn SemanticSimilarity>,
}

impl DegreeMatcher {
    pub fn new(
        reference: Arc<ReferenceData>,
        hierarchy: Arc<dyn DegreeHierarchy>,
        semantic: Arc<dyn SemanticSimilarity>,
    ) -> Self {
        Self {
            normalizer: Normalizer::new(reference.clone()),
            reference,
            hierarchy,
            semantic,
        }
    }

    pub async fn resolve_rank(&self, degree: &str) -> RankResolution {
        let normalized = self.normalizer.normalize(degree, FieldKind::Degree);

        if let Some(rank) = self.reference.degree_rank(&normalized) {
            return RankResolution {
                degree: degree.to_string(),
                normalized,
                rank,
                source: RankSource::Table,
            };
        }

        if let Some(rank) = self.hierarchy.parent_rank(degree).await {
            let rank = rank.clamp(0.0, self.reference.max_degree_rank());
            debug!(degree, rank, "degree rank from hierarchy");
            return RankResolution {
                degree: degree.to_string(),
                normalized,
                rank,
                source: RankSource::Hierarchy,
            };
        }

        let (rank, source) = self.estimate_rank(&normalized);
        debug!(degree, rank, ?source, "degree rank estimated");
        RankResolution {
            degree: degree.to_string(),
            normalized,
            rank,
            source,
        }
    }

    /// Nearest known degree by semantic similarity; earlier table entries win ties.
    fn estimate_rank(&self, normalized: &str) -> (f64, RankSource) {
        let mut nearest: Option<(&str, f64, f64)> = None;
        for (known, known_rank) in self.reference.known_degrees() {
            let similarity = self.semantic.similarity(normalized, known);
            if nearest.map_or(true, |(_, _, best)| similarity > best) {
                nearest = Some((known.as_str(), *known_rank, similarity));
            }
        }

        match nearest {
            Some((known, known_rank, similarity)) => (
                known_rank * similarity,
                RankSource::Estimated {
                    nearest: known.to_string(),
                    similarity,
                },
            ),
            None => (0.0, RankSource::Unresolved),
        }
    }

    pub async fn evaluate(&self, candidate: &str, job: &str) -> DegreeMatch {
        let job_rank = self.resolve_rank(job).await;
        self.evaluate_against(candidate, job_rank).await
    }

    async fn evaluate_against(&self, candidate: &str, job: RankResolution) -> DegreeMatch {
        let candidate_normalized = self.normalizer.normalize(candidate, FieldKind::Degree);
        // same degree resolves once so the self-score stays exact
        let candidate = if candidate_normalized == job.normalized {
            RankResolution {
                degree: candidate.to_string(),
                ..job.clone()
            }
        } else {
            self.resolve_rank(candidate).await
        };

        DegreeMatch {
            score: score_from_ranks(candidate.rank, job.rank),
            candidate,
            job,
        }
    }

    pub async fn score(&self, candidate: &str, job: &str) -> f64 {
        self.evaluate(candidate, job).await.score
    }

    /// Scores every candidate degree against one requirement.
    pub async fn compare_list(&self, job: &str, candidates: &[String]) -> MatchResult {
        if candidates.is_empty() {
            return MatchResult::empty();
        }

        let job_rank = self.resolve_rank(job).await;
        let mut scored = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let matched = self.evaluate_against(candidate, job_rank.clone()).await;
            scored.push(RankedValue {
                value: candidate.clone(),
                similarity: matched.score,
                normalized: matched.candidate.normalized,
            });
        }
        rank(scored)
    }
}
