//! Major Matcher: cheap lexical/fuzzy signals first, semantic fallback last.

use std::sync::Arc;

use serde::Serialize;

use crate::matching::fuzzy::fuzzy_similarity;
use crate::matching::normalize::{FieldKind, Normalizer};
use crate::matching::reducer::{rank_candidates, MatchResult};
use crate::matching::similarity::{lexical_ratio, SemanticSimilarity};
use crate::reference::ReferenceData;

const FUZZY_SHORT_CIRCUIT: f64 = 0.9;
const SPELLING_VARIANT: f64 = 0.85;
const SPELLING_VARIANT_FLOOR: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorRelationship {
    Equivalent,
    CloseVariation,
    CloselyRelated,
    SomewhatRelated,
    Different,
}

impl MajorRelationship {
    pub fn classify(score: f64, normalized_equal: bool) -> Self {
        if normalized_equal {
            MajorRelationship::Equivalent
        } else if score > 0.9 {
            MajorRelationship::CloseVariation
        } else if score > 0.8 {
            MajorRelationship::CloselyRelated
        } else if score > 0.6 {
            MajorRelationship::SomewhatRelated
        } else {
            MajorRelationship::Different
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            MajorRelationship::Equivalent => "equivalent fields",
            MajorRelationship::CloseVariation => "close variations of the same field",
            MajorRelationship::CloselyRelated => "closely related fields",
            MajorRelationship::SomewhatRelated => "somewhat related fields",
            MajorRelationship::Different => "different fields",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorMatch {
    pub job_major: String,
    pub candidate_major: String,
    pub normalized_job_major: String,
    pub normalized_candidate_major: String,
    pub score: f64,
    pub relationship: MajorRelationship,
}

#[derive(Clone)]
pub struct MajorMatcher {
    normalizer: Normalizer,
    semantic: Arc<dyn SemanticSimilarity>,
}

impl MajorMatcher {
    pub fn new(reference: Arc<ReferenceData>, semantic: Arc<dyn SemanticSimilarity>) -> Self {
        Self {
            normalizer: Normalizer::new(reference),
            semantic,
        }
    }

    pub fn normalize(&self, major: &str) -> String {
        self.normalizer.normalize(major, FieldKind::Major)
    }

    /// Similarity in [0, 1]. Symmetric in its arguments.
    pub fn score(&self, job: &str, candidate: &str) -> f64 {
        let (job_norm, candidate_norm) = (self.normalize(job), self.normalize(candidate));
        self.score_normalized(job, candidate, &job_norm, &candidate_norm)
    }

    fn score_normalized(&self, job: &str, candidate: &str, job_norm: &str, candidate_norm: &str) -> f64 {
        let lexical = lexical_ratio(job.trim(), candidate.trim());
        let fuzzy_raw = fuzzy_similarity(job, candidate);
        let fuzzy_norm = fuzzy_similarity(job_norm, candidate_norm);

        let fuzzy = fuzzy_raw.max(fuzzy_norm);
        if fuzzy > FUZZY_SHORT_CIRCUIT {
            return fuzzy;
        }
        if job_norm == candidate_norm {
            return 1.0;
        }
        if lexical > SPELLING_VARIANT {
            return lexical.max(SPELLING_VARIANT_FLOOR);
        }

        let semantic = self.semantic.similarity(job_norm, candidate_norm);
        [lexical, fuzzy_raw, fuzzy_norm, semantic]
            .into_iter()
            .fold(0.0, f64::max)
            .clamp(0.0, 1.0)
    }

    pub fn evaluate(&self, job: &str, candidate: &str) -> MajorMatch {
        let job_norm = self.normalize(job);
        let candidate_norm = self.normalize(candidate);
        let score = self.score_normalized(job, candidate, &job_norm, &candidate_norm);

        MajorMatch {
            job_major: job.to_string(),
            candidate_major: candidate.to_string(),
            relationship: MajorRelationship::classify(score, job_norm == candidate_norm),
            normalized_job_major: job_norm,
            normalized_candidate_major: candidate_norm,
            score,
        }
    }

    pub fn compare_list(&self, job: &str, candidates: &[String]) -> MatchResult {
        rank_candidates(candidates, |c| self.score(job, c), |c| self.normalize(c))
    }
}
