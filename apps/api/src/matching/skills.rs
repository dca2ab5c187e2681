//! Skill Matcher: taxonomy-aware best-match selection per job skill.
//!
//! Pair scoring, in order: exact normalized match (1.0), category relation
//! (0.9), semantic similarity. Skills are alias-expanded, then spelling-corrected
//! against the known skill list.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::matching::fuzzy;
use crate::matching::normalize::{FieldKind, Normalizer};
use crate::matching::round2;
use crate::matching::similarity::SemanticSimilarity;
use crate::reference::ReferenceData;

pub const EXACT_SCORE: f64 = 1.0;
pub const CATEGORY_SCORE: f64 = 0.9;
pub const RELATED_THRESHOLD: f64 = 0.7;
const SPELLING_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Category,
    Semantic,
    /// No candidate skill to compare against.
    None,
}

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// Best candidate for one job skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatch {
    pub job_skill: String,
    pub normalized_job_skill: String,
    pub candidate_skill: Option<String>,
    pub normalized_candidate_skill: Option<String>,
    pub score: f64,
    pub match_kind: MatchKind,
    /// 0.7 ≤ score < 1.0
    pub related: bool,
    pub category_match: bool,
}

/// Candidate skill that was not the best match for any job skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalSkill {
    pub skill: String,
    pub normalized: String,
    /// Categories shared with at least one job skill.
    pub shared_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsReport {
    pub matches: Vec<SkillMatch>,
    pub total_score: f64,
    pub max_possible_score: f64,
    pub match_percentage: f64,
    pub additional_skills: Vec<AdditionalSkill>,
}

impl SkillsReport {
    fn empty() -> Self {
        Self {
            matches: Vec::new(),
            total_score: 0.0,
            max_possible_score: 0.0,
            match_percentage: 0.0,
            additional_skills: Vec::new(),
        }
    }

    pub fn exact_matches(&self) -> impl Iterator<Item = &SkillMatch> {
        self.matches.iter().filter(|m| m.match_kind == MatchKind::Exact)
    }

    pub fn related_matches(&self) -> impl Iterator<Item = &SkillMatch> {
        self.matches.iter().filter(|m| m.related)
    }

    /// Job skills with no candidate scoring at least the related threshold.
    pub fn missing(&self) -> impl Iterator<Item = &SkillMatch> {
        self.matches.iter().filter(|m| m.score < RELATED_THRESHOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillInfo {
    pub skill: String,
    pub normalized: String,
    pub is_abbreviation: bool,
    pub is_known: bool,
    /// The skill names a category itself (e.g. "web development").
    pub is_category: bool,
    /// First category the skill belongs to.
    pub category: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMembers {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategories {
    pub skill: String,
    pub normalized: String,
    pub categories: Vec<CategoryMembers>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSimilarity {
    pub skill1: String,
    pub skill2: String,
    pub normalized1: String,
    pub normalized2: String,
    pub score: f64,
    pub match_kind: MatchKind,
    pub shared_category: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// SkillMatcher
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SkillMatcher {
    normalizer: Normalizer,
    reference: Arc<ReferenceData>,
    semantic: Arc<dyn SemanticSimilarity>,
}

impl SkillMatcher {
    pub fn new(reference: Arc<ReferenceData>, semantic: Arc<dyn SemanticSimilarity>) -> Self {
        Self {
            normalizer: Normalizer::new(reference.clone()),
            reference,
            semantic,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Alias expansion, then correction to the closest known skill when the
    /// result is unknown and some known skill scores above 0.85.
    pub fn normalize(&self, skill: &str) -> String {
        let expanded = self.normalizer.normalize(skill, FieldKind::Skill);
        if self.reference.is_known_skill(&expanded) {
            return expanded;
        }

        let mut best: Option<(&str, f64)> = None;
        for known in self.reference.known_skills() {
            let score = fuzzy::ratio(&expanded, known);
            if score > SPELLING_THRESHOLD && best.map_or(true, |(_, top)| score > top) {
                best = Some((known.as_str(), score));
            }
        }

        match best {
            Some((known, score)) => {
                debug!(skill, corrected = known, score, "skill spelling corrected");
                known.to_string()
            }
            None => expanded,
        }
    }

    /// Score and kind for two already-normalized skills.
    pub fn pair_score(&self, a: &str, b: &str) -> (f64, MatchKind) {
        if a == b {
            return (EXACT_SCORE, MatchKind::Exact);
        }
        if self.reference.category_contains(a, b) || self.reference.shared_category(a, b).is_some() {
            return (CATEGORY_SCORE, MatchKind::Category);
        }
        let score = self.semantic.similarity(a, b).clamp(0.0, 1.0);
        (score, MatchKind::Semantic)
    }

    pub fn match_skills(&self, job_skills: &[String], candidate_skills: &[String]) -> SkillsReport {
        if job_skills.is_empty() {
            return SkillsReport::empty();
        }

        let candidates: Vec<(&str, String)> = candidate_skills
            .iter()
            .map(|c| (c.as_str(), self.normalize(c)))
            .collect();

        let mut matches = Vec::with_capacity(job_skills.len());
        let mut chosen = HashSet::new();

        for job_skill in job_skills {
            let normalized_job = self.normalize(job_skill);

            let mut best: Option<(usize, f64, MatchKind)> = None;
            for (idx, (_, normalized)) in candidates.iter().enumerate() {
                let (score, kind) = self.pair_score(&normalized_job, normalized);
                if best.map_or(true, |(_, top, _)| score > top) {
                    best = Some((idx, score, kind));
                }
                if kind == MatchKind::Exact {
                    break;
                }
            }

            let skill_match = match best {
                Some((idx, score, kind)) => {
                    chosen.insert(idx);
                    let (raw, normalized) = &candidates[idx];
                    SkillMatch {
                        job_skill: job_skill.clone(),
                        category_match: self.reference.shared_category(&normalized_job, normalized).is_some()
                            || self.reference.category_contains(&normalized_job, normalized),
                        normalized_job_skill: normalized_job,
                        candidate_skill: Some(raw.to_string()),
                        normalized_candidate_skill: Some(normalized.clone()),
                        score,
                        match_kind: kind,
                        related: (RELATED_THRESHOLD..EXACT_SCORE).contains(&score),
                    }
                }
                None => SkillMatch {
                    job_skill: job_skill.clone(),
                    normalized_job_skill: normalized_job,
                    candidate_skill: None,
                    normalized_candidate_skill: None,
                    score: 0.0,
                    match_kind: MatchKind::None,
                    related: false,
                    category_match: false,
                },
            };
            matches.push(skill_match);
        }

        let total_score: f64 = matches.iter().map(|m| m.score).sum();
        let max_possible_score = matches.len() as f64;
        let match_percentage = round2((total_score / max_possible_score * 100.0).min(100.0));

        let job_categories: HashSet<&str> = matches
            .iter()
            .flat_map(|m| self.reference.categories_of(&m.normalized_job_skill))
            .collect();

        let additional_skills = candidates
            .iter()
            .enumerate()
            .filter(|(idx, _)| !chosen.contains(idx))
            .map(|(_, (raw, normalized))| AdditionalSkill {
                skill: raw.to_string(),
                shared_categories: self
                    .reference
                    .categories_of(normalized)
                    .into_iter()
                    .filter(|c| job_categories.contains(c))
                    .map(str::to_string)
                    .collect(),
                normalized: normalized.clone(),
            })
            .collect();

        SkillsReport {
            matches,
            total_score: round2(total_score),
            max_possible_score,
            match_percentage,
            additional_skills,
        }
    }

    // ── lookups ────────────────────────────────────────────────────────────

    pub fn skill_info(&self, skill: &str) -> SkillInfo {
        let normalized = self.normalize(skill);
        let categories: Vec<String> = self
            .reference
            .categories_of(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect();

        SkillInfo {
            skill: skill.to_string(),
            is_abbreviation: self.normalizer.is_alias(skill, FieldKind::Skill),
            is_known: self.reference.is_known_skill(&normalized),
            is_category: self.reference.is_category(&normalized),
            category: categories.first().cloned(),
            categories,
            normalized,
        }
    }

    pub fn categories(&self, skill: &str) -> SkillCategories {
        let normalized = self.normalize(skill);
        let categories = self
            .reference
            .categories_of(&normalized)
            .into_iter()
            .map(|name| CategoryMembers {
                name: name.to_string(),
                skills: self
                    .reference
                    .category_members(name)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default(),
            })
            .collect();

        SkillCategories {
            skill: skill.to_string(),
            normalized,
            categories,
        }
    }

    pub fn similarity(&self, skill1: &str, skill2: &str) -> SkillSimilarity {
        let normalized1 = self.normalize(skill1);
        let normalized2 = self.normalize(skill2);
        let (score, match_kind) = self.pair_score(&normalized1, &normalized2);

        SkillSimilarity {
            skill1: skill1.to_string(),
            skill2: skill2.to_string(),
            shared_category: self
                .reference
                .shared_category(&normalized1, &normalized2)
                .map(str::to_string),
            normalized1,
            normalized2,
            score,
            match_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::similarity::testing::StubSimilarity;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn matcher(semantic: StubSimilarity) -> SkillMatcher {
        SkillMatcher::new(Arc::new(ReferenceData::default()), Arc::new(semantic))
    }

    #[test]
    fn test_python_sql_against_python_postgresql() {
        let m = matcher(StubSimilarity::new(0.0));
        let report = m.match_skills(&skills(&["python", "sql"]), &skills(&["python", "postgresql"]));

        assert_eq!(report.matches[0].match_kind, MatchKind::Exact);
        assert_eq!(report.matches[0].score, 1.0);
        assert_eq!(report.matches[1].match_kind, MatchKind::Category);
        assert_eq!(report.matches[1].score, 0.9);
        assert!(report.matches[1].related);
        assert!(report.matches[1].category_match);
        assert!(
            (report.match_percentage - 95.0).abs() < 1e-9,
            "Expected 95, got {}",
            report.match_percentage
        );
    }

    #[test]
    fn test_aliases_count_as_exact() {
        let m = matcher(StubSimilarity::new(0.0));
        let report = m.match_skills(&skills(&["Kubernetes", "JavaScript"]), &skills(&["k8s", "JS"]));
        assert_eq!(report.match_percentage, 100.0);
        assert_eq!(report.exact_matches().count(), 2);
    }

    #[test]
    fn test_category_name_contains_member() {
        let m = matcher(StubSimilarity::new(0.0));
        let (score, kind) = m.pair_score("web development", "react");
        assert_eq!((score, kind), (0.9, MatchKind::Category));
    }

    #[test]
    fn test_semantic_fallback_uses_raw_cosine() {
        let m = matcher(StubSimilarity::new(0.0).with_pair("communication", "figma", 0.42));
        let (score, kind) = m.pair_score("communication", "figma");
        assert_eq!((score, kind), (0.42, MatchKind::Semantic));
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let m = matcher(StubSimilarity::new(0.0));
        // both share a category with "sql"
        let report = m.match_skills(&skills(&["sql"]), &skills(&["mysql", "postgresql"]));
        assert_eq!(report.matches[0].candidate_skill.as_deref(), Some("mysql"));
    }

    #[test]
    fn test_percentage_is_monotonic_in_exact_matches() {
        let m = matcher(StubSimilarity::new(0.1));
        let job = skills(&["python", "figma", "kubernetes"]);
        let mut candidates = skills(&["python"]);

        let mut last = m.match_skills(&job, &candidates).match_percentage;
        for extra in ["figma", "kubernetes"] {
            candidates.push(extra.to_string());
            let next = m.match_skills(&job, &candidates).match_percentage;
            assert!(next > last, "adding {extra}: {last} → {next}");
            last = next;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_no_candidates_scores_zero() {
        let m = matcher(StubSimilarity::new(0.5));
        let report = m.match_skills(&skills(&["python"]), &[]);
        assert_eq!(report.match_percentage, 0.0);
        assert_eq!(report.matches[0].match_kind, MatchKind::None);
        assert_eq!(report.missing().count(), 1);
    }

    #[test]
    fn test_no_job_skills_is_empty_report() {
        let m = matcher(StubSimilarity::new(0.5));
        let report = m.match_skills(&[], &skills(&["python"]));
        assert!(report.matches.is_empty());
        assert_eq!(report.match_percentage, 0.0);
    }

    #[test]
    fn test_additional_skills_report_shared_categories() {
        let m = matcher(StubSimilarity::new(0.0));
        let report = m.match_skills(&skills(&["react"]), &skills(&["react", "vue", "figma"]));

        let names: Vec<&str> = report.additional_skills.iter().map(|a| a.skill.as_str()).collect();
        assert_eq!(names, ["vue", "figma"]);
        assert!(report.additional_skills[0]
            .shared_categories
            .contains(&"web development".to_string()));
        assert!(report.additional_skills[1].shared_categories.is_empty());
    }

    #[test]
    fn test_spelling_correction_to_known_skill() {
        let m = matcher(StubSimilarity::new(0.0));
        assert_eq!(m.normalize("Pythn"), "python");
        assert_eq!(m.normalize("kubernets"), "kubernetes");
        // nothing close enough: kept as is
        assert_eq!(m.normalize("basket weaving"), "basket weaving");
    }

    #[test]
    fn test_skill_info_lookup() {
        let m = matcher(StubSimilarity::new(0.0));
        let info = m.skill_info("k8s");
        assert_eq!(info.normalized, "kubernetes");
        assert!(info.is_abbreviation);
        assert_eq!(info.category.as_deref(), Some("devops"));
        assert!(info.categories.contains(&"cloud computing".to_string()));
    }

    #[test]
    fn test_categories_lookup_lists_members() {
        let m = matcher(StubSimilarity::new(0.0));
        let found = m.categories("postgres");
        assert_eq!(found.normalized, "postgresql");
        let database = found
            .categories
            .iter()
            .find(|c| c.name == "database")
            .expect("postgresql belongs to database");
        assert!(database.skills.contains(&"sql".to_string()));
    }

    #[test]
    fn test_similarity_lookup_is_symmetric() {
        let m = matcher(StubSimilarity::new(0.3));
        let ab = m.similarity("sql", "postgres");
        let ba = m.similarity("postgres", "sql");
        assert_eq!(ab.score, ba.score);
        assert_eq!(ab.shared_category.as_deref(), Some("database"));
    }
}
