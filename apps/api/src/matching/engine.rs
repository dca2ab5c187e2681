//! MatchEngine: one entry point over the field matchers and the aggregator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::hierarchy::DegreeHierarchy;
use crate::matching::aggregate::{overall_score, Aggregate, ComponentScores, ScoringWeights};
use crate::matching::degree::{DegreeMatch, DegreeMatcher};
use crate::matching::major::{MajorMatch, MajorMatcher};
use crate::matching::projects::{Project, ProjectMatcher, ProjectScoring, ProjectsReport};
use crate::matching::round2;
use crate::matching::similarity::SemanticSimilarity;
use crate::matching::skills::{SkillMatcher, SkillsReport};
use crate::reference::ReferenceData;

/// Everything needed for a combined evaluation. Inputs are expected pre-cleaned
/// (trimmed, blanks dropped).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationInput {
    pub job_title: String,
    pub job_major: String,
    pub job_degree: String,
    pub job_skills: Vec<String>,
    pub candidate_major: String,
    pub candidate_degree: String,
    pub candidate_skills: Vec<String>,
    pub candidate_projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub job_title: String,
    pub degree: DegreeMatch,
    pub major: MajorMatch,
    pub skills: SkillsReport,
    pub projects: ProjectsReport,
    pub aggregate: Aggregate,
}

#[derive(Clone)]
pub struct MatchEngine {
    degrees: DegreeMatcher,
    majors: MajorMatcher,
    skills: SkillMatcher,
    projects: ProjectMatcher,
    weights: ScoringWeights,
    semantic_backend: &'static str,
}

impl MatchEngine {
    /// One semantic backend serves every field, so scores within a field stay comparable.
    pub fn new(
        reference: Arc<ReferenceData>,
        hierarchy: Arc<dyn DegreeHierarchy>,
        semantic: Arc<dyn SemanticSimilarity>,
        weights: ScoringWeights,
        project_scoring: ProjectScoring,
    ) -> Self {
        let skills = SkillMatcher::new(reference.clone(), semantic.clone());
        Self {
            degrees: DegreeMatcher::new(reference.clone(), hierarchy, semantic.clone()),
            majors: MajorMatcher::new(reference, semantic.clone()),
            projects: ProjectMatcher::new(skills.clone(), semantic.clone(), project_scoring),
            skills,
            weights,
            semantic_backend: semantic.name(),
        }
    }

    pub fn degrees(&self) -> &DegreeMatcher {
        &self.degrees
    }

    pub fn majors(&self) -> &MajorMatcher {
        &self.majors
    }

    pub fn skills(&self) -> &SkillMatcher {
        &self.skills
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn semantic_backend(&self) -> &'static str {
        self.semantic_backend
    }

    // ── single-field scores ────────────────────────────────────────────────

    pub async fn degree_score(&self, candidate: &str, job: &str) -> f64 {
        self.degrees.score(candidate, job).await
    }

    pub fn major_score(&self, job: &str, candidate: &str) -> f64 {
        self.majors.score(job, candidate)
    }

    pub fn skills_score(&self, job_skills: &[String], candidate_skills: &[String]) -> SkillsReport {
        self.skills.match_skills(job_skills, candidate_skills)
    }

    pub fn project_score(&self, job_skills: &[String], projects: &[Project]) -> ProjectsReport {
        self.projects.match_projects(job_skills, projects)
    }

    pub fn overall_score(&self, scores: &ComponentScores) -> f64 {
        overall_score(scores, &self.weights)
    }

    // ── combined ───────────────────────────────────────────────────────────

    pub async fn evaluate(&self, input: &EvaluationInput) -> Evaluation {
        let degree = self
            .degrees
            .evaluate(&input.candidate_degree, &input.job_degree)
            .await;
        let major = self.majors.evaluate(&input.job_major, &input.candidate_major);
        let skills = self.skills_score(&input.job_skills, &input.candidate_skills);
        let projects = self.project_score(&input.job_skills, &input.candidate_projects);

        let scores = ComponentScores {
            degree: degree.score,
            major: round2(major.score * 100.0),
            skills: skills.match_percentage,
            projects: projects.overall_score,
        };

        Evaluation {
            job_title: input.job_title.clone(),
            aggregate: Aggregate::new(scores, self.weights),
            degree,
            major,
            skills,
            projects,
        }
    }
}
