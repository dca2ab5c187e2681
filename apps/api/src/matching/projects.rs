//! Project Matcher: per-project requirement coverage plus domain alignment.
//!
//! Each job skill is satisfied by the first match type that applies:
//! direct → related (relationship or category table) → semantic above threshold.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::matching::domain::{infer_domain, Domain};
use crate::matching::normalize::clean;
use crate::matching::round2;
use crate::matching::similarity::SemanticSimilarity;
use crate::matching::skills::SkillMatcher;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Tunables for project scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectScoring {
    pub semantic_threshold: f64,
    /// Percentage points added on domain alignment.
    pub domain_bonus: f64,
    /// Weight of the best project; the mean gets the rest.
    pub best_weight: f64,
}

impl Default for ProjectScoring {
    fn default() -> Self {
        Self {
            semantic_threshold: 0.6,
            domain_bonus: 20.0,
            best_weight: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectMatchKind {
    Direct,
    Related,
    Semantic,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementMatch {
    pub job_skill: String,
    pub normalized_job_skill: String,
    pub kind: ProjectMatchKind,
    pub matched_with: Option<String>,
    pub similarity: f64,
}

impl RequirementMatch {
    pub fn is_demonstrated(&self) -> bool {
        self.kind != ProjectMatchKind::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectMatch {
    pub name: String,
    pub domain: Option<Domain>,
    pub domain_aligned: bool,
    pub matched_requirements: usize,
    pub raw_percentage: f64,
    pub score: f64,
    pub requirements: Vec<RequirementMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsReport {
    pub job_domain: Option<Domain>,
    pub projects: Vec<ProjectMatch>,
    pub best_project: Option<String>,
    pub best_score: f64,
    pub mean_score: f64,
    pub overall_score: f64,
}

impl ProjectsReport {
    fn empty(job_domain: Option<Domain>) -> Self {
        Self {
            job_domain,
            projects: Vec::new(),
            best_project: None,
            best_score: 0.0,
            mean_score: 0.0,
            overall_score: 0.0,
        }
    }
}

#[derive(Clone)]
pub struct ProjectMatcher {
    skills: SkillMatcher,
    semantic: Arc<dyn SemanticSimilarity>,
    scoring: ProjectScoring,
}

impl ProjectMatcher {
    pub fn new(skills: SkillMatcher, semantic: Arc<dyn SemanticSimilarity>, scoring: ProjectScoring) -> Self {
        Self {
            skills,
            semantic,
            scoring,
        }
    }

    pub fn match_projects(&self, job_skills: &[String], projects: &[Project]) -> ProjectsReport {
        let job_normalized: Vec<String> = job_skills.iter().map(|s| self.skills.normalize(s)).collect();
        let job_domain = infer_domain(self.skills.reference(), &job_normalized, "");

        if job_skills.is_empty() || projects.is_empty() {
            return ProjectsReport::empty(job_domain);
        }

        let matched: Vec<ProjectMatch> = projects
            .iter()
            .map(|p| self.match_project(job_skills, &job_normalized, job_domain, p))
            .collect();

        // strictly greater keeps the first project on ties
        let best = matched
            .iter()
            .fold(None::<&ProjectMatch>, |best, p| match best {
                Some(b) if b.score >= p.score => Some(b),
                _ => Some(p),
            });
        let best_score = best.map_or(0.0, |b| b.score);
        let mean_score = matched.iter().map(|p| p.score).sum::<f64>() / matched.len() as f64;
        let overall = self.scoring.best_weight * best_score + (1.0 - self.scoring.best_weight) * mean_score;

        ProjectsReport {
            job_domain,
            best_project: best.map(|b| b.name.clone()),
            best_score,
            mean_score: round2(mean_score),
            overall_score: round2(overall.clamp(0.0, 100.0)),
            projects: matched,
        }
    }

    fn match_project(
        &self,
        job_skills: &[String],
        job_normalized: &[String],
        job_domain: Option<Domain>,
        project: &Project,
    ) -> ProjectMatch {
        let project_skills: Vec<String> = project.skills.iter().map(|s| self.skills.normalize(s)).collect();
        let description = format!(" {} ", clean(&project.description));

        let requirements: Vec<RequirementMatch> = job_skills
            .iter()
            .zip(job_normalized)
            .map(|(raw, normalized)| self.match_requirement(raw, normalized, &project_skills, &description))
            .collect();

        let matched_requirements = requirements.iter().filter(|r| r.is_demonstrated()).count();
        let raw_percentage = matched_requirements as f64 / requirements.len() as f64 * 100.0;

        let domain = infer_domain(self.skills.reference(), &project_skills, &project.name);
        let domain_aligned = domain.is_some() && domain == job_domain;
        let bonus = if domain_aligned { self.scoring.domain_bonus } else { 0.0 };

        ProjectMatch {
            name: project.name.clone(),
            domain,
            domain_aligned,
            matched_requirements,
            raw_percentage: round2(raw_percentage),
            score: round2((raw_percentage + bonus).clamp(0.0, 100.0)),
            requirements,
        }
    }

    fn match_requirement(
        &self,
        raw: &str,
        job_skill: &str,
        project_skills: &[String],
        description: &str,
    ) -> RequirementMatch {
        let found = |kind, matched_with: &str, similarity| RequirementMatch {
            job_skill: raw.to_string(),
            normalized_job_skill: job_skill.to_string(),
            kind,
            matched_with: Some(matched_with.to_string()),
            similarity,
        };

        if let Some(skill) = project_skills.iter().find(|s| *s == job_skill) {
            return found(ProjectMatchKind::Direct, skill.as_str(), 1.0);
        }
        if description.contains(&format!(" {job_skill} ")) {
            return found(ProjectMatchKind::Direct, job_skill, 1.0);
        }

        let reference = self.skills.reference();
        if let Some(skill) = project_skills
            .iter()
            .find(|s| reference.are_related(job_skill, s) || reference.category_contains(job_skill, s))
        {
            return found(ProjectMatchKind::Related, skill.as_str(), 1.0);
        }

        let mut best: Option<(&str, f64)> = None;
        for skill in project_skills {
            let similarity = self.semantic.similarity(job_skill, skill);
            if best.map_or(true, |(_, top)| similarity > top) {
                best = Some((skill.as_str(), similarity));
            }
        }
        match best {
            Some((skill, similarity)) if similarity > self.scoring.semantic_threshold => {
                found(ProjectMatchKind::Semantic, skill, similarity)
            }
            _ => RequirementMatch {
                job_skill: raw.to_string(),
                normalized_job_skill: job_skill.to_string(),
                kind: ProjectMatchKind::None,
                matched_with: None,
                similarity: best.map_or(0.0, |(_, s)| s),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::similarity::testing::StubSimilarity;
    use crate::reference::ReferenceData;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn project(name: &str, description: &str, items: &[&str]) -> Project {
        Project {
            name: name.to_string(),
            description: description.to_string(),
            skills: skills(items),
        }
    }

    fn matcher(semantic: StubSimilarity) -> ProjectMatcher {
        let semantic: Arc<dyn SemanticSimilarity> = Arc::new(semantic);
        let skills = SkillMatcher::new(Arc::new(ReferenceData::default()), semantic.clone());
        ProjectMatcher::new(skills, semantic, ProjectScoring::default())
    }

    #[test]
    fn test_single_project_score_is_overall() {
        let m = matcher(StubSimilarity::new(0.0));
        let report = m.match_projects(
            &skills(&["figma", "communication", "excel"]),
            &[project("Notes", "", &["figma"])],
        );
        let own = report.projects[0].score;
        assert!((own - 100.0 / 3.0).abs() < 0.01, "Expected ~33.33, got {own}");
        assert_eq!(report.overall_score, own);
    }

    #[test]
    fn test_priority_direct_then_related_then_semantic() {
        let m = matcher(StubSimilarity::new(0.0).with_pair("figma", "sketch", 0.65));
        let report = m.match_projects(
            &skills(&["docker", "sql", "figma", "excel"]),
            &[project("Tools", "", &["docker", "postgresql", "sketch"])],
        );
        let kinds: Vec<ProjectMatchKind> = report.projects[0].requirements.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            [
                ProjectMatchKind::Direct,
                ProjectMatchKind::Related,
                ProjectMatchKind::Semantic,
                ProjectMatchKind::None
            ]
        );
        assert_eq!(report.projects[0].matched_requirements, 3);
    }

    #[test]
    fn test_semantic_must_exceed_threshold() {
        let m = matcher(StubSimilarity::new(0.0).with_pair("figma", "sketch", 0.6));
        let report = m.match_projects(&skills(&["figma"]), &[project("Design", "", &["sketch"])]);
        assert_eq!(report.projects[0].requirements[0].kind, ProjectMatchKind::None);
        assert_eq!(report.projects[0].requirements[0].similarity, 0.6);
    }

    #[test]
    fn test_description_counts_as_direct_match() {
        let m = matcher(StubSimilarity::new(0.0));
        let report = m.match_projects(
            &skills(&["Docker"]),
            &[project("Infra", "Containerised the service with Docker.", &[])],
        );
        assert_eq!(report.projects[0].requirements[0].kind, ProjectMatchKind::Direct);
    }

    #[test]
    fn test_domain_bonus_applies_and_caps() {
        let m = matcher(StubSimilarity::new(0.0));
        let job = skills(&["pytorch", "tensorflow", "docker"]);
        let report = m.match_projects(
            &job,
            &[
                project("Image classifier", "", &["pytorch", "tensorflow"]),
                project("Full", "", &["pytorch", "tensorflow", "docker"]),
            ],
        );
        assert_eq!(report.job_domain, Some(Domain::MachineLearning));

        let partial = &report.projects[0];
        assert!(partial.domain_aligned);
        assert!((partial.score - 86.67).abs() < 1e-9, "Expected 86.67, got {}", partial.score);

        let full = &report.projects[1];
        assert_eq!(full.score, 100.0, "bonus never pushes past 100");
    }

    #[test]
    fn test_project_score_never_negative() {
        let semantic: Arc<dyn SemanticSimilarity> = Arc::new(StubSimilarity::new(0.0));
        let skill_matcher = SkillMatcher::new(Arc::new(ReferenceData::default()), semantic.clone());
        let scoring = ProjectScoring {
            domain_bonus: -80.0,
            ..ProjectScoring::default()
        };
        let m = ProjectMatcher::new(skill_matcher, semantic, scoring);

        let report = m.match_projects(
            &skills(&["pytorch", "tensorflow", "docker", "figma"]),
            &[project("Classifier", "", &["pytorch"])],
        );
        let only = &report.projects[0];
        assert_eq!(only.raw_percentage, 25.0);
        assert!(only.domain_aligned);
        assert_eq!(only.score, 0.0, "Expected 0, got {}", only.score);
    }

    #[test]
    fn test_no_bonus_without_job_domain() {
        let m = matcher(StubSimilarity::new(0.0));
        let report = m.match_projects(&skills(&["figma"]), &[project("App", "", &["figma", "flutter"])]);
        assert_eq!(report.job_domain, None);
        assert!(!report.projects[0].domain_aligned);
        assert_eq!(report.projects[0].score, 100.0);
    }

    #[test]
    fn test_best_and_mean_blend() {
        let m = matcher(StubSimilarity::new(0.0));
        let report = m.match_projects(
            &skills(&["figma", "excel"]),
            &[project("A", "", &["figma", "excel"]), project("B", "", &[])],
        );
        // 0.6 * 100 + 0.4 * 50
        assert_eq!(report.best_project.as_deref(), Some("A"));
        assert_eq!(report.mean_score, 50.0);
        assert_eq!(report.overall_score, 80.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let m = matcher(StubSimilarity::new(0.9));
        assert_eq!(m.match_projects(&skills(&["python"]), &[]).overall_score, 0.0);
        assert_eq!(
            m.match_projects(&[], &[project("A", "", &["python"])]).overall_score,
            0.0
        );
    }

    #[test]
    fn test_overall_stays_within_bounds() {
        let m = matcher(StubSimilarity::new(0.95));
        let report = m.match_projects(
            &skills(&["react", "javascript", "css"]),
            &[project("Site", "a website", &["react"]), project("Blog", "", &["vue"])],
        );
        assert!((0.0..=100.0).contains(&report.overall_score));
    }
}
