//! Axum route handlers for the Matching API.
//!
//! Inputs are trimmed and blank list entries dropped before they reach the
//! matchers. Every scoring response carries its narrative `report`.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::degree::DegreeMatch;
use crate::matching::engine::{Evaluation, EvaluationInput};
use crate::matching::major::MajorMatch;
use crate::matching::projects::{Project, ProjectsReport};
use crate::matching::reducer::MatchResult;
use crate::matching::round2;
use crate::matching::skills::{SkillCategories, SkillInfo, SkillSimilarity, SkillsReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DegreeSimilarityQuery {
    #[serde(default)]
    pub candidate_degree: String,
    #[serde(default)]
    pub job_requirement: String,
}

#[derive(Debug, Serialize)]
pub struct DegreeSimilarityResponse {
    pub candidate_degree: String,
    pub job_requirement: String,
    pub similarity_score: f64,
    pub detail: DegreeMatch,
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct DegreeCompareRequest {
    #[serde(default)]
    pub job_requirement: String,
    #[serde(default)]
    pub candidate_degrees: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub requirement: String,
    #[serde(flatten)]
    pub result: MatchResult,
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct MajorSimilarityQuery {
    #[serde(default)]
    pub job_major: String,
    #[serde(default)]
    pub candidate_major: String,
}

#[derive(Debug, Serialize)]
pub struct MajorSimilarityResponse {
    /// [0, 1]
    pub similarity: f64,
    /// similarity × 100
    pub percentage: f64,
    #[serde(flatten)]
    pub detail: MajorMatch,
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct MajorCompareRequest {
    #[serde(default)]
    pub job_major: String,
    #[serde(default)]
    pub candidate_majors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsMatchRequest {
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub candidate_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsMatchResponse {
    #[serde(flatten)]
    pub result: SkillsReport,
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillQuery {
    #[serde(default)]
    pub skill: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillPairQuery {
    #[serde(default)]
    pub skill1: String,
    #[serde(default)]
    pub skill2: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsMatchRequest {
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsMatchResponse {
    #[serde(flatten)]
    pub result: ProjectsReport,
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub report: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Input cleanup
// ────────────────────────────────────────────────────────────────────────────

/// Longest accepted degree, major, skill or project name.
pub const MAX_VALUE_CHARS: usize = 200;
/// Longest accepted project description.
pub const MAX_DESCRIPTION_CHARS: usize = 5_000;
/// Most entries accepted in any list field.
pub const MAX_LIST_LEN: usize = 200;

fn check_length(value: &str, field: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} exceeds {max} characters"
        )));
    }
    Ok(())
}

fn required(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    check_length(trimmed, field, MAX_VALUE_CHARS)?;
    Ok(trimmed.to_string())
}

fn clean_list(values: &[String], field: &str) -> Result<Vec<String>, AppError> {
    if values.len() > MAX_LIST_LEN {
        return Err(AppError::Validation(format!(
            "{field} has more than {MAX_LIST_LEN} entries"
        )));
    }
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| -> Result<String, AppError> {
            check_length(v, field, MAX_VALUE_CHARS)?;
            Ok(v.to_string())
        })
        .collect()
}

fn required_list(values: &[String], field: &str) -> Result<Vec<String>, AppError> {
    let cleaned = clean_list(values, field)?;
    if cleaned.is_empty() {
        return Err(AppError::Validation(format!("{field} must contain at least one value")));
    }
    Ok(cleaned)
}

fn clean_projects(projects: &[Project]) -> Result<Vec<Project>, AppError> {
    if projects.len() > MAX_LIST_LEN {
        return Err(AppError::Validation(format!(
            "projects has more than {MAX_LIST_LEN} entries"
        )));
    }
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| -> Result<Project, AppError> {
            let description = p.description.trim();
            check_length(description, &format!("projects[{i}].description"), MAX_DESCRIPTION_CHARS)?;
            Ok(Project {
                name: required(&p.name, &format!("projects[{i}].name"))?,
                description: description.to_string(),
                skills: clean_list(&p.skills, &format!("projects[{i}].skills"))?,
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/degrees/similarity
///
/// Scores one candidate degree against a degree requirement (roughly 0 to 140).
pub async fn handle_degree_similarity(
    State(state): State<AppState>,
    query: Result<Query<DegreeSimilarityQuery>, QueryRejection>,
) -> Result<Json<DegreeSimilarityResponse>, AppError> {
    let Query(query) = query?;
    let candidate = required(&query.candidate_degree, "candidate_degree")?;
    let job = required(&query.job_requirement, "job_requirement")?;

    let detail = state.engine.degrees().evaluate(&candidate, &job).await;
    debug!(candidate = %candidate, job = %job, score = detail.score, "degree similarity");

    Ok(Json(DegreeSimilarityResponse {
        report: state.narrator.degree(&detail),
        similarity_score: detail.score,
        candidate_degree: candidate,
        job_requirement: job,
        detail,
    }))
}

/// POST /api/v1/degrees/compare
///
/// Ranks several candidate degrees against one requirement.
pub async fn handle_degree_compare(
    State(state): State<AppState>,
    payload: Result<Json<DegreeCompareRequest>, JsonRejection>,
) -> Result<Json<CompareResponse>, AppError> {
    let Json(request) = payload?;
    let job = required(&request.job_requirement, "job_requirement")?;
    let candidates = clean_list(&request.candidate_degrees, "candidate_degrees")?;

    let result = state.engine.degrees().compare_list(&job, &candidates).await;

    Ok(Json(CompareResponse {
        report: state.narrator.degree_list(&job, &result),
        requirement: job,
        result,
    }))
}

/// GET /api/v1/majors/similarity
pub async fn handle_major_similarity(
    State(state): State<AppState>,
    query: Result<Query<MajorSimilarityQuery>, QueryRejection>,
) -> Result<Json<MajorSimilarityResponse>, AppError> {
    let Query(query) = query?;
    let job = required(&query.job_major, "job_major")?;
    let candidate = required(&query.candidate_major, "candidate_major")?;

    let detail = state.engine.majors().evaluate(&job, &candidate);

    Ok(Json(MajorSimilarityResponse {
        similarity: detail.score,
        percentage: round2(detail.score * 100.0),
        report: state.narrator.major(&detail),
        detail,
    }))
}

/// POST /api/v1/majors/compare
pub async fn handle_major_compare(
    State(state): State<AppState>,
    payload: Result<Json<MajorCompareRequest>, JsonRejection>,
) -> Result<Json<CompareResponse>, AppError> {
    let Json(request) = payload?;
    let job = required(&request.job_major, "job_major")?;
    let candidates = clean_list(&request.candidate_majors, "candidate_majors")?;

    let result = state.engine.majors().compare_list(&job, &candidates);

    Ok(Json(CompareResponse {
        report: state.narrator.major_list(&job, &result),
        requirement: job,
        result,
    }))
}

/// POST /api/v1/skills/match
///
/// Best candidate skill per job skill, with the overall match percentage.
pub async fn handle_skills_match(
    State(state): State<AppState>,
    payload: Result<Json<SkillsMatchRequest>, JsonRejection>,
) -> Result<Json<SkillsMatchResponse>, AppError> {
    let Json(request) = payload?;
    let job_skills = required_list(&request.job_skills, "job_skills")?;
    let candidate_skills = required_list(&request.candidate_skills, "candidate_skills")?;

    let result = state.engine.skills_score(&job_skills, &candidate_skills);
    debug!(
        job_skills = job_skills.len(),
        candidate_skills = candidate_skills.len(),
        percentage = result.match_percentage,
        "skills matched"
    );

    Ok(Json(SkillsMatchResponse {
        report: state.narrator.skills(&result),
        result,
    }))
}

/// GET /api/v1/skills/normalize
pub async fn handle_skill_normalize(
    State(state): State<AppState>,
    query: Result<Query<SkillQuery>, QueryRejection>,
) -> Result<Json<SkillInfo>, AppError> {
    let Query(query) = query?;
    let skill = required(&query.skill, "skill")?;
    Ok(Json(state.engine.skills().skill_info(&skill)))
}

/// GET /api/v1/skills/category
pub async fn handle_skill_category(
    State(state): State<AppState>,
    query: Result<Query<SkillQuery>, QueryRejection>,
) -> Result<Json<SkillCategories>, AppError> {
    let Query(query) = query?;
    let skill = required(&query.skill, "skill")?;
    Ok(Json(state.engine.skills().categories(&skill)))
}

/// GET /api/v1/skills/similarity
pub async fn handle_skill_similarity(
    State(state): State<AppState>,
    query: Result<Query<SkillPairQuery>, QueryRejection>,
) -> Result<Json<SkillSimilarity>, AppError> {
    let Query(query) = query?;
    let skill1 = required(&query.skill1, "skill1")?;
    let skill2 = required(&query.skill2, "skill2")?;
    Ok(Json(state.engine.skills().similarity(&skill1, &skill2)))
}

/// POST /api/v1/projects/match
pub async fn handle_projects_match(
    State(state): State<AppState>,
    payload: Result<Json<ProjectsMatchRequest>, JsonRejection>,
) -> Result<Json<ProjectsMatchResponse>, AppError> {
    let Json(request) = payload?;
    let job_skills = required_list(&request.job_skills, "job_skills")?;
    let projects = clean_projects(&request.projects)?;

    let result = state.engine.project_score(&job_skills, &projects);

    Ok(Json(ProjectsMatchResponse {
        report: state.narrator.projects(&result),
        result,
    }))
}

/// POST /api/v1/evaluate
///
/// Full pipeline: degree, major, skills and projects, then the weighted overall score.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationInput>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let Json(request) = payload?;

    let input = EvaluationInput {
        job_title: request.job_title.trim().to_string(),
        job_major: required(&request.job_major, "job_major")?,
        job_degree: required(&request.job_degree, "job_degree")?,
        job_skills: required_list(&request.job_skills, "job_skills")?,
        candidate_major: required(&request.candidate_major, "candidate_major")?,
        candidate_degree: required(&request.candidate_degree, "candidate_degree")?,
        candidate_skills: clean_list(&request.candidate_skills, "candidate_skills")?,
        candidate_projects: clean_projects(&request.candidate_projects)?,
    };

    let evaluation = state.engine.evaluate(&input).await;
    debug!(
        job_title = %input.job_title,
        overall = evaluation.aggregate.overall_score,
        "candidate evaluated"
    );

    Ok(Json(EvaluateResponse {
        report: state.narrator.overall(&evaluation),
        evaluation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required("  BSc ", "job_requirement").unwrap(), "BSc");
        assert!(matches!(
            required("   ", "job_requirement"),
            Err(AppError::Validation(msg)) if msg.contains("job_requirement")
        ));
    }

    #[test]
    fn test_clean_list_drops_blanks() {
        let values = vec![" python ".to_string(), "".to_string(), "  ".to_string(), "sql".to_string()];
        assert_eq!(clean_list(&values, "job_skills").unwrap(), ["python", "sql"]);
        assert!(required_list(&["  ".to_string()], "job_skills").is_err());
    }

    #[test]
    fn test_over_long_values_are_rejected() {
        let long = "a".repeat(MAX_VALUE_CHARS + 1);
        assert!(matches!(
            required(&long, "job_major"),
            Err(AppError::Validation(msg)) if msg.contains("job_major")
        ));
        assert!(required(&"a".repeat(MAX_VALUE_CHARS), "job_major").is_ok());
        assert!(matches!(
            clean_list(&["python".to_string(), long], "candidate_majors"),
            Err(AppError::Validation(msg)) if msg.contains("candidate_majors")
        ));
    }

    #[test]
    fn test_over_long_lists_are_rejected() {
        let many = vec!["python".to_string(); MAX_LIST_LEN + 1];
        assert!(matches!(
            clean_list(&many, "candidate_skills"),
            Err(AppError::Validation(msg)) if msg.contains("candidate_skills")
        ));
        assert_eq!(clean_list(&many[..MAX_LIST_LEN], "candidate_skills").unwrap().len(), MAX_LIST_LEN);
    }

    #[test]
    fn test_over_long_description_is_rejected() {
        let projects = vec![Project {
            name: "Blog".to_string(),
            description: "x".repeat(MAX_DESCRIPTION_CHARS + 1),
            skills: vec![],
        }];
        assert!(matches!(
            clean_projects(&projects),
            Err(AppError::Validation(msg)) if msg.contains("projects[0].description")
        ));
    }

    #[test]
    fn test_clean_projects_requires_names() {
        let projects = vec![Project {
            name: " ".to_string(),
            description: String::new(),
            skills: vec![],
        }];
        assert!(matches!(
            clean_projects(&projects),
            Err(AppError::Validation(msg)) if msg.contains("projects[0].name")
        ));
    }
}
