pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Degrees
        .route(
            "/api/v1/degrees/similarity",
            get(handlers::handle_degree_similarity),
        )
        .route(
            "/api/v1/degrees/compare",
            post(handlers::handle_degree_compare),
        )
        // Majors
        .route(
            "/api/v1/majors/similarity",
            get(handlers::handle_major_similarity),
        )
        .route("/api/v1/majors/compare", post(handlers::handle_major_compare))
        // Skills
        .route("/api/v1/skills/match", post(handlers::handle_skills_match))
        .route(
            "/api/v1/skills/normalize",
            get(handlers::handle_skill_normalize),
        )
        .route(
            "/api/v1/skills/category",
            get(handlers::handle_skill_category),
        )
        .route(
            "/api/v1/skills/similarity",
            get(handlers::handle_skill_similarity),
        )
        // Projects
        .route(
            "/api/v1/projects/match",
            post(handlers::handle_projects_match),
        )
        // Combined
        .route("/api/v1/evaluate", post(handlers::handle_evaluate))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config {
            degree_lookup_enabled: false,
            ..Config::default()
        };
        build_router(AppState::from_config(config).unwrap())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "fitmatch");
    }

    #[tokio::test]
    async fn test_degree_similarity() {
        let (status, body) = send(get_request(
            "/api/v1/degrees/similarity?candidate_degree=PhD&job_requirement=BSc",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["similarity_score"], 140.0);
        assert!(body["report"].as_str().unwrap().contains("140"));
    }

    #[tokio::test]
    async fn test_degree_similarity_requires_both_params() {
        let (status, body) = send(get_request("/api/v1/degrees/similarity?candidate_degree=PhD")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_major_similarity_alias() {
        let (status, body) = send(get_request(
            "/api/v1/majors/similarity?job_major=Computer%20Science&candidate_major=CS",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["similarity"], 1.0);
        assert_eq!(body["percentage"], 100.0);
    }

    #[tokio::test]
    async fn test_skills_match() {
        let (status, body) = send(post_json(
            "/api/v1/skills/match",
            &json!({
                "job_skills": ["python", "sql"],
                "candidate_skills": ["python", "postgresql"]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_percentage"], 95.0);
        assert_eq!(body["matches"].as_array().unwrap().len(), 2);
        assert!(!body["report"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_skills_match_rejects_empty_job_skills() {
        let (status, body) = send(post_json(
            "/api/v1/skills/match",
            &json!({ "job_skills": ["  "], "candidate_skills": ["python"] }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("job_skills"));
    }

    #[tokio::test]
    async fn test_major_compare_rejects_over_long_candidate() {
        let (status, body) = send(post_json(
            "/api/v1/majors/compare",
            &json!({
                "job_major": "Computer Science",
                "candidate_majors": ["Physics", "x".repeat(20_000)]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("candidate_majors"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_unprocessable() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/skills/match")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"job_skills\": [\"python\""))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = send(get_request("/api/v1/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_skill_normalize_expands_alias() {
        let (status, body) = send(get_request("/api/v1/skills/normalize?skill=js")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["normalized"], "javascript");
        assert_eq!(body["is_abbreviation"], true);
    }

    #[tokio::test]
    async fn test_evaluate() {
        let (status, body) = send(post_json(
            "/api/v1/evaluate",
            &json!({
                "job_title": "Backend Engineer",
                "job_major": "Computer Science",
                "job_degree": "BSc",
                "job_skills": ["python", "sql"],
                "candidate_major": "CS",
                "candidate_degree": "MSc",
                "candidate_skills": ["python", "postgresql"],
                "candidate_projects": [
                    { "name": "Inventory API", "skills": ["python", "postgresql"] }
                ]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_title"], "Backend Engineer");
        assert_eq!(body["aggregate"]["scores"]["degree"], 130.0);
        assert_eq!(body["aggregate"]["scores"]["major"], 100.0);
        assert!(body["aggregate"]["overall_score"].as_f64().unwrap() > 90.0);
        assert!(body["report"].as_str().unwrap().contains("130%"));
    }

    #[tokio::test]
    async fn test_evaluate_requires_candidate_degree() {
        let (status, body) = send(post_json(
            "/api/v1/evaluate",
            &json!({
                "job_major": "Computer Science",
                "job_degree": "BSc",
                "job_skills": ["python"],
                "candidate_major": "CS"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("candidate_degree"));
    }
}
