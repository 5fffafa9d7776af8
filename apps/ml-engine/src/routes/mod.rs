pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = RequestBodyLimitLayer::new(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/predict-score", post(handlers::handle_predict_score))
        .route("/extract-skills", post(handlers::handle_extract_skills))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_router() -> Router {
        build_router(AppState::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: false,
            rust_log: "info".to_string(),
            max_body_bytes: 64 * 1024,
        }))
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(request).await
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Synkronos AI ML Engine");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_predict_score_end_to_end() {
        let payload = json!({
            "resumeText": "5 years experience in Java and Python",
            "jobRequiredSkills": ["Java", "SQL"],
            "jobMinYearsOfExperience": 5,
            "jobDescription": "Java Python experience"
        });
        let (status, body) = post_json("/predict-score", &payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["breakdown"]["skillMatch"], 50.0);
        assert_eq!(body["breakdown"]["experienceMatch"], 100.0);
        assert_eq!(body["breakdown"]["textSimilarity"], 42.86);
        assert_eq!(body["overallScore"], 62.86);
        assert_eq!(body["skillMatchScores"], json!({"Java": 100.0, "SQL": 0.0}));
        assert_eq!(body["extractedSkills"], json!(["Java", "Python"]));
    }

    #[tokio::test]
    async fn test_predict_score_partial_body_uses_defaults() {
        let (status, body) =
            post_json("/predict-score", r#"{"resumeText": "Docker, 2 years in ops"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["breakdown"]["skillMatch"], 100.0);
        assert_eq!(body["breakdown"]["experienceMatch"], 100.0);
        assert_eq!(body["breakdown"]["textSimilarity"], 50.0);
        assert_eq!(body["overallScore"], 85.0);
        assert_eq!(body["skillMatchScores"], json!({}));
    }

    #[tokio::test]
    async fn test_predict_score_empty_object_is_400() {
        let (status, body) = post_json("/predict-score", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Request body is required"}));
    }

    #[tokio::test]
    async fn test_predict_score_malformed_json_is_400() {
        let (status, body) = post_json("/predict-score", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Request body is required");
    }

    #[tokio::test]
    async fn test_predict_score_missing_body_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/predict-score")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_predict_score_wrong_field_type_is_500() {
        let (status, body) = post_json("/predict-score", r#"{"jobRequiredSkills": 7}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["message"].as_str().unwrap().contains("invalid type"));
    }

    #[tokio::test]
    async fn test_predict_score_array_body_is_500() {
        let (status, body) =
            post_json("/predict-score", r#"["Python", ["python"], 1, "Python"]"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "Request body must be a JSON object");
    }

    #[tokio::test]
    async fn test_predict_score_scalar_body_is_500() {
        let (status, _) = post_json("/predict-score", r#""resume""#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_extract_skills() {
        let (status, body) = post_json(
            "/extract-skills",
            r#"{"resumeText": "I know Python and React"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let skills = body["skills"].as_array().unwrap();
        assert!(skills.contains(&json!("Python")));
        assert!(skills.contains(&json!("React")));
    }

    #[tokio::test]
    async fn test_extract_skills_empty_object() {
        let (status, body) = post_json("/extract-skills", "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"skills": []}));
    }

    #[tokio::test]
    async fn test_extract_skills_bad_body_is_500() {
        let (status, body) = post_json("/extract-skills", "null").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_extract_skills_array_body_is_500() {
        let (status, body) = post_json("/extract-skills", r#"["Python"]"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Request body must be a JSON object");
    }
}
