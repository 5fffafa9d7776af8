//! Axum route handlers for the scoring API.

use std::collections::BTreeSet;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::scoring::scorer::{ScoreRequest, ScoreResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Wire form of a scoring request. Every field may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictScoreRequest {
    pub resume_text: Option<String>,
    pub job_required_skills: Option<Vec<String>>,
    pub job_min_years_of_experience: Option<f64>,
    pub job_description: Option<String>,
}

impl From<PredictScoreRequest> for ScoreRequest {
    fn from(req: PredictScoreRequest) -> Self {
        ScoreRequest {
            resume_text: req.resume_text.unwrap_or_default(),
            job_required_skills: req.job_required_skills.unwrap_or_default(),
            job_min_years: req.job_min_years_of_experience.unwrap_or(0.0),
            job_description: req.job_description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSkillsRequest {
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: BTreeSet<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /predict-score
///
/// Scores one resume against one job. A missing, unreadable, or empty body
/// is a 400; a non-object body or fields of the wrong type are a 500
/// carrying the reason.
pub async fn handle_predict_score(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let body = match payload {
        Ok(Json(body)) if !is_empty_body(&body) => body,
        Ok(_) => return Err(AppError::BadRequest("Request body is required".to_string())),
        Err(rejection) => {
            tracing::debug!("Unreadable predict-score body: {}", rejection.body_text());
            return Err(AppError::BadRequest("Request body is required".to_string()));
        }
    };

    // serde would otherwise read an array as positional fields
    if !body.is_object() {
        return Err(anyhow::anyhow!("Request body must be a JSON object").into());
    }

    let request: PredictScoreRequest =
        serde_json::from_value(body).map_err(anyhow::Error::from)?;

    let result = state.scorer.score(&request.into());

    tracing::info!(
        overall_score = result.overall_score,
        skill_match = result.breakdown.skill_match,
        experience_match = result.breakdown.experience_match,
        text_similarity = result.breakdown.text_similarity,
        "Scored resume"
    );

    Ok(Json(result))
}

/// POST /extract-skills
///
/// Returns the vocabulary skills found in `resumeText`. Any body problem is
/// reported as a 500 with the reason.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let Json(body) = payload.map_err(|e| anyhow::anyhow!(e.body_text()))?;
    if !body.is_object() {
        return Err(anyhow::anyhow!("Request body must be a JSON object").into());
    }
    let request: ExtractSkillsRequest =
        serde_json::from_value(body).map_err(anyhow::Error::from)?;

    let skills = state
        .scorer
        .extract_skills(request.resume_text.as_deref().unwrap_or_default());

    tracing::debug!(count = skills.len(), "Extracted skills");

    Ok(Json(ExtractSkillsResponse { skills }))
}

/// JSON values that count as "no body": null, false, zero, and empty
/// strings, arrays, and objects.
fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
