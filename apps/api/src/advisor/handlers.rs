use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::advisor::prompts::build_advisor_prompt;
use crate::advisor::{AdvisorError, AnalysisContext};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdvisorRequest {
    pub question: String,
    pub resume: String,
    pub job_description: String,
    #[serde(default)]
    pub analysis_context: Option<AnalysisContext>,
}

#[derive(Debug, Serialize)]
pub struct AdvisorResponse {
    pub answer: String,
}

/// POST /api/v1/advisor/ask
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(req): Json<AdvisorRequest>,
) -> Result<Json<AdvisorResponse>, AppError> {
    let prompt = build_advisor_prompt(
        &req.question,
        &req.resume,
        &req.job_description,
        req.analysis_context.as_ref(),
    );

    let answer = state.advisor.ask(&prompt).await.map_err(|e| match e {
        AdvisorError::NotConfigured | AdvisorError::MalformedKey => {
            AppError::LlmUnavailable(e.to_string())
        }
        other => AppError::LlmRequest(other.to_string()),
    })?;

    Ok(Json(AdvisorResponse { answer }))
}
