use axum::{extract::State, Json};
use chrono::Utc;

use crate::analysis::{self, export};
use crate::errors::AppError;
use crate::models::analysis::{
    AnalysisResponse, AnalyzeRequest, ExportRequest, ExportResponse,
};
use crate::state::AppState;

/// POST /api/v1/analysis
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let result = analysis::analyze(&req.resume, &req.job_description, &state.analyzer_options)?;
    Ok(Json(AnalysisResponse {
        result,
        analyzed_at: Utc::now(),
    }))
}

/// POST /api/v1/analysis/export
pub async fn handle_export(
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let (optimized_resume, replaced_sections) =
        export::build_optimized_resume(&req.resume, &req.rewritten_sections, &req.missing_keywords);
    Ok(Json(ExportResponse {
        optimized_resume,
        replaced_sections,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
John Doe
Email: john.doe@example.com
PROFESSIONAL SUMMARY
Seeking a challenging position where I can grow my skills.
WORK EXPERIENCE
- Responsible for managing various projects
EDUCATION
B.S. Computer Science, State University, 2015
SKILLS
Python, communication";

    const JOB_DESCRIPTION: &str = "\
Requirements: experience with Kubernetes and terraform required.
Responsibilities: design services, mentor the team, own reliability.
Qualifications: strong skills, senior candidate preferred.";

    #[tokio::test]
    async fn test_handle_export_round_trips_analysis_output() {
        let result = analysis::analyze(
            RESUME,
            JOB_DESCRIPTION,
            &analysis::AnalyzerOptions::deterministic(),
        )
        .unwrap();

        let response = handle_export(Json(ExportRequest {
            resume: RESUME.to_string(),
            rewritten_sections: result.rewritten_sections.clone(),
            missing_keywords: result.missing_keywords.clone(),
        }))
        .await
        .unwrap();

        // Every original was a verbatim substring, so every rewrite lands.
        assert_eq!(response.0.replaced_sections, result.rewritten_sections.len());
        for section in &result.rewritten_sections {
            assert!(response.0.optimized_resume.contains(&section.rewritten));
        }
    }
}
