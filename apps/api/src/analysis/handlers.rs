//! Axum route handlers for gap analysis and the illustrative gauge.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::analysis::{analyze, illustrative_score, GapReport, IllustrativeScore};
use crate::errors::AppError;
use crate::models::{JobPosting, Profile};
use crate::state::AppState;
use crate::store::{load_job, load_profile};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub profile: Option<Profile>,
    pub job: Option<JobPosting>,
}

/// GET /api/v1/analysis
///
/// Analyzes the stored records. A record that was never captured yields the empty report.
pub async fn handle_analyze_stored(
    State(state): State<AppState>,
) -> Result<Json<GapReport>, AppError> {
    let profile = load_profile(state.store.as_ref()).await?;
    let job = load_job(state.store.as_ref()).await?;
    let report = analyze(profile.as_ref(), job.as_ref());
    if report.is_empty() {
        debug!(
            "Empty gap report (profile captured: {}, job captured: {})",
            profile.is_some(),
            job.is_some()
        );
    }
    Ok(Json(report))
}

/// POST /api/v1/analysis
pub async fn handle_analyze(Json(request): Json<AnalyzeRequest>) -> Json<GapReport> {
    Json(analyze(request.profile.as_ref(), request.job.as_ref()))
}

/// GET /api/v1/score/illustrative
///
/// Demo gauge value for the stored job. Not a fit score.
pub async fn handle_illustrative_score(
    State(state): State<AppState>,
) -> Result<Json<IllustrativeScore>, AppError> {
    let job = load_job(state.store.as_ref())
        .await?
        .ok_or_else(|| AppError::MissingInput("Capture a job first".to_string()))?;
    Ok(Json(illustrative_score(&job)))
}
