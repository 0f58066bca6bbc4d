//! Axum route handlers for capturing the profile and job records.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::capture::url::{is_profile_url, is_web_url};
use crate::errors::AppError;
use crate::extract::{extract_job, extract_profile};
use crate::models::{JobPosting, Profile};
use crate::scrape_port::{dispatch_with_retry, ScrapeKind, ScrapePort};
use crate::state::AppState;
use crate::store::{load_job, load_profile, save_job, save_profile};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub html: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileCaptured {
    pub profile: Profile,
    pub experience_count: usize,
    pub captured_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct JobCaptured {
    pub job: JobPosting,
    pub captured_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    load_profile(state.store.as_ref())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No profile captured yet".to_string()))
}

/// PUT /api/v1/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<ProfileCaptured>, AppError> {
    store_profile(&state, profile).await
}

/// POST /api/v1/profile/extract
pub async fn handle_extract_profile(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ProfileCaptured>, AppError> {
    let mut profile = extract_profile(&request.html)?;
    profile.linkedin_url = request.url;
    store_profile(&state, profile).await
}

/// POST /api/v1/profile/scrape
///
/// Rejects anything that is not a public profile URL before the scraper is contacted.
pub async fn handle_scrape_profile(
    State(state): State<AppState>,
    Json(request): Json<ScrapeUrlRequest>,
) -> Result<Json<ProfileCaptured>, AppError> {
    if !is_profile_url(&request.url) {
        return Err(AppError::Validation(
            "Please open a LinkedIn profile first: not a valid profile link".to_string(),
        ));
    }
    let port = scraper(&state)?;
    let url = request.url.trim();

    let mut profile: Profile = dispatch_with_retry(
        port.as_ref(),
        ScrapeKind::Profile,
        url,
        state.config.scrape_timeout,
        state.config.scrape_max_attempts,
    )
    .await?;
    if profile.linkedin_url.is_none() {
        profile.linkedin_url = Some(url.to_string());
    }
    store_profile(&state, profile).await
}

async fn store_profile(
    state: &AppState,
    profile: Profile,
) -> Result<Json<ProfileCaptured>, AppError> {
    save_profile(state.store.as_ref(), &profile).await?;
    info!(
        "Profile captured: {:?} with {} experiences",
        profile.name,
        profile.experiences.len()
    );
    Ok(Json(ProfileCaptured {
        experience_count: profile.experiences.len(),
        profile,
        captured_at: Utc::now(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Job
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/job
pub async fn handle_get_job(State(state): State<AppState>) -> Result<Json<JobPosting>, AppError> {
    load_job(state.store.as_ref())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No job captured yet".to_string()))
}

/// PUT /api/v1/job
pub async fn handle_put_job(
    State(state): State<AppState>,
    Json(job): Json<JobPosting>,
) -> Result<Json<JobCaptured>, AppError> {
    store_job(&state, job).await
}

/// POST /api/v1/job/extract
pub async fn handle_extract_job(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<JobCaptured>, AppError> {
    let mut job = extract_job(&request.html)?;
    job.url = request.url;
    store_job(&state, job).await
}

/// POST /api/v1/job/scrape
pub async fn handle_scrape_job(
    State(state): State<AppState>,
    Json(request): Json<ScrapeUrlRequest>,
) -> Result<Json<JobCaptured>, AppError> {
    if !is_web_url(&request.url) {
        return Err(AppError::Validation(format!(
            "'{}' is not an http(s) URL",
            request.url
        )));
    }
    let port = scraper(&state)?;
    let url = request.url.trim();

    let mut job: JobPosting = dispatch_with_retry(
        port.as_ref(),
        ScrapeKind::Job,
        url,
        state.config.scrape_timeout,
        state.config.scrape_max_attempts,
    )
    .await?;
    if job.url.is_none() {
        job.url = Some(url.to_string());
    }
    store_job(&state, job).await
}

async fn store_job(state: &AppState, job: JobPosting) -> Result<Json<JobCaptured>, AppError> {
    save_job(state.store.as_ref(), &job).await?;
    info!("Job captured: {:?} at {:?}", job.title, job.company);
    Ok(Json(JobCaptured {
        job,
        captured_at: Utc::now(),
    }))
}

fn scraper(state: &AppState) -> Result<&Arc<dyn ScrapePort>, AppError> {
    state.scraper.as_ref().ok_or(AppError::ScraperUnavailable)
}
