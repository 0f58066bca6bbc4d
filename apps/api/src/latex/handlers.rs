//! Axum route handlers for résumé composition and export.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::latex::{compose, export_pdf, export_tex, TemplateKind, TexExport};
use crate::models::{JobPosting, Profile};
use crate::state::AppState;
use crate::store::{load_job, load_profile};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Inline records take precedence over the stored ones.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ComposeRequest {
    pub template: TemplateKind,
    pub profile: Option<Profile>,
    pub job: Option<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub latex: String,
    pub template: TemplateKind,
    pub filename: &'static str,
    pub mime: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/latex
pub async fn handle_compose(
    State(state): State<AppState>,
    body: Result<Json<ComposeRequest>, JsonRejection>,
) -> Result<Json<ComposeResponse>, AppError> {
    let request = compose_request(body)?;
    let template = request.template;
    let export = compose_export(&state, request).await?;
    Ok(Json(ComposeResponse {
        latex: export.source,
        template,
        filename: export.filename,
        mime: export.mime,
    }))
}

/// POST /api/v1/resume/tex
///
/// Same as `/latex` but answers with the raw source as a file download.
pub async fn handle_download_tex(
    State(state): State<AppState>,
    body: Result<Json<ComposeRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let export = compose_export(&state, compose_request(body)?).await?;
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        export.filename
    ))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid content-disposition: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(export.mime)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.source,
    )
        .into_response())
}

/// POST /api/v1/resume/pdf
///
/// PDF output needs an external LaTeX compiler. Once the inputs resolve this always
/// answers 501 rather than returning a partial file.
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    body: Result<Json<ComposeRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let export = compose_export(&state, compose_request(body)?).await?;
    let pdf = export_pdf(&export)?;
    Ok(([(header::CONTENT_TYPE, "application/pdf")], pdf).into_response())
}

/// A bare POST (no body, no content type) means "use the stored records".
fn compose_request(
    body: Result<Json<ComposeRequest>, JsonRejection>,
) -> Result<ComposeRequest, AppError> {
    match body {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(ComposeRequest::default()),
        Err(e) => Err(AppError::Validation(e.body_text())),
    }
}

/// Resolves both records and composes. Refuses to produce a document from missing input.
async fn compose_export(state: &AppState, request: ComposeRequest) -> Result<TexExport, AppError> {
    let profile = match request.profile {
        Some(profile) => Some(profile),
        None => load_profile(state.store.as_ref()).await?,
    };
    let job = match request.job {
        Some(job) => Some(job),
        None => load_job(state.store.as_ref()).await?,
    };

    let (profile, job) = match (profile, job) {
        (Some(profile), Some(job)) => (profile, job),
        (profile, job) => {
            let mut absent = Vec::new();
            if profile.is_none() {
                absent.push("profile");
            }
            if job.is_none() {
                absent.push("job");
            }
            return Err(AppError::MissingInput(format!(
                "Capture profile and job first (missing: {})",
                absent.join(", ")
            )));
        }
    };

    let latex = compose(&profile, &job, request.template);
    info!(
        "Composed {} résumé for {:?} targeting {:?} ({} bytes)",
        request.template,
        profile.name,
        job.title,
        latex.len()
    );
    Ok(export_tex(latex))
}
