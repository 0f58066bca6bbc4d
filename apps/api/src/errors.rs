use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::latex::ExportError;
use crate::scrape_port::PortError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A record the operation needs has not been captured yet.
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Scraping is not configured")]
    ScraperUnavailable,

    #[error("Scrape failed: {0}")]
    Scrape(#[from] PortError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingInput(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_INPUT",
                msg.clone(),
            ),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                let message = match e {
                    ExtractError::NotFound(kind) => {
                        format!("Open your {kind} page and try again.")
                    }
                    other => other.to_string(),
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    message,
                )
            }
            AppError::ScraperUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SCRAPER_UNAVAILABLE",
                "No scraper is configured; submit the record or page HTML instead".to_string(),
            ),
            AppError::Scrape(e) => {
                tracing::error!("Scrape error: {e}");
                match e {
                    PortError::Timeout(_) => (
                        StatusCode::GATEWAY_TIMEOUT,
                        "SCRAPE_TIMEOUT",
                        e.to_string(),
                    ),
                    _ => (StatusCode::BAD_GATEWAY, "SCRAPE_FAILED", e.to_string()),
                }
            }
            AppError::Export(e) => match e {
                ExportError::PdfUnsupported => (
                    StatusCode::NOT_IMPLEMENTED,
                    "PDF_UNSUPPORTED",
                    e.to_string(),
                ),
            },
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::MissingInput("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::ScraperUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                AppError::Export(ExportError::PdfUnsupported),
                StatusCode::NOT_IMPLEMENTED,
            ),
            (
                AppError::Scrape(PortError::Timeout(std::time::Duration::from_secs(1))),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                AppError::Scrape(PortError::Transport("down".into())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Extraction(ExtractError::NotFound("job")),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
