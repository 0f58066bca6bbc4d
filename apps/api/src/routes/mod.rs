pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::capture::handlers as capture;
use crate::latex::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Capture
        .route(
            "/api/v1/profile",
            get(capture::handle_get_profile).put(capture::handle_put_profile),
        )
        .route(
            "/api/v1/profile/extract",
            post(capture::handle_extract_profile),
        )
        .route("/api/v1/profile/scrape", post(capture::handle_scrape_profile))
        .route(
            "/api/v1/job",
            get(capture::handle_get_job).put(capture::handle_put_job),
        )
        .route("/api/v1/job/extract", post(capture::handle_extract_job))
        .route("/api/v1/job/scrape", post(capture::handle_scrape_job))
        // Analysis
        .route(
            "/api/v1/analysis",
            get(analysis::handle_analyze_stored).post(analysis::handle_analyze),
        )
        .route(
            "/api/v1/score/illustrative",
            get(analysis::handle_illustrative_score),
        )
        // Resume
        .route("/api/v1/resume/latex", post(resume::handle_compose))
        .route("/api/v1/resume/tex", post(resume::handle_download_tex))
        .route("/api/v1/resume/pdf", post(resume::handle_download_pdf))
        .with_state(state)
}
