use std::sync::Arc;

use crate::config::Config;
use crate::scrape_port::ScrapePort;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Local key-value cache for the captured profile and job.
    pub store: Arc<dyn RecordStore>,
    /// Pluggable scrape port. `None` when no scraper endpoint is configured.
    pub scraper: Option<Arc<dyn ScrapePort>>,
}
