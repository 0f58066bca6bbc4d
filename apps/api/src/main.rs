mod analysis;
mod capture;
mod config;
mod errors;
mod extract;
mod latex;
mod models;
mod routes;
mod scrape_port;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, MEMORY_STORE};
use crate::routes::build_router;
use crate::scrape_port::{HttpScrapePort, ScrapePort};
use crate::state::AppState;
use crate::store::{FileStore, MemoryStore, RecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResuMate API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the local record store
    let store = open_store(&config.store_path).await?;

    // Initialize the scrape port (optional)
    let scraper: Option<Arc<dyn ScrapePort>> = match &config.scraper_url {
        Some(url) => {
            let port = HttpScrapePort::new(url.clone());
            info!(
                "Scrape port enabled: {} (timeout {:?}, {} attempts)",
                port.endpoint(),
                config.scrape_timeout,
                config.scrape_max_attempts
            );
            Some(Arc::new(port))
        }
        None => {
            info!("SCRAPER_URL not set — scrape routes disabled");
            None
        }
    };

    let cors = build_cors(&config.allowed_origins)?;

    // Build app state
    let state = AppState {
        store,
        scraper,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_store(store_path: &str) -> Result<Arc<dyn RecordStore>> {
    if store_path == MEMORY_STORE {
        info!("Using in-memory record store (records are lost on restart)");
        return Ok(Arc::new(MemoryStore::default()));
    }

    let store = FileStore::open(store_path)
        .await
        .with_context(|| format!("Failed to open record store at '{store_path}'"))?;
    info!("Using file record store at {}", store.path().display());
    Ok(Arc::new(store))
}

/// Permissive CORS when no origins are configured (local development and the extension
/// popup); otherwise only the listed origins.
fn build_cors(allowed_origins: &[String]) -> Result<CorsLayer> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("CORS restricted to {} origins", origins.len());

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_without_origins_is_permissive() {
        assert!(build_cors(&[]).is_ok());
    }

    #[test]
    fn test_cors_accepts_listed_origins() {
        let origins = vec![
            "chrome-extension://abc".to_string(),
            "http://localhost:3000".to_string(),
        ];
        assert!(build_cors(&origins).is_ok());
    }

    #[test]
    fn test_cors_rejects_invalid_origin() {
        let origins = vec!["http://ok.example".to_string(), "http://bad\norigin".to_string()];
        let err = build_cors(&origins).err().unwrap();
        assert!(format!("{err:#}").contains("ALLOWED_ORIGINS"));
    }
}
