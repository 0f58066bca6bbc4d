use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::{PortError, ScrapePort, ScrapeRequest, ScrapeResponse};

/// Scrape port backed by an HTTP scraper service.
///
/// The request is POSTed as JSON; the service answers with a `ScrapeResponse` body.
/// Timeouts are enforced by the caller (`dispatch`), not by the client.
#[derive(Clone)]
pub struct HttpScrapePort {
    client: Client,
    endpoint: String,
}

impl HttpScrapePort {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ScrapePort for HttpScrapePort {
    async fn request(&self, request: ScrapeRequest) -> Result<ScrapeResponse, PortError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| PortError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Scraper returned {status}: {body}");
            return Err(PortError::Transport(format!("scraper returned {status}")));
        }

        response
            .json::<ScrapeResponse>()
            .await
            .map_err(|e| PortError::Transport(format!("invalid scraper response: {e}")))
    }
}
