//! Scrape Port — asynchronous request/response channel to an external page scraper.
//!
//! Every request carries a fresh id that the response must echo back. A call that does not
//! answer within the timeout, answers for a different request, or answers without data is a
//! failure, never a silently empty record.
//!
//! `AppState` holds an `Option<Arc<dyn ScrapePort>>`; `None` disables the scrape routes.

pub mod http;

pub use http::HttpScrapePort;

use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrapeKind {
    #[serde(rename = "SCRAPE_PROFILE")]
    Profile,
    #[serde(rename = "SCRAPE_JOB")]
    Job,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub request_id: Uuid,
    #[serde(rename = "type")]
    pub kind: ScrapeKind,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub request_id: Uuid,
    pub ok: bool,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Error)]
pub enum PortError {
    #[error("scraper did not answer within {0:?}")]
    Timeout(Duration),

    #[error("scraper returned no data for request {0}")]
    NoResponse(Uuid),

    #[error("scraper answered request {got} while {expected} was pending")]
    Uncorrelated { expected: Uuid, got: Uuid },

    #[error("scraper data did not decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("scraper transport failed: {0}")]
    Transport(String),
}

impl PortError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PortError::Timeout(_) | PortError::NoResponse(_) | PortError::Transport(_)
        )
    }
}

#[async_trait]
pub trait ScrapePort: Send + Sync {
    async fn request(&self, request: ScrapeRequest) -> Result<ScrapeResponse, PortError>;
}

/// Sends one correlated request and decodes the answer into a typed record.
pub async fn dispatch<T: DeserializeOwned>(
    port: &dyn ScrapePort,
    kind: ScrapeKind,
    url: &str,
    timeout: Duration,
) -> Result<T, PortError> {
    let request_id = Uuid::new_v4();
    let request = ScrapeRequest {
        request_id,
        kind,
        url: url.to_string(),
    };

    debug!("Dispatching {kind:?} request {request_id} for {url}");

    let response = tokio::time::timeout(timeout, port.request(request))
        .await
        .map_err(|_| PortError::Timeout(timeout))??;

    if response.request_id != request_id {
        return Err(PortError::Uncorrelated {
            expected: request_id,
            got: response.request_id,
        });
    }

    match response.data {
        Some(data) if response.ok && !data.is_null() => Ok(serde_json::from_value(data)?),
        _ => Err(PortError::NoResponse(request_id)),
    }
}

/// Wait before the first retry; doubled for each further one.
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

/// [`dispatch`] with up to `max_attempts` tries on retryable failures.
pub async fn dispatch_with_retry<T: DeserializeOwned>(
    port: &dyn ScrapePort,
    kind: ScrapeKind,
    url: &str,
    timeout: Duration,
    max_attempts: u32,
) -> Result<T, PortError> {
    let max_attempts = max_attempts.max(1);
    let mut attempt: u32 = 1;
    loop {
        match dispatch(port, kind, url, timeout).await {
            Ok(record) => return Ok(record),
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                // Exponential backoff: 1s, 2s, 4s
                let delay = RETRY_BASE_DELAY * (1u32 << (attempt - 1).min(5));
                warn!(
                    "Scrape attempt {attempt}/{max_attempts} for {url} failed: {e}, retrying after {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobPosting;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Answers with a fixed outcome after an optional delay.
    struct FakePort {
        delay: Duration,
        ok: bool,
        data: Option<Value>,
        echo_id: bool,
        fail_first: u32,
        calls: AtomicU32,
    }

    impl FakePort {
        fn answering(data: Value) -> Self {
            Self {
                delay: Duration::ZERO,
                ok: true,
                data: Some(data),
                echo_id: true,
                fail_first: 0,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl ScrapePort for FakePort {
        async fn request(&self, request: ScrapeRequest) -> Result<ScrapeResponse, PortError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if call < self.fail_first {
                return Err(PortError::Transport("connection reset".to_string()));
            }
            Ok(ScrapeResponse {
                request_id: if self.echo_id {
                    request.request_id
                } else {
                    Uuid::new_v4()
                },
                ok: self.ok,
                data: self.data.clone(),
            })
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_dispatch_decodes_correlated_response() {
        let port = FakePort::answering(json!({"title": "ME", "company": "Acme", "desc": "cad"}));
        let job: JobPosting = dispatch(&port, ScrapeKind::Job, "https://x", TIMEOUT)
            .await
            .unwrap();
        assert_eq!(job.title, "ME");
        assert_eq!(job.company, "Acme");
    }

    #[tokio::test]
    async fn test_not_ok_is_no_response() {
        let port = FakePort {
            ok: false,
            ..FakePort::answering(json!({}))
        };
        let result: Result<JobPosting, _> =
            dispatch(&port, ScrapeKind::Job, "https://x", TIMEOUT).await;
        assert!(matches!(result, Err(PortError::NoResponse(_))));
    }

    #[tokio::test]
    async fn test_missing_data_is_no_response() {
        let port = FakePort {
            data: None,
            ..FakePort::answering(json!({}))
        };
        let result: Result<JobPosting, _> =
            dispatch(&port, ScrapeKind::Job, "https://x", TIMEOUT).await;
        assert!(matches!(result, Err(PortError::NoResponse(_))));
    }

    #[tokio::test]
    async fn test_mismatched_request_id_is_rejected() {
        let port = FakePort {
            echo_id: false,
            ..FakePort::answering(json!({"title": "ME"}))
        };
        let result: Result<JobPosting, _> =
            dispatch(&port, ScrapeKind::Job, "https://x", TIMEOUT).await;
        assert!(matches!(result, Err(PortError::Uncorrelated { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_port_times_out() {
        let port = FakePort {
            delay: Duration::from_secs(60),
            ..FakePort::answering(json!({"title": "ME"}))
        };
        let result: Result<JobPosting, _> =
            dispatch(&port, ScrapeKind::Job, "https://x", Duration::from_secs(1)).await;
        assert!(matches!(result, Err(PortError::Timeout(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_recovers_from_transient_failures() {
        let port = FakePort {
            fail_first: 2,
            ..FakePort::answering(json!({"title": "ME"}))
        };
        let started = tokio::time::Instant::now();
        let job: JobPosting =
            dispatch_with_retry(&port, ScrapeKind::Job, "https://x", TIMEOUT, 3)
                .await
                .unwrap();
        assert_eq!(job.title, "ME");
        assert_eq!(port.calls.load(Ordering::SeqCst), 3);
        // 1s before the second attempt, 2s before the third
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_gives_up_after_max_attempts() {
        let port = FakePort {
            fail_first: 10,
            ..FakePort::answering(json!({"title": "ME"}))
        };
        let result: Result<JobPosting, _> =
            dispatch_with_retry(&port, ScrapeKind::Job, "https://x", TIMEOUT, 2).await;
        assert!(matches!(result, Err(PortError::Transport(_))));
        assert_eq!(port.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_uncorrelated_is_not_retried() {
        let port = FakePort {
            echo_id: false,
            ..FakePort::answering(json!({"title": "ME"}))
        };
        let result: Result<JobPosting, _> =
            dispatch_with_retry(&port, ScrapeKind::Job, "https://x", TIMEOUT, 3).await;
        assert!(result.is_err());
        assert_eq!(port.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_request_wire_shape() {
        let request = ScrapeRequest {
            request_id: Uuid::nil(),
            kind: ScrapeKind::Profile,
            url: "https://www.linkedin.com/in/jane".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "SCRAPE_PROFILE");
        assert_eq!(json["url"], "https://www.linkedin.com/in/jane");
    }
}
