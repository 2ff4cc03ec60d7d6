//! The solve client.

use crate::{ClientError, ClientResult};
use cd_protocol::{HealthStatus, SolvePayload, SolveResult};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Production solver service.
pub const DEFAULT_BASE_URL: &str =
    "http://calcdynamics-api-env.eba-zku5kvfn.us-east-1.elasticbeanstalk.com";

/// Environment override for the base URL.
pub const ENV_BASE_URL: &str = "CALCDYN_API_URL";

/// Upper bound on one whole exchange (connect, send, solve, read).
pub const DEFAULT_SOLVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Message used when a failure status arrives without a readable error body.
const GENERIC_SOLVE_FAILURE: &str = "Failed to solve equation";

/// Failure body shape the solver uses for 4xx/5xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SolveClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl SolveClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            // The bound below covers the whole exchange; the underlying
            // client carries no timeout of its own.
            http: reqwest::Client::new(),
            base_url,
            timeout: DEFAULT_SOLVE_TIMEOUT,
        }
    }

    /// Base URL from `CALCDYN_API_URL`, falling back to the production
    /// service.
    pub fn from_env() -> Self {
        match std::env::var(ENV_BASE_URL) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one compiled request and await its result.
    ///
    /// The payload was captured by value at compile time, so nothing the
    /// caller does while this is in flight can alter the request. Dropping
    /// the returned future tears the exchange down.
    pub async fn solve(&self, payload: &SolvePayload) -> ClientResult<SolveResult> {
        let url = format!("{}{}", self.base_url, payload.endpoint());
        debug!(%url, "submitting solve request");
        match tokio::time::timeout(self.timeout, self.exchange(&url, payload)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClientError::Timeout {
                limit: self.timeout,
            }),
        }
    }

    async fn exchange(&self, url: &str, payload: &SolvePayload) -> ClientResult<SolveResult> {
        let response = self.http.post(url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| GENERIC_SOLVE_FAILURE.to_string());
            return Err(ClientError::Remote {
                status: status.as_u16(),
                message,
            });
        }
        let result = response.json::<SolveResult>().await?;
        debug!(
            times = result.t.as_ref().map_or(0, Vec::len),
            "solve response received"
        );
        Ok(result)
    }

    /// Probe `/api/health`. The service reports an unhealthy state with the
    /// same body shape under a 500, so the status line itself is not an
    /// error here.
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let url = format!("{}/api/health", self.base_url);
        let probe = async {
            let response = self.http.get(&url).send().await?;
            Ok(response.json::<HealthStatus>().await?)
        };
        match tokio::time::timeout(self.timeout, probe).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClientError::Timeout {
                limit: self.timeout,
            }),
        }
    }
}
