//! OpenSky API client.
//!
//! [`FlightDataSource`] is the seam between the tools and the network: tools
//! only ever see an [`UpstreamResult`], so every transport failure has already
//! been classified by the time a renderer runs.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use super::error::{UpstreamError, UpstreamResult};
use crate::core::config::UpstreamConfig;

/// Total request timeout applied to every upstream call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Query string parameters, in the order they are sent.
pub type QueryParams = Vec<(&'static str, String)>;

/// OpenSky REST endpoints used by the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/states/all` - current state vectors.
    StatesAll,
    /// `/flights/arrival` - flights that arrived at an airport.
    FlightsArrival,
    /// `/flights/departure` - flights that departed from an airport.
    FlightsDeparture,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::StatesAll => "/states/all",
            Self::FlightsArrival => "/flights/arrival",
            Self::FlightsDeparture => "/flights/departure",
        }
    }
}

/// Abstraction over the flight-data API.
///
/// Implementations must never panic or return transport errors by other
/// means: one call, one [`UpstreamResult`].
#[async_trait]
pub trait FlightDataSource: Send + Sync {
    /// Issue a single GET request against `endpoint`.
    async fn fetch(&self, endpoint: Endpoint, params: &QueryParams) -> UpstreamResult;
}

/// Real [`FlightDataSource`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct OpenSkyClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenSkyClient {
    /// Create a client for the configured base URL with the fixed timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        Self::with_timeout(&config.base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UpstreamError::unexpected(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl FlightDataSource for OpenSkyClient {
    #[instrument(skip(self), fields(endpoint = endpoint.path()))]
    async fn fetch(&self, endpoint: Endpoint, params: &QueryParams) -> UpstreamResult {
        let url = self.url(endpoint);
        debug!(url = %url, ?params, "OpenSky request starting");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| classify(&url, e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(url = %url, status = status.as_u16(), "OpenSky returned error status");
            return Err(UpstreamError::http(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let body = response.text().await.map_err(|e| classify(&url, e))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(url = %url, error = %e, "OpenSky returned invalid JSON");
            UpstreamError::parse(e.to_string())
        })
    }
}

/// Map a reqwest failure onto the upstream taxonomy.
fn classify(url: &str, e: reqwest::Error) -> UpstreamError {
    warn!(
        url = url,
        error = %e,
        is_timeout = e.is_timeout(),
        is_connect = e.is_connect(),
        "OpenSky request failed"
    );

    if e.is_timeout() {
        UpstreamError::Timeout
    } else if e.is_connect() || e.is_request() || e.is_body() || e.is_redirect() {
        UpstreamError::network(e.to_string())
    } else {
        UpstreamError::unexpected(e.to_string())
    }
}

// ── Stub source for testing ──────────────────────────────────────────────
