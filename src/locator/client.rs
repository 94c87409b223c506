//! HTTP client for the addressable-LED controller.
//!
//! Wraps `POST /json/state` using [`reqwest`]. A push either reaches the
//! controller with a success status or fails; there is no retry.

use super::LocatorState;
use tracing::{debug, instrument};

/// Errors from a single push to the lighting controller.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The controller returned a non-2xx status code.
    #[error("Lighting controller returned HTTP {0}")]
    HttpStatus(u16),
}

/// Sends complete [`LocatorState`]s to one lighting controller.
#[derive(Debug, Clone)]
pub struct LocatorClient {
    client: reqwest::Client,
    state_url: String,
}

impl LocatorClient {
    /// * `base_url` - Controller root, e.g. `http://10.0.0.114`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (shared pool,
    /// custom timeout).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            state_url: format!("{}/json/state", base_url.trim_end_matches('/')),
        }
    }

    pub fn state_url(&self) -> &str {
        &self.state_url
    }

    /// Push `state` to the controller, replacing what it currently shows.
    #[instrument(skip(self, state), fields(segments = state.seg.len(), standby = state.is_standby()))]
    pub async fn push(&self, state: &LocatorState) -> Result<(), LocatorError> {
        let response = self.client.post(&self.state_url).json(state).send().await?;
        if !response.status().is_success() {
            return Err(LocatorError::HttpStatus(response.status().as_u16()));
        }
        debug!("Locator state pushed");
        Ok(())
    }
}
