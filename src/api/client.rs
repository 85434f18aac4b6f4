//! HTTP client for the registration endpoint
//!
//! Issues exactly one JSON POST per submission. There is no retry and no
//! timeout: the request runs until the server answers or the transport fails.

use super::traits::RegistrationApi;
use crate::state::RegistrationPayload;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// The registration endpoint. Not configurable.
pub const REGISTER_ENDPOINT: &str = "https://backend.viveak910.workers.dev/register";

/// Why a registration request did not succeed
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The server answered with a non-2xx status
    #[error("registration rejected with status {0}")]
    Rejected(StatusCode),
    /// The request could not be encoded, sent, or answered
    #[error("registration request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The task running the request ended without producing a result
    #[error("registration task aborted: {0}")]
    Aborted(String),
}

/// Client for the registration endpoint
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Create a client for the fixed registration endpoint
    pub fn new() -> Self {
        Self::with_endpoint(REGISTER_ENDPOINT)
    }

    fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for RegistrationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegisterError> {
        tracing::info!(endpoint = %self.endpoint, "posting registration");
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, "registration accepted");
            Ok(())
        } else {
            tracing::warn!(%status, "registration rejected");
            Err(RegisterError::Rejected(status))
        }
    }
}
