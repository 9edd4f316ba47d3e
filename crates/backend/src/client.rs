//! HTTP client for the search backend
//!
//! The [`SearchBackend`] trait is the seam between the evaluation driver and
//! the transport: production runs go through [`HttpBackend`], tests drive the
//! evaluation loop against in-memory stubs.

use crate::request::SearchRequest;
use async_trait::async_trait;
use rankeval_core::{Error, Result};
use tracing::debug;

/// Dispatches a retrieval request and returns the raw JSON response body
///
/// The body is returned undeserialized so the caller can log it verbatim
/// before normalization.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<serde_json::Value>;
}

/// reqwest-based backend client posting to a fixed search endpoint
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(&self, request: &SearchRequest) -> Result<serde_json::Value> {
        debug!(endpoint = %self.endpoint, query = %request.query, "dispatching search request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::backend(body));
        }

        response
            .json()
            .await
            .map_err(|e| Error::backend(format!("malformed response body: {e}")))
    }
}
