//! HTTP transport for the submission endpoint
//!
//! POSTs the record as JSON and decodes the `{ success, message }` answer.

use std::time::Duration;

use async_trait::async_trait;

use super::traits::{SubmitResponse, SubmitTransport};
use crate::error::SubmitError;
use crate::state::FormRecord;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/demo/submit";

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for `endpoint`. Without a timeout the request
    /// waits as long as the connection stays open, so hosts should pass one.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SubmitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SubmitError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn send(&self, record: &FormRecord) -> Result<SubmitResponse, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(SubmitError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(SubmitError::Network)?;
        serde_json::from_str(&body).map_err(|e| SubmitError::Malformed(e.to_string()))
    }
}
