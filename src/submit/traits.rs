//! Trait abstraction for the submission transport to enable mocking in tests

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SubmitError;
use crate::state::FormRecord;

/// Body the submission endpoint answers with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Delivers a record to the backend. Implementations make exactly one
/// request per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Send the record and decode the endpoint's answer
    async fn send(&self, record: &FormRecord) -> Result<SubmitResponse, SubmitError>;
}
