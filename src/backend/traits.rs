//! Trait abstraction for the submission backend to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// A submission captured from the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    /// Endpoint URL, the form's configured action
    pub action: String,
    /// HTTP method, HTML-attribute style (e.g. "post")
    pub method: String,
    /// Ordered (wire name, value) pairs
    pub entries: Vec<(String, String)>,
}

/// A resolved response to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// HTTP status code; the form treats exactly 200 as success
    pub status: u16,
}

/// Submission failure before or below the HTTP response
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The configured endpoint or method cannot form a request
    #[error("invalid form endpoint: {0}")]
    Config(String),
    /// The request never resolved to a response
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Trait for submission backends, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormBackend: Send + Sync {
    /// Send one captured form to the endpoint and report the response status
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitReceipt, SubmitError>;
}
