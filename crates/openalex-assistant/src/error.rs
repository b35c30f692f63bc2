//! Error types for the research assistant.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Service failures are typed so they can never be confused
//! with model output downstream.

/// Errors from the HTTP client layer (completion and OpenAlex calls).
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Completion credential not configured; produced before any network I/O.
    #[error("completion API key is not configured")]
    MissingApiKey,

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// 2xx response whose body does not carry the expected content.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// What was missing or wrong.
        message: String,
    },

    /// Invalid request parameters (400 response).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the API.
        message: String,
    },

    /// Server error (5xx response).
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Unexpected HTTP status.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body or message.
        message: String,
    },
}

impl ClientError {
    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse { message: message.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true when the failure is the absent completion credential.
    #[must_use]
    pub const fn is_missing_api_key(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

/// Errors from pipeline execution.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Input validation failed; detected before any outbound call.
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message.
        message: String,
    },

    /// Error from a service-boundary client.
    #[error("Upstream error: {0}")]
    Client(#[from] ClientError),
}

impl PipelineError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Returns true for failures of an upstream collaborator.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
