//! HTTP clients for the two external collaborators.
//!
//! One reqwest client per service, both built from the same [`Config`] with
//! explicit request and connect timeouts. No retries, no caching: every call
//! is a single attempt whose failure surfaces as a typed [`ClientError`].
//!
//! [`Config`]: crate::config::Config
//! [`ClientError`]: crate::error::ClientError

mod completion;
mod openalex;

pub use completion::CompletionClient;
pub use openalex::OpenAlexClient;

use crate::error::{ClientError, ClientResult};

/// Map non-success status codes onto the error taxonomy.
pub(crate) async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    match status.as_u16() {
        400 => Err(ClientError::bad_request(text)),
        500..=599 => Err(ClientError::server(status.as_u16(), text)),
        _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
    }
}
