//! Error types for the Lambda Cloud client.

use thiserror::Error;

/// Errors that can occur when talking to the Lambda Cloud API.
///
/// The variants keep two failure classes apart: [`Api`](LambdaCloudError::Api)
/// means the remote received the request and rejected it, while
/// [`Http`](LambdaCloudError::Http) means the request never completed at the
/// transport level (DNS failure, refused connection, timeout).
#[derive(Error, Debug)]
pub enum LambdaCloudError {
    /// The API answered with a failure status (>= 400).
    ///
    /// `code` and `message` are taken from the provider's failure envelope
    /// `{"code": ..., "message": ...}`; each field is optional and stays
    /// `None` when the envelope does not carry it.
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Provider-assigned error code, e.g. `invalid-api-key`.
        code: Option<String>,
        /// Human-readable error message.
        message: Option<String>,
    },

    /// The HTTP exchange itself failed; the request may never have reached
    /// the remote.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LambdaCloudError>;
