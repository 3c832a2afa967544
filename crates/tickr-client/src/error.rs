//! Client error types.

/// Errors that can occur when using the tickr client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status.
    ///
    /// The body is the raw response text, verbatim; the service's error
    /// payloads are not parsed into anything structured.
    #[error("tickr API error: {status} {status_text} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical status text (e.g. "Not Found").
        status_text: String,
        /// Raw response body text.
        body: String,
    },

    /// A request was rejected locally, before anything was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
