//! Error types for the transport layer.
//!
//! Note the asymmetry: *constructing* an invoker can fail with a
//! [`TransportError`], but *sending* never does — every network failure is
//! absorbed into a [`RawOutcome`](crate::RawOutcome) variant instead, so
//! callers always receive exactly one classified outcome per request.

/// Errors that can occur while constructing the transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Building the underlying HTTP client failed (TLS backend
    /// initialization, invalid client configuration).
    #[error("http client build failed: {0}")]
    Build(#[source] reqwest::Error),
}
