//! Unified error type for the Raidlink client.

use raidlink_transport::TransportError;

/// Errors that can occur while *building* a client.
///
/// Once a client exists, action calls are infallible by design: transport
/// and protocol failures are absorbed into the typed result's error code
/// rather than surfaced as `Err` values.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Constructing the HTTP transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The base URL is not usable (empty, or missing a scheme).
    #[error("invalid base url: {0:?}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_message_names_the_url() {
        let err = ClientError::InvalidBaseUrl("ftp://svc".into());
        assert!(err.to_string().contains("ftp://svc"));
    }
}
