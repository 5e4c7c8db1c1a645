//! Mapping raw transport outcomes into typed results.

use raidlink_transport::RawOutcome;

use crate::{ErrorCode, ServiceResult};

/// Decodes one [`RawOutcome`] into the statically chosen result type.
///
/// Failures never escape this function as errors — callers always get a
/// result instance:
///
/// - `Connection` → zero-value `R` with [`ErrorCode::Network`].
/// - `Protocol` → zero-value `R` with [`ErrorCode::UnknownServer`].
/// - `Success` → the body parsed as `R`; a body that doesn't parse
///   yields a zero-value `R` with [`ErrorCode::DecodeError`].
///
/// Domain failures are indistinguishable from successes here: they are
/// well-formed bodies whose own `errorCode` field is set, and they pass
/// straight through the parse.
pub fn decode_outcome<R: ServiceResult>(outcome: &RawOutcome) -> R {
    match outcome {
        RawOutcome::Connection { message } => {
            tracing::debug!(
                message = %message,
                "connection failure decoded as NETWORK"
            );
            R::from_error(ErrorCode::Network)
        }
        RawOutcome::Protocol { status, .. } => {
            tracing::debug!(
                status = *status,
                "protocol failure decoded as UNKNOWN_SERVER"
            );
            R::from_error(ErrorCode::UnknownServer)
        }
        RawOutcome::Success { body, .. } => {
            match serde_json::from_str(body) {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        body = %body,
                        "success body failed to parse as the expected shape"
                    );
                    R::from_error(ErrorCode::DecodeError)
                }
            }
        }
    }
}
