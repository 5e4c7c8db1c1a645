//! Transport layer for Raidlink.
//!
//! Provides the [`Invoker`] trait that abstracts a single HTTP
//! request/response exchange, plus the reqwest-backed [`HttpInvoker`].
//!
//! The transport never interprets response bodies. Its whole job is to
//! perform exactly one network attempt and classify what happened into a
//! [`RawOutcome`]:
//!
//! ```text
//! exchange completed, non-error status → Success   (body preserved)
//! exchange completed, 4xx/5xx status   → Protocol  (body preserved)
//! exchange never completed             → Connection (DNS, TCP, TLS, ...)
//! ```
//!
//! Whether the body is meaningful JSON is the decoder's problem, one
//! layer up.

#![allow(async_fn_in_trait)]

mod error;
mod http;

pub use error::TransportError;
pub use http::HttpInvoker;

use std::fmt;

/// HTTP method for an action. Raidlink backends speak GET and POST only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// No request body.
    Get,
    /// UTF-8 JSON request body.
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// The three-way classification of one completed network attempt.
///
/// Exactly one `RawOutcome` is produced per request, whatever happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOutcome {
    /// The exchange completed with a non-error status. `body` is the
    /// response text as received — it may still fail to parse as the
    /// expected result shape.
    Success { status: u16, body: String },

    /// The exchange completed but the server answered 4xx/5xx.
    Protocol { status: u16, body: String },

    /// The exchange never completed: DNS resolution, TCP connect, TLS
    /// handshake, or reading the response failed.
    Connection { message: String },
}

impl RawOutcome {
    /// Returns `true` for [`RawOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the response body, if the exchange completed.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Success { body, .. } | Self::Protocol { body, .. } => {
                Some(body.as_str())
            }
            Self::Connection { .. } => None,
        }
    }
}

/// Issues a single request/response exchange.
///
/// Implementations make exactly one network attempt per call — no retries,
/// no queueing, no cancellation surface. Timeout policy, if any, is fixed
/// at construction time.
pub trait Invoker: Send + Sync + 'static {
    /// Sends one request and classifies the outcome.
    ///
    /// `auth_header`, when present, is the full `Authorization` value
    /// (e.g. `Bearer <token>`). `body` is only sent for POST; GET
    /// requests carry no body.
    async fn send(
        &self,
        method: Method,
        url: &str,
        auth_header: Option<&str>,
        body: Option<String>,
    ) -> RawOutcome;
}
