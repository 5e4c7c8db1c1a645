//! Routing conventions.

use serde::{Deserialize, Serialize};

/// How action names and login tokens are encoded into a request.
///
/// Different backend deployments expose the same actions under different
/// URL shapes: a rewrite-enabled server routes `/login` directly, while a
/// single-entrypoint server wants `/?action=login`. Likewise some
/// deployments read the token from an `Authorization` header, others from
/// a `logintoken` query parameter.
///
/// The configuration is captured once when the client is built and shared
/// read-only by every request. There is deliberately no way to flip a
/// convention mid-session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Encode the action name as a query parameter (`/?action=login`)
    /// instead of a path segment (`/login`).
    pub action_via_query: bool,

    /// Send the login token as a `logintoken` query parameter instead of
    /// an `Authorization: Bearer` header.
    pub token_via_query: bool,
}
