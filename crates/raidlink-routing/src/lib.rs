//! Routing layer for Raidlink.
//!
//! This crate decides how an action invocation turns into a request path:
//!
//! - **Conventions** ([`RoutingConfig`]) — whether the action name travels
//!   as a path segment or a query parameter, and whether the login token
//!   travels as a query parameter or a bearer header.
//! - **Composition** ([`RoutePath`]) — the builder that assembles the path
//!   under the selected convention, with a single `?` and percent-encoded
//!   parameter values.
//! - **Placement** ([`CredentialPlacement`]) — where a login token ended up
//!   for one request. A non-empty token lands in exactly one place.
//!
//! # Architecture
//!
//! Routing sits below the transport: it produces strings, never touches the
//! network, and holds no mutable state.
//!
//! ```text
//! Facade (action + token) → Routing (path + header) → Transport (exchange)
//! ```

mod config;
mod credential;
mod route;

pub use config::RoutingConfig;
pub use credential::{CredentialPlacement, TOKEN_PARAM};
pub use route::{RoutePath, ACTION_PARAM};
