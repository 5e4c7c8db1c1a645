//! # Raidlink
//!
//! Typed HTTP action client for turn-based RPG web backends.
//!
//! Every higher-level game operation — login, inventory changes, battles,
//! social actions — reaches the backend through one chokepoint: a
//! [`ServiceClient`] that composes the action URL under the configured
//! routing convention, places the login token, performs exactly one HTTP
//! exchange, and decodes the response into a typed result carrying a
//! uniform [`ErrorCode`](raidlink_protocol::ErrorCode).
//!
//! Calls never fail with transport errors: every invocation resolves to
//! exactly one result whose error code tells the caller what happened.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use raidlink::prelude::*;
//!
//! # async fn example() -> Result<(), raidlink::ClientError> {
//! let client = ServiceClient::builder("http://localhost/tbrpg-service")
//!     .routing(RoutingConfig::default())
//!     .build()?;
//!
//! let login = client.login("alice", "hunter2").await;
//! if login.success() {
//!     let items = client.get_item_list(&login.player.login_token).await;
//!     println!("{} items", items.items.len());
//! }
//! # Ok(())
//! # }
//! ```

mod actions;
mod client;
mod error;

pub use client::{ServiceClient, ServiceClientBuilder};
pub use error::ClientError;

/// Commonly used items, re-exported for one-line imports.
pub mod prelude {
    pub use crate::{ClientError, ServiceClient, ServiceClientBuilder};
    pub use raidlink_protocol::{
        BattleOutcome, ErrorCode, FormationType, ServiceResult,
    };
    pub use raidlink_routing::RoutingConfig;
    pub use raidlink_transport::{Method, RawOutcome};
}
