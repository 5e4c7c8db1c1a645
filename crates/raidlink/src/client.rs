//! `ServiceClient` builder and the shared invocation pipeline.
//!
//! This is the chokepoint every action method funnels through. It ties
//! together the layers: routing (path + token placement) → transport
//! (one exchange) → protocol (typed decode).

use std::time::Duration;

use raidlink_protocol::{decode_outcome, ServiceResult};
use raidlink_routing::{CredentialPlacement, RoutePath, RoutingConfig};
use raidlink_transport::{HttpInvoker, Invoker, Method, RawOutcome};
use serde_json::Value;

use crate::ClientError;

/// Builder for configuring a [`ServiceClient`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use raidlink::prelude::*;
///
/// # fn example() -> Result<(), ClientError> {
/// let client = ServiceClient::builder("http://localhost/tbrpg-service")
///     .routing(RoutingConfig {
///         action_via_query: true,
///         token_via_query: false,
///     })
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ServiceClientBuilder {
    base_url: String,
    routing: RoutingConfig,
    timeout: Option<Duration>,
}

impl ServiceClientBuilder {
    /// Creates a builder targeting `base_url` with default conventions
    /// (path-routed actions, header-placed token) and no timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            routing: RoutingConfig::default(),
            timeout: None,
        }
    }

    /// Sets the routing conventions. Fixed for the client's lifetime —
    /// there is no way to change conventions on a built client.
    pub fn routing(mut self, routing: RoutingConfig) -> Self {
        self.routing = routing;
        self
    }

    /// Sets a per-request timeout. Without one, requests run until the
    /// exchange completes or fails.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<ServiceClient, ClientError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(ClientError::InvalidBaseUrl(self.base_url));
        }

        let invoker = match self.timeout {
            Some(timeout) => HttpInvoker::with_timeout(timeout)?,
            None => HttpInvoker::new()?,
        };

        Ok(ServiceClient {
            base_url,
            routing: self.routing,
            invoker,
        })
    }
}

/// The action client.
///
/// Holds the base URL, the immutable routing conventions, and the pooled
/// HTTP invoker. Cheap to clone; clones share the connection pool. Safe
/// to call from many tasks concurrently — calls share no mutable state.
#[derive(Clone)]
pub struct ServiceClient {
    base_url: String,
    routing: RoutingConfig,
    invoker: HttpInvoker,
}

impl ServiceClient {
    /// Starts building a client targeting `base_url`.
    pub fn builder(base_url: impl Into<String>) -> ServiceClientBuilder {
        ServiceClientBuilder::new(base_url)
    }

    /// The routing conventions this client was built with.
    pub fn routing(&self) -> RoutingConfig {
        self.routing
    }

    /// The normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The shared pipeline: compose the path, place the token, perform
    /// one exchange, decode into `R`.
    ///
    /// Always resolves to exactly one `R` — transport and protocol
    /// failures come back as error-coded zero-value results.
    pub async fn invoke<R: ServiceResult>(
        &self,
        action: &str,
        method: Method,
        payload: Value,
        token: &str,
    ) -> R {
        let outcome = self.exchange(action, method, payload, token).await;
        decode_outcome(&outcome)
    }

    /// Untyped GET passthrough for callers that need the raw response.
    pub async fn get_raw(&self, action: &str, token: &str) -> RawOutcome {
        self.exchange(action, Method::Get, Value::Null, token).await
    }

    /// Untyped POST passthrough for callers that need the raw response.
    pub async fn post_raw(
        &self,
        action: &str,
        payload: Value,
        token: &str,
    ) -> RawOutcome {
        self.exchange(action, Method::Post, payload, token).await
    }

    async fn exchange(
        &self,
        action: &str,
        method: Method,
        payload: Value,
        token: &str,
    ) -> RawOutcome {
        let route = RoutePath::new(action, self.routing);
        let (route, credential) =
            CredentialPlacement::attach(route, token, self.routing);
        let url = format!("{}{}", self.base_url, route.as_str());

        let body = match method {
            Method::Post => Some(payload.to_string()),
            Method::Get => None,
        };
        tracing::debug!(action, %method, url = %url, "invoking action");

        self.invoker
            .send(method, &url, credential.header_value(), body)
            .await
    }

    /// GET helper for typed listing actions.
    pub(crate) async fn get_decoded<R: ServiceResult>(
        &self,
        action: &str,
        token: &str,
    ) -> R {
        self.invoke(action, Method::Get, Value::Null, token).await
    }

    /// POST helper for typed mutating actions.
    pub(crate) async fn post_decoded<R: ServiceResult>(
        &self,
        action: &str,
        payload: Value,
        token: &str,
    ) -> R {
        self.invoke(action, Method::Post, payload, token).await
    }
}
