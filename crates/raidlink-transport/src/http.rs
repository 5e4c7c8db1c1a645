//! reqwest-backed [`Invoker`] implementation.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::{Invoker, Method, RawOutcome, TransportError};

/// An [`Invoker`] backed by a pooled `reqwest::Client`.
///
/// Every request carries `Accept: application/json` and
/// `Content-Type: application/json` unconditionally; the `Authorization`
/// header is merged in per call when the routing layer placed the token
/// there.
///
/// Cloning is cheap — clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpInvoker {
    client: reqwest::Client,
}

impl HttpInvoker {
    /// Builds an invoker with no request timeout. Requests run until the
    /// exchange completes or fails.
    pub fn new() -> Result<Self, TransportError> {
        Self::build(None)
    }

    /// Builds an invoker whose exchanges fail (as a connection failure)
    /// after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::Build)?;
        Ok(Self { client })
    }
}

impl Invoker for HttpInvoker {
    async fn send(
        &self,
        method: Method,
        url: &str,
        auth_header: Option<&str>,
        body: Option<String>,
    ) -> RawOutcome {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self
                .client
                .post(url)
                .body(body.unwrap_or_else(|| "{}".to_string())),
        };
        if let Some(value) = auth_header {
            request = request.header(AUTHORIZATION, value);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%method, url, error = %e, "exchange failed");
                return RawOutcome::Connection {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                // Status arrived but the body didn't: the exchange did
                // not complete.
                tracing::error!(%method, url, error = %e, "reading response body failed");
                return RawOutcome::Connection {
                    message: e.to_string(),
                };
            }
        };

        if status.is_client_error() || status.is_server_error() {
            tracing::error!(
                %method,
                url,
                status = status.as_u16(),
                body = %body,
                "server answered with an error status"
            );
            RawOutcome::Protocol {
                status: status.as_u16(),
                body,
            }
        } else {
            tracing::debug!(
                %method,
                url,
                status = status.as_u16(),
                body = %body,
                "exchange completed"
            );
            RawOutcome::Success {
                status: status.as_u16(),
                body,
            }
        }
    }
}
