//! Login-token placement.
//!
//! Raidlink never stores or refreshes tokens itself — the token is an
//! opaque string issued by the backend and handed in per call. This module
//! only decides where it travels: as a bearer header or as a query
//! parameter, per the [`RoutingConfig`].

use crate::{RoutePath, RoutingConfig};

/// Query parameter key carrying the login token under query placement.
pub const TOKEN_PARAM: &str = "logintoken";

/// Where the login token ended up for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialPlacement {
    /// No token was supplied; the request goes out unauthenticated.
    Absent,

    /// The token rides in the path as a `logintoken` query parameter.
    Query,

    /// The token goes into an `Authorization` header with this value
    /// (`Bearer <token>`).
    Header(String),
}

impl CredentialPlacement {
    /// Attaches `token` to `route` according to the configuration.
    ///
    /// A non-empty token is placed in exactly one location — query
    /// parameter or bearer header, never both. An empty token attaches
    /// nothing, which is how unauthenticated actions (login, register,
    /// service-time) go out.
    pub fn attach(
        route: RoutePath,
        token: &str,
        config: RoutingConfig,
    ) -> (RoutePath, Self) {
        if token.is_empty() {
            return (route, Self::Absent);
        }
        if config.token_via_query {
            (route.param(TOKEN_PARAM, token), Self::Query)
        } else {
            (route, Self::Header(format!("Bearer {token}")))
        }
    }

    /// Returns the `Authorization` header value, if the token was placed
    /// in a header.
    pub fn header_value(&self) -> Option<&str> {
        match self {
            Self::Header(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_token() -> RoutingConfig {
        RoutingConfig {
            token_via_query: true,
            ..RoutingConfig::default()
        }
    }

    #[test]
    fn test_empty_token_attaches_nothing() {
        let route = RoutePath::new("items", RoutingConfig::default());
        let (route, placement) =
            CredentialPlacement::attach(route, "", RoutingConfig::default());
        assert_eq!(placement, CredentialPlacement::Absent);
        assert_eq!(placement.header_value(), None);
        assert_eq!(route.as_str(), "/items");
    }

    #[test]
    fn test_header_placement_is_bearer() {
        let route = RoutePath::new("items", RoutingConfig::default());
        let (route, placement) = CredentialPlacement::attach(
            route,
            "tok123",
            RoutingConfig::default(),
        );
        assert_eq!(placement.header_value(), Some("Bearer tok123"));
        // The path must stay untouched when the token goes into a header.
        assert_eq!(route.as_str(), "/items");
    }

    #[test]
    fn test_query_placement_appends_logintoken() {
        let route = RoutePath::new("items", query_token());
        let (route, placement) =
            CredentialPlacement::attach(route, "tok123", query_token());
        assert_eq!(placement, CredentialPlacement::Query);
        assert_eq!(placement.header_value(), None);
        assert_eq!(route.as_str(), "/items?logintoken=tok123");
    }

    #[test]
    fn test_query_placement_uses_ampersand_after_existing_params() {
        let config = RoutingConfig {
            action_via_query: true,
            token_via_query: true,
        };
        let route = RoutePath::new("items", config);
        let (route, _) =
            CredentialPlacement::attach(route, "tok123", config);
        assert_eq!(route.as_str(), "/?action=items&logintoken=tok123");
    }

    #[test]
    fn test_non_empty_token_lands_in_exactly_one_place() {
        for config in [RoutingConfig::default(), query_token()] {
            let route = RoutePath::new("items", config);
            let (route, placement) =
                CredentialPlacement::attach(route, "tok123", config);
            let in_query = route.as_str().contains("logintoken=");
            let in_header = placement.header_value().is_some();
            assert!(in_query != in_header);
        }
    }

    #[test]
    fn test_token_value_is_percent_encoded_in_query() {
        let route = RoutePath::new("items", query_token());
        let (route, _) =
            CredentialPlacement::attach(route, "a+b/c", query_token());
        assert_eq!(route.as_str(), "/items?logintoken=a%2Bb%2Fc");
    }
}
