//! Action path composition.

use crate::RoutingConfig;

/// Query parameter key carrying the action name under query routing.
pub const ACTION_PARAM: &str = "action";

/// Builder for the request path of one action invocation.
///
/// The composed path always has exactly one of two shapes, picked by the
/// [`RoutingConfig`] — never a mix of both:
///
/// ```text
/// path routing:   /<action>[/<segment>...]
/// query routing:  /?action=<action>[&key=value...]
/// ```
///
/// Query parameters follow a single uniform rule regardless of whether
/// they carry the action name, an inline argument, or the login token:
/// the first parameter is introduced with `?`, every later one with `&`.
/// Segment and parameter values are percent-encoded; action names are
/// trusted literals and appended as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    path: String,
}

impl RoutePath {
    /// Starts a path for `action` under the given convention.
    pub fn new(action: &str, config: RoutingConfig) -> Self {
        let mut route = Self {
            path: String::from("/"),
        };
        if config.action_via_query {
            route.push_param(ACTION_PARAM, action);
        } else {
            route.path.push_str(action);
        }
        route
    }

    /// Appends an inline parameter as a path segment (`/<value>`).
    ///
    /// Used by path-routed actions that carry a trailing identifier.
    /// Query-routed actions pass their inline parameters through
    /// [`RoutePath::param`] instead.
    pub fn segment(mut self, value: &str) -> Self {
        self.path.push('/');
        self.path.push_str(&urlencoding::encode(value));
        self
    }

    /// Appends a query parameter, introducing it with `?` or `&`
    /// depending on whether a `?` is already present.
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.push_param(key, value);
        self
    }

    fn push_param(&mut self, key: &str, value: &str) {
        self.path
            .push(if self.path.contains('?') { '&' } else { '?' });
        self.path.push_str(key);
        self.path.push('=');
        self.path.push_str(&urlencoding::encode(value));
    }

    /// Returns the composed path, ready to append to a base URL.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Consumes the builder and returns the composed path.
    pub fn into_string(self) -> String {
        self.path
    }
}
