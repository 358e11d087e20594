use axum::http::{HeaderMap, Method};
use serde_json::Value;

/// Query string of an inbound `/proxy` call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProxyQuery {
    pub path: String,
}

impl ProxyQuery {
    /// Picks the first `path` parameter; later duplicates are ignored and a
    /// missing one means the empty path.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let path = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "path").then_some(value))
            .unwrap_or_default();

        Self { path }
    }
}

/// A request as it will be sent to the upstream.
#[derive(Debug, Clone)]
pub struct ForwardedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}
