use axum::http::{HeaderMap, HeaderName, HeaderValue, header::CONTENT_TYPE};

/// Headers that describe the inbound connection rather than the request, plus
/// the ones the outbound client computes itself.
fn is_connection_header(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "host"
            | "connection"
            | "content-length"
            | "transfer-encoding"
            | "keep-alive"
            | "proxy-connection"
            | "upgrade"
            | "te"
            | "trailer"
            | "accept-encoding"
    )
}

/// Builds the outbound header set from the inbound one.
///
/// Every inbound header survives, including repeated values, except the
/// connection-scoped ones. `Content-Type` is always `application/json`.
pub fn merge_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len() + 1);

    for (name, value) in inbound {
        if is_connection_header(name) {
            continue;
        }
        outbound.append(name.clone(), value.clone());
    }

    outbound.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    outbound
}
