//! Request inspection helpers shared by the filters.

use http::{header, HeaderMap, Request};

/// Hostname the request was addressed to.
///
/// Edge requests usually carry an absolute-form URI; origin-form requests
/// fall back to the `Host` header, with any port stripped.
pub fn hostname(req: &Request<()>) -> Option<&str> {
    if let Some(host) = req.uri().host() {
        return Some(host);
    }
    req.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(strip_port)
}

fn strip_port(host: &str) -> &str {
    if let Some(bracketed) = host.strip_prefix('[') {
        // [IPv6] or [IPv6]:port
        bracketed.split(']').next().unwrap_or(bracketed)
    } else {
        host.split(':').next().unwrap_or(host)
    }
}

/// Client IP as derived at the edge: the first comma-separated token of
/// `x-forwarded-for`, trimmed.
///
/// `None` means the IP cannot be derived; IP-based policy must not be
/// applied in that case.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded_for = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first = forwarded_for.split(',').next().unwrap_or("").trim();
    if first.is_empty() {
        return None;
    }
    Some(first.to_string())
}
