//! RSC header removal for affected routes.
//!
//! Some CDN caches key RSC payloads and full HTML documents to the same
//! entry. Stripping the `rsc` header on affected paths forces the framework
//! to serve the document render instead of the flight payload.

use http::Request;

use crate::outcome::FilterOutcome;

const RSC_HEADER: &str = "rsc";
const RSC_HEADER_VALUE: &str = "1";
const RSC_QUERY_PARAM: &str = "_rsc";

/// Options for [`strip_rsc_header`].
#[derive(Debug, Clone, Default)]
pub struct RscOptions {
    /// Paths the workaround applies to, matched exactly.
    pub affected_paths: Vec<String>,
}

/// Strip the `rsc` header from requests to affected paths.
///
/// Applies only when the path is listed, the `rsc: 1` header is present,
/// and the `_rsc` query parameter is absent (or empty). The rewritten
/// request is forwarded upstream in place of the original.
pub fn strip_rsc_header(req: &Request<()>, options: &RscOptions) -> FilterOutcome {
    let path = req.uri().path();
    if !options.affected_paths.iter().any(|p| p == path) {
        return FilterOutcome::Forward;
    }

    let header_set = req
        .headers()
        .get(RSC_HEADER)
        .and_then(|value| value.to_str().ok())
        == Some(RSC_HEADER_VALUE);
    if !header_set {
        return FilterOutcome::Forward;
    }

    if has_rsc_query_param(req.uri().query()) {
        return FilterOutcome::Forward;
    }

    let mut rewritten = Request::new(());
    *rewritten.method_mut() = req.method().clone();
    *rewritten.uri_mut() = req.uri().clone();
    *rewritten.version_mut() = req.version();
    for (name, value) in req.headers() {
        if name != RSC_HEADER {
            rewritten.headers_mut().append(name.clone(), value.clone());
        }
    }

    FilterOutcome::Rewrite(rewritten)
}

fn has_rsc_query_param(query: Option<&str>) -> bool {
    let Some(query) = query else {
        return false;
    };
    query.split('&').any(|pair| {
        let mut parts = pair.splitn(2, '=');
        parts.next() == Some(RSC_QUERY_PARAM) && parts.next().is_some_and(|v| !v.is_empty())
    })
}
