//! Exact path redirects.

use http::{header, HeaderValue, Method, Request, StatusCode, Uri};

use crate::outcome::{text_response, FilterOutcome};

/// Status used when the redirect rule carries none.
pub const DEFAULT_REDIRECT_STATUS: StatusCode = StatusCode::MOVED_PERMANENTLY;

/// Options for [`redirect_if_match`].
#[derive(Debug, Clone)]
pub struct RedirectOptions {
    /// Path that must match exactly.
    pub path: String,
    /// When present, the method must match too.
    pub method: Option<Method>,
    /// Path the client is sent to.
    pub to: String,
    /// Redirect status; 301 when `None`.
    pub status: Option<StatusCode>,
}

/// Redirect requests whose path (and optionally method) match exactly.
///
/// The `Location` target is the request URL with only the path swapped, so
/// scheme, authority, and query string carry over.
pub fn redirect_if_match(req: &Request<()>, options: &RedirectOptions) -> FilterOutcome {
    if req.uri().path() != options.path {
        return FilterOutcome::Forward;
    }
    if let Some(method) = &options.method {
        if req.method() != method {
            return FilterOutcome::Forward;
        }
    }

    let location = rewrite_path(req.uri(), &options.to);
    let Ok(location) = HeaderValue::from_str(&location) else {
        // An unrepresentable destination cannot be redirected to.
        return FilterOutcome::Forward;
    };

    let status = options.status.unwrap_or(DEFAULT_REDIRECT_STATUS);
    let mut response = text_response(status, "");
    response.headers_mut().insert(header::LOCATION, location);
    FilterOutcome::Respond(response)
}

fn rewrite_path(uri: &Uri, to: &str) -> String {
    let mut location = String::new();
    if let Some(scheme) = uri.scheme_str() {
        location.push_str(scheme);
        location.push_str("://");
    }
    if let Some(authority) = uri.authority() {
        location.push_str(authority.as_str());
    }
    location.push_str(to);
    if let Some(query) = uri.query() {
        location.push('?');
        location.push_str(query);
    }
    location
}
