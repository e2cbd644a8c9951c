//! Hostname-scoped Basic authentication gate.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use http::{header, HeaderValue, Request, Response, StatusCode};

use crate::outcome::{text_response, FilterOutcome};
use crate::request::hostname;

/// Realm advertised when none is configured.
pub const DEFAULT_REALM: &str = "Protected Area";

/// Options for [`basic_auth`].
#[derive(Debug, Clone)]
pub struct BasicAuthOptions {
    /// The gate applies only when the request hostname contains this
    /// substring.
    pub hostname_includes: String,
    pub username: String,
    pub password: String,
    pub realm: Option<String>,
}

/// Gate requests to matching hostnames behind Basic authentication.
///
/// Hostname mismatch defers. Missing or non-Basic credentials get a 401
/// challenge carrying `WWW-Authenticate`; undecodable credentials and
/// mismatches get a plain 401. A correct username/password pair defers so
/// the dispatcher forwards upstream.
pub fn basic_auth(req: &Request<()>, options: &BasicAuthOptions) -> FilterOutcome {
    let Some(host) = hostname(req) else {
        return FilterOutcome::Forward;
    };
    if !host.contains(&options.hostname_includes) {
        return FilterOutcome::Forward;
    }

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(encoded) = auth_header.and_then(|value| value.strip_prefix("Basic ")) else {
        return FilterOutcome::Respond(challenge(options.realm.as_deref()));
    };

    let decoded = BASE64
        .decode(encoded)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok());
    let Some(credentials) = decoded else {
        return FilterOutcome::Respond(text_response(
            StatusCode::UNAUTHORIZED,
            "Unauthorized - Invalid auth format",
        ));
    };

    // A credential without a separator can never match.
    let valid = credentials
        .split_once(':')
        .is_some_and(|(username, password)| {
            username == options.username && password == options.password
        });

    if valid {
        FilterOutcome::Forward
    } else {
        FilterOutcome::Respond(text_response(
            StatusCode::UNAUTHORIZED,
            "Unauthorized - Invalid credentials",
        ))
    }
}

fn challenge(realm: Option<&str>) -> Response<String> {
    let realm = realm.unwrap_or(DEFAULT_REALM);
    let mut response = text_response(StatusCode::UNAUTHORIZED, "Authentication Required");
    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{realm}\"")) {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, value);
    }
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
    response
}
