//! JSON response envelope builder.

use http::{header, HeaderMap, HeaderValue, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Errors from building a response envelope.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("failed to serialize JSON body")]
    Json(#[from] serde_json::Error),
}

/// Overrides applied on top of the JSON defaults.
#[derive(Debug, Clone, Default)]
pub struct ResponseInit {
    /// Status code; 200 when `None`.
    pub status: Option<StatusCode>,
    /// When present, replaces the default header set entirely.
    pub headers: Option<HeaderMap>,
}

/// Build a JSON response from any serializable body.
///
/// Defaults to `200 OK` with `Content-Type: application/json`. A header map
/// in `init` replaces the defaults wholesale rather than merging into them.
pub fn json_response<T: Serialize>(
    body: &T,
    init: Option<ResponseInit>,
) -> Result<Response<String>, ResponseError> {
    let json = serde_json::to_string(body)?;
    let init = init.unwrap_or_default();

    let mut response = Response::new(json);
    *response.status_mut() = init.status.unwrap_or(StatusCode::OK);

    match init.headers {
        Some(headers) => *response.headers_mut() = headers,
        None => {
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_200_json() {
        let response = json_response(&json!({"ok": true}), None).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.body(), r#"{"ok":true}"#);
    }

    #[test]
    fn status_override_applies() {
        let init = ResponseInit {
            status: Some(StatusCode::CREATED),
            headers: None,
        };
        let response = json_response(&json!({"id": 7}), Some(init)).unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[test]
    fn header_override_replaces_defaults() {
        let mut headers = HeaderMap::new();
        headers.insert("x-custom", "1".parse().unwrap());

        let init = ResponseInit {
            status: None,
            headers: Some(headers),
        };
        let response = json_response(&json!([1, 2, 3]), Some(init)).unwrap();
        assert_eq!(response.headers()["x-custom"], "1");
        assert!(response.headers().get("content-type").is_none());
    }

    #[test]
    fn serializes_structs() {
        #[derive(Serialize)]
        struct Health {
            status: &'static str,
        }

        let response = json_response(&Health { status: "up" }, None).unwrap();
        assert_eq!(response.body(), r#"{"status":"up"}"#);
    }
}
