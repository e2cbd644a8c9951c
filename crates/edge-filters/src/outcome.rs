//! The per-filter result contract.

use http::{Request, Response, StatusCode};

/// Result of running one request filter.
///
/// `Forward` is an explicit "no opinion": the dispatcher moves on to the
/// next filter, or fetches upstream once the chain is exhausted. `Respond`
/// short-circuits the chain. `Rewrite` asks the dispatcher to fetch
/// upstream with a modified request in place of the original.
///
/// Filters operate on request heads (`Request<()>`); bodies stream through
/// the dispatcher untouched.
#[derive(Debug)]
pub enum FilterOutcome {
    Forward,
    Respond(Response<String>),
    Rewrite(Request<()>),
}

impl FilterOutcome {
    /// True when the filter had no opinion on this request.
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward)
    }

    /// The short-circuit response, if any.
    pub fn into_response(self) -> Option<Response<String>> {
        match self {
            Self::Respond(response) => Some(response),
            _ => None,
        }
    }
}

/// A plain-text response with the given status.
pub(crate) fn text_response(status: StatusCode, body: &str) -> Response<String> {
    let mut response = Response::new(body.to_string());
    *response.status_mut() = status;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_is_not_a_response() {
        assert!(FilterOutcome::Forward.is_forward());
        assert!(FilterOutcome::Forward.into_response().is_none());
    }

    #[test]
    fn respond_carries_the_response() {
        let outcome = FilterOutcome::Respond(text_response(StatusCode::FORBIDDEN, "Forbidden"));
        assert!(!outcome.is_forward());

        let response = outcome.into_response().unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.body(), "Forbidden");
    }
}
