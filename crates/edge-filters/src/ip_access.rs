//! Allow/deny list enforcement by client IP.

use http::{Request, StatusCode};

use crate::outcome::{text_response, FilterOutcome};
use crate::request::client_ip;

/// Options for [`ip_access_control`].
#[derive(Debug, Clone, Default)]
pub struct IpAccessOptions {
    /// When present, only these IPs may pass.
    pub allow: Option<Vec<String>>,
    /// Always rejected; checked before the allow list.
    pub deny: Option<Vec<String>>,
}

/// Enforce IP allow/deny lists against the derived client IP.
///
/// Deny wins over allow. An allow list that is present and does not contain
/// the IP rejects, even when the IP is in neither list. A request whose
/// client IP cannot be derived defers; the policy is not applicable to it.
pub fn ip_access_control(req: &Request<()>, options: &IpAccessOptions) -> FilterOutcome {
    let Some(ip) = client_ip(req.headers()) else {
        return FilterOutcome::Forward;
    };

    if let Some(deny) = &options.deny {
        if deny.iter().any(|denied| denied == &ip) {
            return forbidden();
        }
    }

    if let Some(allow) = &options.allow {
        if !allow.iter().any(|allowed| allowed == &ip) {
            return forbidden();
        }
    }

    FilterOutcome::Forward
}

fn forbidden() -> FilterOutcome {
    FilterOutcome::Respond(text_response(StatusCode::FORBIDDEN, "Forbidden"))
}
