//! Default-domain access blocking.

use http::{Request, StatusCode};

use crate::outcome::{text_response, FilterOutcome};
use crate::request::hostname;

/// Platform-issued domain blocked when no other is configured.
pub const DEFAULT_BLOCKED_DOMAIN: &str = "contentstackapps.com";

/// Options for [`block_default_domains`].
#[derive(Debug, Clone, Default)]
pub struct DomainBlockOptions {
    /// Substring to block; [`DEFAULT_BLOCKED_DOMAIN`] when `None`.
    pub domain_to_block: Option<String>,
}

/// Block requests addressed to the platform's default domain, so only the
/// custom domain serves traffic.
pub fn block_default_domains(req: &Request<()>, options: &DomainBlockOptions) -> FilterOutcome {
    let domain = options
        .domain_to_block
        .as_deref()
        .unwrap_or(DEFAULT_BLOCKED_DOMAIN);

    let blocked = hostname(req).is_some_and(|host| host.contains(domain));

    if blocked {
        FilterOutcome::Respond(text_response(
            StatusCode::FORBIDDEN,
            "Forbidden: Access via default domain is restricted.",
        ))
    } else {
        FilterOutcome::Forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(host: &str) -> Request<()> {
        Request::builder()
            .uri(format!("https://{host}/"))
            .body(())
            .unwrap()
    }

    #[test]
    fn default_domain_is_blocked() {
        let outcome =
            block_default_domains(&request("my-site.contentstackapps.com"), &Default::default());
        let response = outcome.into_response().unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn custom_domain_is_forwarded() {
        let outcome = block_default_domains(&request("www.example.com"), &Default::default());
        assert!(outcome.is_forward());
    }

    #[test]
    fn configured_domain_overrides_the_default() {
        let options = DomainBlockOptions {
            domain_to_block: Some("pages.dev".to_string()),
        };
        assert!(!block_default_domains(&request("site.pages.dev"), &options).is_forward());
        assert!(
            block_default_domains(&request("my-site.contentstackapps.com"), &options).is_forward()
        );
    }
}
