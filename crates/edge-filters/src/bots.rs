//! User-agent substring bot blocking.

use http::{header, Request, StatusCode};

use crate::outcome::{text_response, FilterOutcome};

/// Crawlers blocked when the caller has no list of its own.
pub const DEFAULT_BOTS: &[&str] = &[
    "claudebot",
    "gptbot",
    "googlebot",
    "bingbot",
    "ahrefsbot",
    "yandexbot",
    "semrushbot",
    "mj12bot",
    "facebookexternalhit",
    "twitterbot",
];

/// Block requests whose user-agent contains any listed substring,
/// case-insensitively.
pub fn block_ai_crawlers(req: &Request<()>, bots: &[&str]) -> FilterOutcome {
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    let blocked = bots
        .iter()
        .any(|bot| user_agent.contains(&bot.to_ascii_lowercase()));

    if blocked {
        FilterOutcome::Respond(text_response(
            StatusCode::FORBIDDEN,
            "Forbidden: AI crawlers are not allowed.",
        ))
    } else {
        FilterOutcome::Forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_agent: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().uri("https://example.com/");
        if let Some(ua) = user_agent {
            builder = builder.header("user-agent", ua);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn listed_bot_is_blocked() {
        let outcome = block_ai_crawlers(&request(Some("Mozilla/5.0 GPTBot/1.0")), DEFAULT_BOTS);
        let response = outcome.into_response().unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.body(), "Forbidden: AI crawlers are not allowed.");
    }

    #[test]
    fn plain_browser_is_forwarded() {
        let outcome = block_ai_crawlers(&request(Some("Mozilla/5.0")), DEFAULT_BOTS);
        assert!(outcome.is_forward());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let outcome = block_ai_crawlers(&request(Some("AHREFSBOT/7.0")), DEFAULT_BOTS);
        assert!(!outcome.is_forward());

        let outcome = block_ai_crawlers(&request(Some("quirky-agent")), &["Quirky-Agent"]);
        assert!(!outcome.is_forward());
    }

    #[test]
    fn missing_user_agent_is_forwarded() {
        let outcome = block_ai_crawlers(&request(None), DEFAULT_BOTS);
        assert!(outcome.is_forward());
    }

    #[test]
    fn custom_list_replaces_the_default() {
        let outcome = block_ai_crawlers(&request(Some("GPTBot/1.0")), &["scrapy"]);
        assert!(outcome.is_forward());
    }
}
