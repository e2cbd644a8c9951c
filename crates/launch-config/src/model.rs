//! The launch configuration document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status code stored for a redirect when the operator supplies none.
pub const DEFAULT_REDIRECT_STATUS: u16 = 308;

/// The persisted `launch.json` document.
///
/// Only `redirects`, `rewrites`, and `cache.cachePriming.urls` are managed
/// here; every other top-level key belongs to some other tool and rides
/// along in `extra`, serialized ahead of the managed fields in its on-disk
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirects: Option<Vec<Redirect>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrites: Option<Vec<Rewrite>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheSection>,
}

/// A source-to-destination redirect rule with an HTTP status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub source: String,
    pub destination: String,

    #[serde(rename = "statusCode", default = "default_status_code")]
    pub status_code: u16,

    /// Optional response overrides attached to the rule by hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<RedirectResponse>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Redirect {
    /// A redirect as collected interactively: no response overrides, no
    /// foreign keys.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            status_code,
            response: None,
            extra: Map::new(),
        }
    }
}

/// Response overrides for a redirect rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedirectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
}

/// A source-to-destination rewrite rule. No client-visible status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rewrite {
    pub source: String,
    pub destination: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rewrite {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            extra: Map::new(),
        }
    }
}

/// The `cache` section. Only `cachePriming` is managed; sibling keys are
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheSection {
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(rename = "cachePriming", skip_serializing_if = "Option::is_none")]
    pub cache_priming: Option<CachePriming>,
}

/// The set of relative paths warmed at deploy time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CachePriming {
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(default)]
    pub urls: Vec<String>,
}

fn default_status_code() -> u16 {
    DEFAULT_REDIRECT_STATUS
}

/// Parse an operator-supplied redirect status code.
///
/// Empty, non-numeric, and zero input all fall back to
/// [`DEFAULT_REDIRECT_STATUS`].
pub fn parse_status_code(input: &str) -> u16 {
    match input.trim().parse::<u16>() {
        Ok(0) | Err(_) => DEFAULT_REDIRECT_STATUS,
        Ok(code) => code,
    }
}
