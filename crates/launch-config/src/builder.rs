//! Merge and collection state for building a launch configuration.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::model::{CachePriming, CacheSection, LaunchConfig, Redirect, Rewrite};

/// Working state for one configuration session.
///
/// The managed sequences are always materialized so collection steps can
/// append without re-checking shape; unmanaged keys ride along untouched.
/// The builder moves by value through each collection step and is consumed
/// by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct LaunchConfigBuilder {
    extra: Map<String, Value>,
    redirects: Vec<Redirect>,
    rewrites: Vec<Rewrite>,
    cache_extra: Map<String, Value>,
    priming_extra: Map<String, Value>,
    priming_urls: Vec<String>,
}

impl LaunchConfigBuilder {
    /// Reconcile a loaded document into working shape.
    ///
    /// Managed sequences are taken from the document when present, else
    /// start empty. Every key the tool does not own survives unchanged,
    /// including keys nested under `cache` and `cachePriming`.
    pub fn from_config(config: LaunchConfig) -> Self {
        let mut builder = Self {
            extra: config.extra,
            redirects: config.redirects.unwrap_or_default(),
            rewrites: config.rewrites.unwrap_or_default(),
            ..Self::default()
        };
        if let Some(cache) = config.cache {
            builder.cache_extra = cache.extra;
            if let Some(priming) = cache.cache_priming {
                builder.priming_extra = priming.extra;
                builder.priming_urls = priming.urls;
            }
        }
        builder
    }

    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    pub fn rewrites(&self) -> &[Rewrite] {
        &self.rewrites
    }

    pub fn priming_urls(&self) -> &[String] {
        &self.priming_urls
    }

    /// Append one redirect rule.
    pub fn push_redirect(&mut self, redirect: Redirect) {
        self.redirects.push(redirect);
    }

    /// Append one rewrite rule.
    pub fn push_rewrite(&mut self, rewrite: Rewrite) {
        self.rewrites.push(rewrite);
    }

    /// Union new cache priming URLs into the stored list.
    ///
    /// Exact case-sensitive match, first appearance wins. The stored list
    /// passes through the same set, so duplicates already on disk collapse
    /// too.
    pub fn prime_urls<I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for url in self.priming_urls.drain(..).chain(urls) {
            if seen.insert(url.clone()) {
                merged.push(url);
            }
        }
        self.priming_urls = merged;
    }

    /// Drop empty managed sections and produce the document to persist.
    ///
    /// Cleanup runs innermost first: an empty URL list removes
    /// `cachePriming`, and `cache` goes away entirely once nothing is left
    /// under it.
    pub fn finish(self) -> LaunchConfig {
        let cache_priming = if self.priming_urls.is_empty() {
            None
        } else {
            Some(CachePriming {
                extra: self.priming_extra,
                urls: self.priming_urls,
            })
        };

        let cache = if cache_priming.is_none() && self.cache_extra.is_empty() {
            None
        } else {
            Some(CacheSection {
                extra: self.cache_extra,
                cache_priming,
            })
        };

        LaunchConfig {
            extra: self.extra,
            redirects: (!self.redirects.is_empty()).then_some(self.redirects),
            rewrites: (!self.rewrites.is_empty()).then_some(self.rewrites),
            cache,
        }
    }
}

/// Split a comma-separated URL list, trimming whitespace and dropping empty
/// tokens.
pub fn parse_url_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
