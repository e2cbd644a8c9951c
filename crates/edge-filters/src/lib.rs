//! Stateless request filters for the HTTP edge layer.
//!
//! This crate provides:
//! - `FilterOutcome` - tagged result of running one filter
//! - `basic_auth` - hostname-scoped Basic authentication gate
//! - `block_ai_crawlers` - user-agent substring bot blocking
//! - `block_default_domains` - default-domain access blocking
//! - `ip_access_control` - allow/deny list enforcement by client IP
//! - `redirect_if_match` - exact path redirects
//! - `strip_rsc_header` - RSC header removal for affected routes
//! - `geo_headers` - edge geolocation header extraction
//! - `json_response` - JSON response envelope builder
//!
//! Each filter inspects one request head and either short-circuits with a
//! response or defers. Filters hold no state and never depend on one
//! another's result; a dispatcher outside this crate decides ordering and
//! runs the chain until the first non-`Forward` outcome.
//!
//! # Example
//!
//! ```ignore
//! use edge_filters::{block_ai_crawlers, FilterOutcome, DEFAULT_BOTS};
//!
//! match block_ai_crawlers(&request, DEFAULT_BOTS) {
//!     FilterOutcome::Respond(response) => return response,
//!     _ => { /* next filter, or fetch upstream */ }
//! }
//! ```

mod auth;
mod bots;
mod domains;
mod geo;
mod ip_access;
mod outcome;
mod redirect;
mod request;
mod response;
mod rsc;

pub use auth::*;
pub use bots::*;
pub use domains::*;
pub use geo::*;
pub use ip_access::*;
pub use outcome::*;
pub use redirect::*;
pub use request::*;
pub use response::*;
pub use rsc::*;
