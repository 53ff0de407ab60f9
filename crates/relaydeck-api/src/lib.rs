//! Async Rust client for the Relaydeck gateway admin API.
//!
//! This crate is the transport layer of the admin console: it executes
//! authenticated JSON calls against the gateway's REST backend and
//! classifies every failure, but never interprets application envelopes —
//! that belongs to the mapping services in `relaydeck-core`.
//!
//! - **[`ApiClient`]** — request executor: header merging, bearer-auth
//!   injection, query parameters, per-call timeout, failure
//!   classification. Endpoint methods are implemented per entity as
//!   inherent impls (providers, groups, breakers, tokens, logs, models).
//! - **[`SessionStore`]** — persisted bearer token + username under fixed
//!   storage keys, plus the log view's auto-refresh preferences. The
//!   single choke point for invalidation: a 401 on any authenticated call
//!   clears it and notifies subscribers exactly once.
//! - **[`Error`]** — closed failure taxonomy (`Network`, `Timeout`,
//!   `Http`, `Application`, `Decode`) that callers pattern-match.
//! - **[`types`]** — wire DTOs exactly as the backend sends them.

pub mod client;
mod endpoints;
pub mod error;
pub mod session;
pub mod types;

pub use client::{ApiClient, DEFAULT_TIMEOUT, RequestOptions};
pub use endpoints::logs::LogFilter;
pub use error::{Error, ErrorBody};
pub use session::{LogRefreshPrefs, Session, SessionHandle, SessionStore};
