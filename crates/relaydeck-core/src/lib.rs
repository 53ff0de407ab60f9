//! Domain layer between `relaydeck-api` and the console UI.
//!
//! This crate owns the domain model and the mapping services of the
//! Relaydeck admin console:
//!
//! - **Domain model** ([`model`]) — canonical types (`Provider`, `Group`,
//!   `BreakerStatus`, `AccessToken`, `RequestLog`) with strong enums where
//!   the wire uses integer codes, plus the pure pagination math
//!   ([`model::page_sequence`]).
//!
//! - **Conversions** ([`convert`]) — the bidirectional wire↔domain tables:
//!   balance-mode codes (with the backend's asymmetric defaults preserved),
//!   provider-type codes (unknowns passed through), comma-joined model
//!   lists (documented as lossy).
//!
//! - **Services** ([`service`]) — one module per entity. Paged reads
//!   degrade to an empty page on a non-success envelope; mutations
//!   propagate `Error::Application`; client-side validation short-circuits
//!   before any network call.
//!
//! - **[`AutoRefresh`]** — the log view's interval timer, with
//!   deterministic cancellation on stop and on drop.
//!
//! Errors are `relaydeck_api::Error` throughout — one closed taxonomy that
//! callers pattern-match, re-exported here as [`Error`].

pub mod convert;
pub mod model;
pub mod refresh;
pub mod service;

pub use refresh::AutoRefresh;
pub use relaydeck_api::{Error, ErrorBody};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AccessToken,
    BalanceMode,
    BreakerCommand,
    BreakerHealth,
    BreakerStatus,
    CircuitState,
    CreatedToken,
    GatewayModel,
    Group,
    GroupDraft,
    GroupTarget,
    ManualOverride,
    Page,
    PageItem,
    Provider,
    ProviderDraft,
    ProviderKind,
    ProviderStatus,
    RequestLog,
    TargetValidity,
    TokenDraft,
};
