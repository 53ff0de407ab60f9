//! Canonical domain types for the console.
//!
//! These are what views consume: strong enums instead of wire integers,
//! `Vec<String>` model lists instead of comma-joined strings, computed
//! properties (orphan detection) instead of persisted flags.

pub mod breaker;
pub mod group;
pub mod log;
pub mod page;
pub mod provider;
pub mod token;

pub use breaker::{BreakerCommand, BreakerHealth, BreakerStatus, CircuitState, ManualOverride};
pub use group::{BalanceMode, Group, GroupDraft, GroupTarget, TargetValidity};
pub use log::RequestLog;
pub use page::{Page, PageItem, page_count, page_sequence};
pub use provider::{GatewayModel, Provider, ProviderDraft, ProviderKind, ProviderStatus};
pub use token::{AccessToken, CreatedToken, TokenDraft};
