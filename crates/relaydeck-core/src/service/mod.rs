//! Per-entity mapping services.
//!
//! Each module owns the narrow CRUD contract for one entity: it builds
//! backend-shaped payloads, lets the transport execute them, then unwraps
//! envelopes and maps DTOs into domain types. Application-level failures
//! (`code != 200`) become [`Error::Application`] here — the transport
//! never raises them itself.
//!
//! Paged reads are lenient: a non-success envelope yields an empty page so
//! list views render an empty state instead of crashing. Single-resource
//! and mutation calls propagate envelope errors as-is.

pub mod auth;
pub mod breakers;
pub mod dashboard;
pub mod groups;
pub mod logs;
pub mod models;
pub mod providers;
pub mod tokens;

use tracing::warn;

use relaydeck_api::Error;
use relaydeck_api::types::{Envelope, PageDto};

use crate::model::Page;

/// Unwrap an envelope into its payload, or the application error it carries.
pub(crate) fn unwrap_data<T>(envelope: Envelope<T>) -> Result<T, Error> {
    if !envelope.is_ok() {
        return Err(Error::Application {
            code: envelope.code,
            message: envelope.message,
        });
    }
    envelope.data.ok_or_else(|| Error::Application {
        code: 200,
        message: "response envelope carried no data".into(),
    })
}

/// Check a mutation acknowledgement whose payload is irrelevant.
pub(crate) fn ensure_ok<T>(envelope: &Envelope<T>) -> Result<(), Error> {
    if envelope.is_ok() {
        Ok(())
    } else {
        Err(Error::Application {
            code: envelope.code,
            message: envelope.message.clone(),
        })
    }
}

/// Client-side validation failure, surfaced through the same channel as
/// server failures: same variant, distinguishable message.
pub(crate) fn validation(message: impl Into<String>) -> Error {
    Error::Application {
        code: 400,
        message: message.into(),
    }
}

/// Lenient unwrap for paged reads: a non-success envelope degrades to the
/// empty page for the requested position instead of erroring.
pub(crate) fn lenient_page<D, T: From<D>>(
    envelope: Envelope<PageDto<D>>,
    current: u64,
    size: u64,
) -> Page<T> {
    if !envelope.is_ok() {
        warn!(
            "paged fetch answered code {}: {} — rendering empty",
            envelope.code, envelope.message
        );
        return Page::empty(current, size);
    }
    match envelope.data {
        Some(dto) => crate::convert::page_from_dto(dto),
        None => Page::empty(current, size),
    }
}
