// Circuit-breaker observation and manual control.
//
// The state machine lives in the gateway; this module only reads
// snapshots and submits operator overrides, always naming the operator
// in `X-Operator` for the audit trail.

use relaydeck_api::types::BreakerControlWrite;
use relaydeck_api::{ApiClient, Error};

use super::{lenient_page, unwrap_data, validation};
use crate::model::{BreakerCommand, BreakerStatus, CircuitState, Page};

pub async fn page(api: &ApiClient, current: u64, size: u64) -> Result<Page<BreakerStatus>, Error> {
    let envelope = api.list_breakers(current, size).await?;
    Ok(lenient_page(envelope, current, size))
}

pub async fn list(api: &ApiClient) -> Result<Vec<BreakerStatus>, Error> {
    let envelope = api.all_breakers().await?.into_envelope();
    let records = unwrap_data(envelope)?;
    Ok(records.into_iter().map(BreakerStatus::from).collect())
}

/// Force a breaker into a state, with an audit reason.
pub async fn control(
    api: &ApiClient,
    provider_id: &str,
    command: &BreakerCommand,
    operator: &str,
) -> Result<BreakerStatus, Error> {
    if command.state == CircuitState::Unknown {
        return Err(validation(
            "circuit state must be CLOSED, OPEN or HALF_OPEN",
        ));
    }
    if command.reason.trim().is_empty() {
        return Err(validation("manual control requires a reason"));
    }
    if operator.trim().is_empty() {
        return Err(validation("manual control requires an operator"));
    }

    let body = BreakerControlWrite {
        state: command.state.to_string(),
        reason: command.reason.clone(),
        duration_seconds: command.duration.map(|d| d.as_secs()),
    };
    let envelope = api.control_breaker(provider_id, &body, operator).await?;
    unwrap_data(envelope).map(BreakerStatus::from)
}

/// Drop a manual override, returning the breaker to automatic control.
pub async fn release(
    api: &ApiClient,
    provider_id: &str,
    operator: &str,
) -> Result<BreakerStatus, Error> {
    if operator.trim().is_empty() {
        return Err(validation("release requires an operator"));
    }
    let envelope = api.release_breaker(provider_id, operator).await?;
    unwrap_data(envelope).map(BreakerStatus::from)
}
