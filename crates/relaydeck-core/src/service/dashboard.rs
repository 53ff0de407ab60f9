// Dashboard aggregation: four independent queries, joined.
//
// Failure in one slot must not corrupt the others — each result defaults
// independently and the aggregate always renders.

use tracing::warn;

use relaydeck_api::{ApiClient, LogFilter};

use super::{breakers, groups, logs, providers};
use crate::model::{BreakerStatus, Group, Page, Provider, RequestLog};

/// How many recent log rows the dashboard shows.
pub const RECENT_LOG_COUNT: u64 = 20;

/// Everything the dashboard view renders in one pass.
#[derive(Debug, Clone)]
pub struct Overview {
    pub providers: Vec<Provider>,
    pub groups: Vec<Group>,
    pub breakers: Vec<BreakerStatus>,
    pub recent_logs: Page<RequestLog>,
}

/// Fetch the dashboard snapshot. Never fails: degraded slots come back
/// empty and are logged.
pub async fn overview(api: &ApiClient) -> Overview {
    let log_filter = LogFilter::default();
    let (providers, groups, breakers, recent_logs) = tokio::join!(
        providers::list(api),
        groups::list(api),
        breakers::list(api),
        logs::page(api, 1, RECENT_LOG_COUNT, &log_filter),
    );

    Overview {
        providers: providers.unwrap_or_else(|e| {
            warn!("dashboard provider query failed: {e}");
            Vec::new()
        }),
        groups: groups.unwrap_or_else(|e| {
            warn!("dashboard group query failed: {e}");
            Vec::new()
        }),
        breakers: breakers.unwrap_or_else(|e| {
            warn!("dashboard breaker query failed: {e}");
            Vec::new()
        }),
        recent_logs: recent_logs.unwrap_or_else(|e| {
            warn!("dashboard log query failed: {e}");
            Page::empty(1, RECENT_LOG_COUNT)
        }),
    }
}
