// Request-log endpoints. Read-only and idempotent — the log view's
// auto-refresh timer re-issues the same query.

use chrono::{DateTime, Utc};

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::types::{Envelope, LogDto, PageDto};

/// Optional server-side filters for the log listing.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub provider_id: Option<String>,
    pub model: Option<String>,
    pub success: Option<bool>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl ApiClient {
    pub async fn list_logs(
        &self,
        current: u64,
        size: u64,
        filter: &LogFilter,
    ) -> Result<Envelope<PageDto<LogDto>>, Error> {
        let opts = RequestOptions::new()
            .param("current", Some(current.to_string()))
            .param("size", Some(size.to_string()))
            .param("providerId", filter.provider_id.clone())
            .param("modelName", filter.model.clone())
            .param("success", filter.success.map(|flag| flag.to_string()))
            .param("startTime", filter.start.map(|at| at.to_rfc3339()))
            .param("endTime", filter.end.map(|at| at.to_rfc3339()));
        self.get("logs", opts).await
    }
}
