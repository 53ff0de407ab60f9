// Request-log reads. Idempotent by design: the log view's auto-refresh
// re-issues the same query on a timer.

use relaydeck_api::{ApiClient, Error, LogFilter};

use super::lenient_page;
use crate::model::{Page, RequestLog};

pub async fn page(
    api: &ApiClient,
    current: u64,
    size: u64,
    filter: &LogFilter,
) -> Result<Page<RequestLog>, Error> {
    let envelope = api.list_logs(current, size, filter).await?;
    Ok(lenient_page(envelope, current, size))
}
