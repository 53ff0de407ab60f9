// Circuit-breaker observation and manual control.
//
// Control and release carry an `X-Operator` header naming the human who
// issued the override — the gateway records it for audit.

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::types::{BreakerControlWrite, BreakerDto, Envelope, PageDto, Reply};

impl ApiClient {
    pub async fn list_breakers(
        &self,
        current: u64,
        size: u64,
    ) -> Result<Envelope<PageDto<BreakerDto>>, Error> {
        let opts = RequestOptions::new()
            .param("current", Some(current.to_string()))
            .param("size", Some(size.to_string()));
        self.get("breakers", opts).await
    }

    pub async fn all_breakers(&self) -> Result<Reply<Vec<BreakerDto>>, Error> {
        self.get("breakers/all", RequestOptions::new()).await
    }

    /// Force a breaker into a state, with an audit reason.
    pub async fn control_breaker(
        &self,
        provider_id: &str,
        body: &BreakerControlWrite,
        operator: &str,
    ) -> Result<Envelope<BreakerDto>, Error> {
        let opts = RequestOptions::new().header("X-Operator", operator);
        self.post(&format!("breakers/{provider_id}/control"), body, opts)
            .await
    }

    /// Drop a manual override, returning the breaker to automatic control.
    pub async fn release_breaker(
        &self,
        provider_id: &str,
        operator: &str,
    ) -> Result<Envelope<BreakerDto>, Error> {
        let opts = RequestOptions::new().header("X-Operator", operator);
        self.post(
            &format!("breakers/{provider_id}/release"),
            &serde_json::json!({}),
            opts,
        )
        .await
    }
}
