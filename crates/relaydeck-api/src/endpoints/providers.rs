// Upstream provider endpoints.

use serde_json::Value;

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::types::{Envelope, PageDto, ProviderDto, ProviderWrite, Reply};

impl ApiClient {
    pub async fn list_providers(
        &self,
        current: u64,
        size: u64,
        name: Option<&str>,
    ) -> Result<Envelope<PageDto<ProviderDto>>, Error> {
        let opts = RequestOptions::new()
            .param("current", Some(current.to_string()))
            .param("size", Some(size.to_string()))
            .param("name", name.map(str::to_owned));
        self.get("providers", opts).await
    }

    /// The unpaged provider list. This endpoint predates the envelope
    /// convention and may answer with a bare array.
    pub async fn all_providers(&self) -> Result<Reply<Vec<ProviderDto>>, Error> {
        self.get("providers/all", RequestOptions::new()).await
    }

    pub async fn create_provider(
        &self,
        body: &ProviderWrite,
    ) -> Result<Envelope<ProviderDto>, Error> {
        self.post("providers", body, RequestOptions::new()).await
    }

    pub async fn update_provider(
        &self,
        id: &str,
        body: &ProviderWrite,
    ) -> Result<Envelope<ProviderDto>, Error> {
        self.put(&format!("providers/{id}"), body, RequestOptions::new())
            .await
    }

    pub async fn delete_provider(&self, id: &str) -> Result<Envelope<Value>, Error> {
        self.delete(&format!("providers/{id}"), RequestOptions::new())
            .await
    }

    /// Ask the gateway to re-pull the provider's model catalog upstream.
    pub async fn sync_provider_models(&self, id: &str) -> Result<Envelope<Vec<String>>, Error> {
        self.post(
            &format!("providers/{id}/models/sync"),
            &serde_json::json!({}),
            RequestOptions::new(),
        )
        .await
    }
}
