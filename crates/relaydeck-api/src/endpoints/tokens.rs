// Access-token endpoints.
//
// The create response is the only place the secret `token` ever appears;
// list reads carry `maskedToken` only.

use serde_json::Value;

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::types::{Envelope, PageDto, TokenDto, TokenUpdate, TokenWrite};

impl ApiClient {
    pub async fn list_tokens(
        &self,
        current: u64,
        size: u64,
    ) -> Result<Envelope<PageDto<TokenDto>>, Error> {
        let opts = RequestOptions::new()
            .param("current", Some(current.to_string()))
            .param("size", Some(size.to_string()));
        self.get("tokens", opts).await
    }

    pub async fn create_token(&self, body: &TokenWrite) -> Result<Envelope<TokenDto>, Error> {
        self.post("tokens", body, RequestOptions::new()).await
    }

    pub async fn update_token(
        &self,
        id: &str,
        body: &TokenUpdate,
    ) -> Result<Envelope<TokenDto>, Error> {
        self.patch(&format!("tokens/{id}"), body, RequestOptions::new())
            .await
    }

    pub async fn delete_token(&self, id: &str) -> Result<Envelope<Value>, Error> {
        self.delete(&format!("tokens/{id}"), RequestOptions::new())
            .await
    }
}
