// Model catalog. Another pre-envelope endpoint: answers either a bare
// array or a wrapped one depending on gateway version.

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::types::{ModelDto, Reply};

impl ApiClient {
    pub async fn list_models(&self) -> Result<Reply<Vec<ModelDto>>, Error> {
        self.get("models", RequestOptions::new()).await
    }
}
