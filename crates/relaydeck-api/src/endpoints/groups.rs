// Routing group endpoints.

use serde_json::Value;

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::types::{Envelope, GroupDto, GroupWrite, PageDto, Reply};

impl ApiClient {
    pub async fn list_groups(
        &self,
        current: u64,
        size: u64,
    ) -> Result<Envelope<PageDto<GroupDto>>, Error> {
        let opts = RequestOptions::new()
            .param("current", Some(current.to_string()))
            .param("size", Some(size.to_string()));
        self.get("groups", opts).await
    }

    pub async fn all_groups(&self) -> Result<Reply<Vec<GroupDto>>, Error> {
        self.get("groups/all", RequestOptions::new()).await
    }

    pub async fn create_group(&self, body: &GroupWrite) -> Result<Envelope<GroupDto>, Error> {
        self.post("groups", body, RequestOptions::new()).await
    }

    pub async fn update_group(
        &self,
        id: &str,
        body: &GroupWrite,
    ) -> Result<Envelope<GroupDto>, Error> {
        self.put(&format!("groups/{id}"), body, RequestOptions::new())
            .await
    }

    pub async fn delete_group(&self, id: &str) -> Result<Envelope<Value>, Error> {
        self.delete(&format!("groups/{id}"), RequestOptions::new())
            .await
    }
}
