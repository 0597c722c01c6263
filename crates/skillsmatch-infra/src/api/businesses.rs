use skillsmatch_core::ApiResult;
use skillsmatch_core::domain::Business;
use skillsmatch_shared::dto::BusinessPatch;

use crate::http::{ApiClient, resource_path};

#[derive(Debug, Clone)]
pub struct BusinessesApi {
    client: ApiClient,
}

impl BusinessesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Business>> {
        self.client.get("/businesses").await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Business> {
        self.client.get(&resource_path(&["businesses", id])?).await
    }

    pub async fn create(&self, business: &BusinessPatch) -> ApiResult<Business> {
        self.client.post("/businesses", business).await
    }

    pub async fn update(&self, id: &str, patch: &BusinessPatch) -> ApiResult<Business> {
        self.client.put(&resource_path(&["businesses", id])?, patch).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&resource_path(&["businesses", id])?).await
    }
}
