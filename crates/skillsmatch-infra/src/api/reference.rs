//! Reference lists used to populate pickers.

use skillsmatch_core::ApiResult;

use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct ReferenceApi {
    client: ApiClient,
}

impl ReferenceApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn skills(&self) -> ApiResult<Vec<String>> {
        self.client.get("/skills").await
    }

    pub async fn locations(&self) -> ApiResult<Vec<String>> {
        self.client.get("/locations").await
    }
}
