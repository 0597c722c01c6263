use skillsmatch_core::ApiResult;
use skillsmatch_core::domain::Student;
use skillsmatch_shared::dto::StudentPatch;

use crate::http::{ApiClient, resource_path};

#[derive(Debug, Clone)]
pub struct StudentsApi {
    client: ApiClient,
}

impl StudentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Student>> {
        self.client.get("/students").await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Student> {
        self.client.get(&resource_path(&["students", id])?).await
    }

    pub async fn create(&self, student: &StudentPatch) -> ApiResult<Student> {
        self.client.post("/students", student).await
    }

    pub async fn update(&self, id: &str, patch: &StudentPatch) -> ApiResult<Student> {
        self.client.put(&resource_path(&["students", id])?, patch).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&resource_path(&["students", id])?).await
    }
}
