use skillsmatch_core::ApiResult;
use skillsmatch_core::domain::Job;
use skillsmatch_shared::dto::{ApplyRequest, JobPatch};

use crate::http::{ApiClient, resource_path};

#[derive(Debug, Clone)]
pub struct JobsApi {
    client: ApiClient,
}

impl JobsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Job>> {
        self.client.get("/jobs").await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Job> {
        self.client.get(&resource_path(&["jobs", id])?).await
    }

    pub async fn create(&self, job: &JobPatch) -> ApiResult<Job> {
        self.client.post("/jobs", job).await
    }

    pub async fn update(&self, id: &str, patch: &JobPatch) -> ApiResult<Job> {
        self.client.put(&resource_path(&["jobs", id])?, patch).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&resource_path(&["jobs", id])?).await
    }

    /// POST /jobs/{id}/apply
    pub async fn apply(&self, job_id: &str, student_id: &str) -> ApiResult<()> {
        let body = ApplyRequest {
            student_id: student_id.to_string(),
        };
        self.client
            .post_no_content(&resource_path(&["jobs", job_id, "apply"])?, &body)
            .await
    }
}
