//! Authentication endpoints.

use serde_json::json;

use skillsmatch_core::ApiResult;
use skillsmatch_shared::dto::{
    AuthResponse, BusinessRegistration, LoginRequest, LogoutResponse, MeResponse, RegisterRequest,
    StudentRegistration,
};

use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/auth/login", &body).await
    }

    /// POST /auth/register as a student
    pub async fn register_student(&self, student: StudentRegistration) -> ApiResult<AuthResponse> {
        self.client
            .post("/auth/register", &RegisterRequest::student(student))
            .await
    }

    /// POST /auth/register as a business
    pub async fn register_business(
        &self,
        business: BusinessRegistration,
    ) -> ApiResult<AuthResponse> {
        self.client
            .post("/auth/register", &RegisterRequest::business(business))
            .await
    }

    /// GET /auth/me
    pub async fn me(&self) -> ApiResult<MeResponse> {
        self.client.get("/auth/me").await
    }

    /// POST /auth/logout
    pub async fn logout(&self) -> ApiResult<LogoutResponse> {
        self.client.post("/auth/logout", &json!({})).await
    }
}
