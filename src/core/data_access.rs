use crate::adapters::{HttpBackend, MockBackend};
use crate::core::mock_store::MockStore;
use crate::core::{
    ApiRequest, Backend, ConfigProvider, CreateOpportunityRequest, CreateUserRequest, Opportunity,
    Skill, User,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Single entry point for every API call made by the panels and the CLI.
#[derive(Clone)]
pub struct ApiClient {
    backend: Arc<dyn Backend>,
}

impl ApiClient {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Picks the mock or live backend from the configuration flag.
    /// `store` is only used in mock mode.
    pub fn from_config<C: ConfigProvider>(config: &C, store: MockStore) -> Self {
        if config.use_mock() {
            tracing::info!("🧪 Using in-memory mock backend");
            Self::new(Arc::new(MockBackend::new(store)))
        } else {
            tracing::info!("🌐 Using live backend at {}", config.api_base_url());
            let backend =
                HttpBackend::new(config.api_base_url()).with_timeout(config.timeout_seconds());
            Self::new(Arc::new(backend))
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Raw call: logical path, method and optional JSON body in, parsed JSON out.
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value> {
        tracing::debug!("[{}] {} {}", self.backend.name(), method, path);
        let mut request = ApiRequest::new(method, path);
        request.body = body;
        self.backend.call(request).await
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.get("/api/skills").await
    }

    pub async fn list_opportunities(&self) -> Result<Vec<Opportunity>> {
        self.get("/api/opportunities").await
    }

    pub async fn create_opportunity(
        &self,
        request: &CreateOpportunityRequest,
    ) -> Result<Opportunity> {
        self.post("/api/opportunities", request).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get("/api/users").await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        self.post("/api/users", request).await
    }

    pub async fn matches_for(&self, user_id: &str) -> Result<Vec<Opportunity>> {
        // id 作為單一路徑片段編碼
        let path = format!("/api/users/{}/matches", urlencoding::encode(user_id));
        self.get(&path).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.call(path, Method::GET, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        body.validate()?;
        let value = self
            .call(path, Method::POST, Some(serde_json::to_value(body)?))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
