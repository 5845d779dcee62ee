use crate::domain::model::ApiRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a logical API request is answered: the remote server or the
/// in-memory mock store.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn call(&self, request: ApiRequest) -> Result<serde_json::Value>;

    fn name(&self) -> &'static str;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn use_mock(&self) -> bool;
    fn timeout_seconds(&self) -> Option<u64>;
}
