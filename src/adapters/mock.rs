use crate::core::mock_store::MockStore;
use crate::core::routes::MockRoute;
use crate::core::{ApiRequest, Backend, CreateOpportunityRequest, CreateUserRequest};
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Answers API requests from an in-memory [`MockStore`].
#[derive(Clone)]
pub struct MockBackend {
    store: Arc<Mutex<MockStore>>,
}

impl MockBackend {
    pub fn new(store: MockStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Shared handle to the underlying store, mostly for inspection in tests.
    pub fn store(&self) -> Arc<Mutex<MockStore>> {
        Arc::clone(&self.store)
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn call(&self, request: ApiRequest) -> Result<serde_json::Value> {
        let route = MockRoute::resolve(&request.method, &request.path)?;
        tracing::debug!("🧪 Mock route {:?}", route);

        let value = match route {
            MockRoute::ListSkills => serde_json::to_value(self.store.lock().await.list_skills())?,
            MockRoute::ListOpportunities => {
                serde_json::to_value(self.store.lock().await.list_opportunities())?
            }
            MockRoute::CreateOpportunity => {
                let body: CreateOpportunityRequest = parse_body(request.body)?;
                let created = self.store.lock().await.create_opportunity(body);
                serde_json::to_value(created)?
            }
            MockRoute::ListUsers => serde_json::to_value(self.store.lock().await.list_users())?,
            MockRoute::CreateUser => {
                let body: CreateUserRequest = parse_body(request.body)?;
                let created = self.store.lock().await.create_user(body);
                serde_json::to_value(created)?
            }
            MockRoute::UserMatches { user_id } => {
                serde_json::to_value(self.store.lock().await.matches_for(&user_id))?
            }
        };

        Ok(value)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn parse_body<T>(body: Option<serde_json::Value>) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let body = body.ok_or_else(|| BoardError::ValidationError {
        message: "request body is required".to_string(),
    })?;
    let parsed: T = serde_json::from_value(body)?;
    parsed.validate()?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn unknown_route_fails_instead_of_succeeding() {
        let backend = MockBackend::new(MockStore::seeded());

        let result = backend
            .call(ApiRequest::post("/api/unknown", json!({})))
            .await;

        assert!(matches!(
            result,
            Err(BoardError::RouteNotImplemented { .. })
        ));
    }

    #[tokio::test]
    async fn post_without_body_is_rejected() {
        let backend = MockBackend::new(MockStore::seeded());

        let result = backend
            .call(ApiRequest::new(Method::POST, "/api/users"))
            .await;

        assert!(matches!(result, Err(BoardError::ValidationError { .. })));
        assert_eq!(backend.store().lock().await.list_users().len(), 2);
    }

    #[tokio::test]
    async fn create_user_writes_through_to_store() {
        let backend = MockBackend::new(MockStore::seeded());

        let created = backend
            .call(ApiRequest::post(
                "/api/users",
                json!({"name": "Carol", "email": "carol@example.com", "skillIds": ["skill-5", "skill-1"]}),
            ))
            .await
            .unwrap();

        assert_eq!(created["skills"][0]["name"], "Rust");
        assert_eq!(created["skills"][1]["name"], "Docker");
        let users = backend.store().lock().await.list_users();
        assert_eq!(users.last().unwrap().name, "Carol");
    }

    #[tokio::test]
    async fn matches_route_serializes_scores() {
        let backend = MockBackend::new(MockStore::seeded());

        let matches = backend
            .call(ApiRequest::get("/api/users/user-2/matches"))
            .await
            .unwrap();

        let scores: Vec<u64> = matches
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["matchScore"].as_u64().unwrap())
            .collect();
        assert_eq!(scores, vec![2, 1, 0]);
    }
}
