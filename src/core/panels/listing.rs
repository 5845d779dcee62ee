use super::{Generation, Panel};
use crate::core::data_access::ApiClient;
use crate::core::Opportunity;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct ListingState {
    pub opportunities: Vec<Opportunity>,
    pub loaded: bool,
    pub last_error: Option<String>,
}

/// Shows every opportunity; fetched once per activation.
pub struct ListingPanel {
    client: Arc<ApiClient>,
    generation: Generation,
    state: Mutex<ListingState>,
}

impl ListingPanel {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            generation: Generation::default(),
            state: Mutex::new(ListingState::default()),
        }
    }

    pub async fn snapshot(&self) -> ListingState {
        self.state.lock().await.clone()
    }
}

#[async_trait]
impl Panel for ListingPanel {
    fn name(&self) -> &'static str {
        "listing"
    }

    async fn activate(&self) {
        let ticket = self.generation.advance();
        let result = self.client.list_opportunities().await;

        if !self.generation.is_current(ticket) {
            tracing::debug!("listing: discarding stale opportunities response");
            return;
        }

        let mut state = self.state.lock().await;
        match result {
            Ok(opportunities) => {
                tracing::debug!("listing: loaded {} opportunities", opportunities.len());
                state.opportunities = opportunities;
                state.loaded = true;
                state.last_error = None;
            }
            Err(e) => {
                tracing::warn!("listing: failed to load opportunities: {}", e);
                state.last_error = Some(e.to_string());
            }
        }
    }

    fn deactivate(&self) {
        self.generation.advance();
    }
}
