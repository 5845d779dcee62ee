use super::{toggle_selection, FormStatus, Generation, Panel};
use crate::core::data_access::ApiClient;
use crate::core::{CreateOpportunityRequest, Opportunity, Skill};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct CreationState {
    pub skills: Vec<Skill>,
    pub title: String,
    pub description: String,
    pub selected_skill_ids: Vec<String>,
    pub status: FormStatus<Opportunity>,
    pub last_error: Option<String>,
}

/// Form for posting a new opportunity.
///
/// A successful submit clears the form; other panels are not refreshed.
pub struct CreationPanel {
    client: Arc<ApiClient>,
    generation: Generation,
    state: Mutex<CreationState>,
}

impl CreationPanel {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            generation: Generation::default(),
            state: Mutex::new(CreationState::default()),
        }
    }

    pub async fn snapshot(&self) -> CreationState {
        self.state.lock().await.clone()
    }

    pub async fn set_title(&self, title: impl Into<String>) {
        self.state.lock().await.title = title.into();
    }

    pub async fn set_description(&self, description: impl Into<String>) {
        self.state.lock().await.description = description.into();
    }

    pub async fn toggle_skill(&self, skill_id: &str) {
        toggle_selection(&mut self.state.lock().await.selected_skill_ids, skill_id);
    }

    pub async fn submit(&self) {
        let ticket = self.generation.current();
        let request = {
            let mut state = self.state.lock().await;
            state.status = FormStatus::Submitting;
            CreateOpportunityRequest {
                title: state.title.clone(),
                description: state.description.clone(),
                skill_ids: state.selected_skill_ids.clone(),
            }
        };

        let result = self.client.create_opportunity(&request).await;

        if !self.generation.is_current(ticket) {
            tracing::debug!("creation: panel changed while submitting, dropping result");
            return;
        }

        let mut state = self.state.lock().await;
        match result {
            Ok(created) => {
                tracing::info!("✅ Created opportunity {}", created.id);
                state.title.clear();
                state.description.clear();
                state.selected_skill_ids.clear();
                state.status = FormStatus::Succeeded(created);
            }
            Err(e) => {
                tracing::warn!("creation: submit failed: {}", e);
                state.status = FormStatus::Failed(e.to_string());
            }
        }
    }
}

#[async_trait]
impl Panel for CreationPanel {
    fn name(&self) -> &'static str {
        "creation"
    }

    async fn activate(&self) {
        let ticket = self.generation.advance();
        let result = self.client.list_skills().await;

        if !self.generation.is_current(ticket) {
            tracing::debug!("creation: discarding stale skills response");
            return;
        }

        let mut state = self.state.lock().await;
        match result {
            Ok(skills) => {
                state.skills = skills;
                state.last_error = None;
            }
            Err(e) => {
                tracing::warn!("creation: failed to load skills: {}", e);
                state.last_error = Some(e.to_string());
            }
        }
    }

    fn deactivate(&self) {
        self.generation.advance();
    }
}
