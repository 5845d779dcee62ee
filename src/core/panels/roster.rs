use super::{toggle_selection, FormStatus, Generation, Panel};
use crate::core::data_access::ApiClient;
use crate::core::{CreateUserRequest, Skill, User};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct UserRosterState {
    pub skills: Vec<Skill>,
    pub users: Vec<User>,
    pub name: String,
    pub email: String,
    pub selected_skill_ids: Vec<String>,
    pub status: FormStatus<User>,
    pub last_error: Option<String>,
}

/// User list plus the registration form.
pub struct UserRosterPanel {
    client: Arc<ApiClient>,
    generation: Generation,
    state: Mutex<UserRosterState>,
}

impl UserRosterPanel {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            generation: Generation::default(),
            state: Mutex::new(UserRosterState::default()),
        }
    }

    pub async fn snapshot(&self) -> UserRosterState {
        self.state.lock().await.clone()
    }

    pub async fn set_name(&self, name: impl Into<String>) {
        self.state.lock().await.name = name.into();
    }

    pub async fn set_email(&self, email: impl Into<String>) {
        self.state.lock().await.email = email.into();
    }

    pub async fn toggle_skill(&self, skill_id: &str) {
        toggle_selection(&mut self.state.lock().await.selected_skill_ids, skill_id);
    }

    /// Creates the user, then reloads the whole list from the API.
    pub async fn submit(&self) {
        let ticket = self.generation.current();
        let request = {
            let mut state = self.state.lock().await;
            state.status = FormStatus::Submitting;
            CreateUserRequest {
                name: state.name.clone(),
                email: state.email.clone(),
                skill_ids: state.selected_skill_ids.clone(),
            }
        };

        let created = self.client.create_user(&request).await;
        let created = match created {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("roster: submit failed: {}", e);
                if self.generation.is_current(ticket) {
                    self.state.lock().await.status = FormStatus::Failed(e.to_string());
                }
                return;
            }
        };

        tracing::info!("✅ Registered user {}", created.id);
        let users = self.client.list_users().await;

        if !self.generation.is_current(ticket) {
            tracing::debug!("roster: panel changed while submitting, dropping result");
            return;
        }

        let mut state = self.state.lock().await;
        state.name.clear();
        state.email.clear();
        state.selected_skill_ids.clear();
        state.status = FormStatus::Succeeded(created);
        apply_users(&mut state, users);
    }
}

fn apply_users(state: &mut UserRosterState, users: Result<Vec<User>>) {
    match users {
        Ok(users) => {
            state.users = users;
            state.last_error = None;
        }
        Err(e) => {
            tracing::warn!("roster: failed to load users: {}", e);
            state.last_error = Some(e.to_string());
        }
    }
}

#[async_trait]
impl Panel for UserRosterPanel {
    fn name(&self) -> &'static str {
        "roster"
    }

    async fn activate(&self) {
        let ticket = self.generation.advance();
        let skills = self.client.list_skills().await;
        let users = self.client.list_users().await;

        if !self.generation.is_current(ticket) {
            tracing::debug!("roster: discarding stale responses");
            return;
        }

        let mut state = self.state.lock().await;
        match skills {
            Ok(skills) => state.skills = skills,
            Err(e) => {
                tracing::warn!("roster: failed to load skills: {}", e);
                state.last_error = Some(e.to_string());
                return;
            }
        }
        apply_users(&mut state, users);
    }

    fn deactivate(&self) {
        self.generation.advance();
    }
}
