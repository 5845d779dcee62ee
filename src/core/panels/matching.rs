use super::{Generation, Panel};
use crate::core::data_access::ApiClient;
use crate::core::{Opportunity, User};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct MatchingState {
    pub users: Vec<User>,
    pub selected_user_id: Option<String>,
    pub matches: Vec<Opportunity>,
    pub last_error: Option<String>,
}

impl MatchingState {
    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected_user_id.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }
}

/// Pick a user, see every opportunity with its overlap score.
pub struct MatchingPanel {
    client: Arc<ApiClient>,
    generation: Generation,
    selection: Generation,
    state: Mutex<MatchingState>,
}

impl MatchingPanel {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            generation: Generation::default(),
            selection: Generation::default(),
            state: Mutex::new(MatchingState::default()),
        }
    }

    pub async fn snapshot(&self) -> MatchingState {
        self.state.lock().await.clone()
    }

    /// Changes the selected user and reloads matches; `None` clears them.
    pub async fn select_user(&self, user_id: Option<String>) {
        let activation = self.generation.current();
        let selection = self.selection.advance();

        // 切換使用者時先清掉舊的配對結果
        let mut state = self.state.lock().await;
        state.selected_user_id = user_id.clone();
        state.matches.clear();
        let Some(user_id) = user_id else {
            return;
        };
        drop(state);

        let result = self.client.matches_for(&user_id).await;

        if !self.generation.is_current(activation) || !self.selection.is_current(selection) {
            tracing::debug!("matching: discarding stale matches for {}", user_id);
            return;
        }

        let mut state = self.state.lock().await;
        match result {
            Ok(matches) => {
                tracing::debug!("matching: {} opportunities for {}", matches.len(), user_id);
                state.matches = matches;
                state.last_error = None;
            }
            Err(e) => {
                tracing::warn!("matching: failed to load matches for {}: {}", user_id, e);
                state.last_error = Some(e.to_string());
            }
        }
    }

    /// Skill names of the selected user, for the side panel.
    pub async fn selected_user_skill_names(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state
            .selected_user()
            .map(|user| user.skill_names().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Panel for MatchingPanel {
    fn name(&self) -> &'static str {
        "matching"
    }

    async fn activate(&self) {
        let ticket = self.generation.advance();
        let result = self.client.list_users().await;

        if !self.generation.is_current(ticket) {
            tracing::debug!("matching: discarding stale users response");
            return;
        }

        let mut state = self.state.lock().await;
        match result {
            Ok(users) => {
                state.users = users;
                state.last_error = None;
            }
            Err(e) => {
                tracing::warn!("matching: failed to load users: {}", e);
                state.last_error = Some(e.to_string());
            }
        }
    }

    fn deactivate(&self) {
        self.generation.advance();
    }
}
