//! Headless view controllers.
//!
//! Each panel owns its local state and talks to the API only through
//! [`ApiClient`](crate::core::data_access::ApiClient). Panels never share
//! state and never retry; failures are recorded once and wait for the next
//! activation or submit.
//!
//! Every activation (and deactivation) advances the panel's [`Generation`].
//! A response is applied only if it was dispatched under the generation that
//! is still current, so a slow fetch from an earlier activation cannot
//! overwrite newer state.

pub mod creation;
pub mod listing;
pub mod matching;
pub mod roster;

pub use creation::{CreationPanel, CreationState};
pub use listing::{ListingPanel, ListingState};
pub use matching::{MatchingPanel, MatchingState};
pub use roster::{UserRosterPanel, UserRosterState};

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

#[async_trait]
pub trait Panel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches whatever the panel shows. Errors are kept in the panel state.
    async fn activate(&self);

    /// Drops any response still in flight.
    fn deactivate(&self);
}

/// Monotonic counter used to discard stale responses.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current() == ticket
    }
}

/// Outcome of the last form submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormStatus<T> {
    #[default]
    Idle,
    Submitting,
    Succeeded(T),
    /// 錯誤訊息原樣顯示
    Failed(String),
}

/// Flips `id` in or out of a multi-select.
pub(crate) fn toggle_selection(selected: &mut Vec<String>, id: &str) {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.to_string());
    }
}
