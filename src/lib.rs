pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{AppConfig, BackendMode};

pub use adapters::{HttpBackend, MockBackend};
pub use self::core::{data_access::ApiClient, mock_store::MockStore};
pub use domain::model::{Opportunity, Skill, User};
pub use utils::error::{BoardError, Result};
