pub mod data_access;
pub mod matching;
pub mod mock_store;
pub mod panels;
pub mod routes;

pub use crate::domain::model::{
    ApiRequest, CreateOpportunityRequest, CreateUserRequest, Opportunity, Skill, User,
};
pub use crate::domain::ports::{Backend, ConfigProvider};
pub use crate::utils::error::Result;
