use crate::utils::error::{BoardError, Result};
use reqwest::Method;

/// The fixed route table understood by the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockRoute {
    ListSkills,
    ListOpportunities,
    CreateOpportunity,
    ListUsers,
    CreateUser,
    UserMatches { user_id: String },
}

impl MockRoute {
    /// Literal match on method and path; anything else is an explicit error.
    pub fn resolve(method: &Method, path: &str) -> Result<Self> {
        let route = match (method.as_str(), path) {
            ("GET", "/api/skills") => Some(MockRoute::ListSkills),
            ("GET", "/api/opportunities") => Some(MockRoute::ListOpportunities),
            ("POST", "/api/opportunities") => Some(MockRoute::CreateOpportunity),
            ("GET", "/api/users") => Some(MockRoute::ListUsers),
            ("POST", "/api/users") => Some(MockRoute::CreateUser),
            ("GET", _) => {
                matches_user_id(path).map(|user_id| MockRoute::UserMatches { user_id })
            }
            _ => None,
        };

        route.ok_or_else(|| BoardError::RouteNotImplemented {
            method: method.to_string(),
            path: path.to_string(),
        })
    }
}

// /api/users/{id}/matches, id is one percent-encoded segment (may be empty)
fn matches_user_id(path: &str) -> Option<String> {
    let segment = path
        .strip_prefix("/api/users/")?
        .strip_suffix("/matches")?;
    if segment.contains('/') {
        return None;
    }
    urlencoding::decode(segment).ok().map(|id| id.into_owned())
}
