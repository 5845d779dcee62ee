use crate::core::matching::score_opportunities;
use crate::core::{CreateOpportunityRequest, CreateUserRequest, Opportunity, Skill, User};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

/// In-memory stand-in for the remote backend.
///
/// Skills are fixed at construction; opportunities and users are only ever
/// appended. Each instance is independent, so tests can build their own.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    skills: Vec<Skill>,
    /// 最新的放在最前面
    opportunities: Vec<Opportunity>,
    users: Vec<User>,
}

impl MockStore {
    /// Store preloaded with the demo dataset.
    pub fn seeded() -> Self {
        let skills: Vec<Skill> = [
            ("skill-1", "Rust"),
            ("skill-2", "TypeScript"),
            ("skill-3", "React"),
            ("skill-4", "SQL"),
            ("skill-5", "Docker"),
            ("skill-6", "Python"),
            ("skill-7", "UX Design"),
            ("skill-8", "Communication"),
        ]
        .into_iter()
        .map(|(id, name)| Skill {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        let mut store = Self {
            skills,
            opportunities: Vec::new(),
            users: Vec::new(),
        };

        store.opportunities = vec![
            store.build_opportunity(
                "opp-3",
                "Frontend Engineer",
                "Own the React component library and design system.",
                seed_time(1_717_236_000),
                &["skill-2", "skill-3", "skill-7"],
            ),
            store.build_opportunity(
                "opp-2",
                "Data Analyst",
                "Turn product telemetry into weekly insight reports.",
                seed_time(1_714_557_600),
                &["skill-4", "skill-6", "skill-8"],
            ),
            store.build_opportunity(
                "opp-1",
                "Backend Engineer",
                "Design and operate the matching API services.",
                seed_time(1_711_965_600),
                &["skill-1", "skill-4", "skill-5"],
            ),
        ];

        store.users = vec![
            store.build_user("user-1", "Alice Chen", "alice@example.com", &["skill-1", "skill-4"]),
            store.build_user(
                "user-2",
                "Bob Lin",
                "bob@example.com",
                &["skill-2", "skill-3", "skill-8"],
            ),
        ];

        store
    }

    /// Store with no data at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store with the given skill catalog and nothing else.
    pub fn with_skills(skills: Vec<Skill>) -> Self {
        Self {
            skills,
            ..Self::default()
        }
    }

    pub fn list_skills(&self) -> Vec<Skill> {
        self.skills.clone()
    }

    /// All opportunities, newest first. Equal timestamps keep store order.
    pub fn list_opportunities(&self) -> Vec<Opportunity> {
        let mut opportunities = self.opportunities.clone();
        opportunities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        opportunities
    }

    pub fn create_opportunity(&mut self, request: CreateOpportunityRequest) -> Opportunity {
        let opportunity = Opportunity {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            created_at: Utc::now(),
            skills: self.select_skills(&request.skill_ids),
            match_score: None,
        };

        tracing::debug!(
            "Mock store created opportunity {} with {} skills",
            opportunity.id,
            opportunity.skills.len()
        );
        self.opportunities.insert(0, opportunity.clone());
        opportunity
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn create_user(&mut self, request: CreateUserRequest) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            skills: self.select_skills(&request.skill_ids),
        };

        tracing::debug!(
            "Mock store created user {} with {} skills",
            user.id,
            user.skills.len()
        );
        self.users.push(user.clone());
        user
    }

    /// Every opportunity in store order, scored against the user's skills.
    /// Unknown users get an empty list.
    pub fn matches_for(&self, user_id: &str) -> Vec<Opportunity> {
        match self.users.iter().find(|u| u.id == user_id) {
            Some(user) => score_opportunities(user, &self.opportunities),
            None => {
                tracing::debug!("Mock store has no user {}, returning no matches", user_id);
                Vec::new()
            }
        }
    }

    /// 依照技能目錄順序挑出存在的技能，忽略未知 id
    fn select_skills(&self, skill_ids: &[String]) -> Vec<Skill> {
        let wanted: HashSet<&str> = skill_ids.iter().map(String::as_str).collect();
        self.skills
            .iter()
            .filter(|skill| wanted.contains(skill.id.as_str()))
            .cloned()
            .collect()
    }

    fn build_opportunity(
        &self,
        id: &str,
        title: &str,
        description: &str,
        created_at: DateTime<Utc>,
        skill_ids: &[&str],
    ) -> Opportunity {
        let ids: Vec<String> = skill_ids.iter().map(|s| s.to_string()).collect();
        Opportunity {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            created_at,
            skills: self.select_skills(&ids),
            match_score: None,
        }
    }

    fn build_user(&self, id: &str, name: &str, email: &str, skill_ids: &[&str]) -> User {
        let ids: Vec<String> = skill_ids.iter().map(|s| s.to_string()).collect();
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            skills: self.select_skills(&ids),
        }
    }
}

fn seed_time(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default()
}
