use anyhow::Result;
use chrono::Utc;
use reqwest::Method;
use serde_json::json;
use skill_board::core::{CreateOpportunityRequest, CreateUserRequest};
use skill_board::{ApiClient, BoardError, MockBackend, MockStore, Opportunity, Skill, User};
use std::sync::Arc;

fn skill(id: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: format!("Skill {}", id),
    }
}

fn client_for(store: MockStore) -> ApiClient {
    ApiClient::new(Arc::new(MockBackend::new(store)))
}

fn ids(skills: &[Skill]) -> Vec<&str> {
    skills.iter().map(|s| s.id.as_str()).collect()
}

#[tokio::test]
async fn created_records_pick_skills_in_catalog_order() -> Result<()> {
    let client = client_for(MockStore::with_skills(vec![skill("A"), skill("B"), skill("C")]));

    let opportunity = client
        .create_opportunity(&CreateOpportunityRequest {
            title: "Job".to_string(),
            description: String::new(),
            skill_ids: vec!["C".to_string(), "missing".to_string(), "A".to_string()],
        })
        .await?;
    let user = client
        .create_user(&CreateUserRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            skill_ids: vec!["B".to_string(), "A".to_string(), "nope".to_string()],
        })
        .await?;

    assert_eq!(ids(&opportunity.skills), vec!["A", "C"]);
    assert_eq!(ids(&user.skills), vec!["A", "B"]);
    Ok(())
}

#[tokio::test]
async fn newest_opportunity_comes_first() -> Result<()> {
    let client = client_for(MockStore::seeded());

    let first = client
        .create_opportunity(&CreateOpportunityRequest {
            title: "First".to_string(),
            description: String::new(),
            skill_ids: vec![],
        })
        .await?;
    let second = client
        .create_opportunity(&CreateOpportunityRequest {
            title: "Second".to_string(),
            description: String::new(),
            skill_ids: vec![],
        })
        .await?;

    let listed = client.list_opportunities().await?;
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    Ok(())
}

#[tokio::test]
async fn matches_keep_store_order_and_zero_scores() -> Result<()> {
    let mut store = MockStore::with_skills(vec![skill("A"), skill("B"), skill("C")]);
    // 依序建立，店內順序為最新在前：[A,B], [C], [A]
    for skill_ids in [vec!["A"], vec!["C"], vec!["A", "B"]] {
        store.create_opportunity(CreateOpportunityRequest {
            title: format!("needs {}", skill_ids.join("+")),
            description: String::new(),
            skill_ids: skill_ids.into_iter().map(String::from).collect(),
        });
    }
    let user = store.create_user(CreateUserRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        skill_ids: vec!["A".to_string(), "B".to_string()],
    });
    let client = client_for(store);

    let matches = client.matches_for(&user.id).await?;

    let titles: Vec<&str> = matches.iter().map(|o| o.title.as_str()).collect();
    let scores: Vec<Option<u32>> = matches.iter().map(|o| o.match_score).collect();
    assert_eq!(titles, vec!["needs A+B", "needs C", "needs A"]);
    assert_eq!(scores, vec![Some(2), Some(0), Some(1)]);
    Ok(())
}

#[test]
fn scores_follow_opportunity_order_not_score_order() {
    let opportunities: Vec<Opportunity> = [vec!["A"], vec!["C"], vec!["A", "B"]]
        .into_iter()
        .enumerate()
        .map(|(i, skill_ids)| Opportunity {
            id: format!("o{}", i + 1),
            title: String::new(),
            description: String::new(),
            created_at: Utc::now(),
            skills: skill_ids.into_iter().map(skill).collect(),
            match_score: None,
        })
        .collect();
    let user = User {
        id: "u1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        skills: vec![skill("A"), skill("B")],
    };

    let scored = skill_board::core::matching::score_opportunities(&user, &opportunities);

    let scores: Vec<Option<u32>> = scored.iter().map(|o| o.match_score).collect();
    assert_eq!(scores, vec![Some(1), Some(0), Some(2)]);
}

#[tokio::test]
async fn unknown_user_has_no_matches() -> Result<()> {
    let client = client_for(MockStore::seeded());
    assert!(client.matches_for("unknown-id").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn ids_with_path_characters_are_just_unknown_users() -> Result<()> {
    let client = client_for(MockStore::seeded());

    for user_id in ["", "a/b", "user-1?x=1", "user-1#top", "%2F"] {
        let matches = client.matches_for(user_id).await?;
        assert!(matches.is_empty(), "{:?} should have no matches", user_id);
    }
    Ok(())
}

#[tokio::test]
async fn user_with_empty_skill_ids_is_created() -> Result<()> {
    let client = client_for(MockStore::seeded());

    let user = client
        .create_user(&CreateUserRequest {
            name: "Erin".to_string(),
            email: "erin@example.com".to_string(),
            skill_ids: vec![],
        })
        .await?;

    assert!(user.skills.is_empty());
    let users = client.list_users().await?;
    assert_eq!(users.last().map(|u| u.id.as_str()), Some(user.id.as_str()));
    Ok(())
}

#[tokio::test]
async fn unknown_mock_route_is_not_implemented() {
    let client = client_for(MockStore::seeded());

    let result = client
        .call("/api/unknown", Method::POST, Some(json!({"anything": true})))
        .await;

    match result {
        Err(BoardError::RouteNotImplemented { method, path }) => {
            assert_eq!(method, "POST");
            assert_eq!(path, "/api/unknown");
        }
        other => panic!("expected route-not-implemented, got {:?}", other),
    }
}

#[tokio::test]
async fn separate_stores_do_not_share_state() -> Result<()> {
    let first = client_for(MockStore::seeded());
    let second = client_for(MockStore::seeded());

    first
        .create_user(&CreateUserRequest {
            name: "Only Here".to_string(),
            email: "here@example.com".to_string(),
            skill_ids: vec![],
        })
        .await?;

    assert_eq!(first.list_users().await?.len(), 3);
    assert_eq!(second.list_users().await?.len(), 2);
    Ok(())
}
