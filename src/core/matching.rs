use crate::core::{Opportunity, User};
use std::collections::HashSet;

/// Number of the opportunity's skills whose id is in `user_skill_ids`.
pub fn match_score(user_skill_ids: &HashSet<&str>, opportunity: &Opportunity) -> u32 {
    let count = opportunity
        .skills
        .iter()
        .filter(|skill| user_skill_ids.contains(skill.id.as_str()))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Annotates every opportunity with its score against `user`.
///
/// Input order is preserved and zero-score opportunities are kept.
pub fn score_opportunities(user: &User, opportunities: &[Opportunity]) -> Vec<Opportunity> {
    let user_skill_ids: HashSet<&str> = user.skills.iter().map(|s| s.id.as_str()).collect();

    opportunities
        .iter()
        .map(|opportunity| Opportunity {
            match_score: Some(match_score(&user_skill_ids, opportunity)),
            ..opportunity.clone()
        })
        .collect()
}

/// 依分數由高到低排序（穩定排序，同分保留原順序）
pub fn rank_by_score(mut scored: Vec<Opportunity>) -> Vec<Opportunity> {
    scored.sort_by(|a, b| b.match_score.unwrap_or(0).cmp(&a.match_score.unwrap_or(0)));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Skill;
    use chrono::Utc;

    fn skill(id: &str) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_uppercase(),
        }
    }

    fn opportunity(id: &str, skills: &[&str]) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            created_at: Utc::now(),
            skills: skills.iter().map(|s| skill(s)).collect(),
            match_score: None,
        }
    }

    fn user(skills: &[&str]) -> User {
        User {
            id: "u".to_string(),
            name: "Tester".to_string(),
            email: "tester@example.com".to_string(),
            skills: skills.iter().map(|s| skill(s)).collect(),
        }
    }

    #[test]
    fn scores_keep_input_order_and_zero_scores() {
        let opportunities = vec![
            opportunity("o1", &["a"]),
            opportunity("o2", &["c"]),
            opportunity("o3", &["a", "b"]),
        ];

        let scored = score_opportunities(&user(&["a", "b"]), &opportunities);

        let ids: Vec<&str> = scored.iter().map(|o| o.id.as_str()).collect();
        let scores: Vec<Option<u32>> = scored.iter().map(|o| o.match_score).collect();
        assert_eq!(ids, vec!["o1", "o2", "o3"]);
        assert_eq!(scores, vec![Some(1), Some(0), Some(2)]);
    }

    #[test]
    fn user_without_skills_scores_zero_everywhere() {
        let scored = score_opportunities(&user(&[]), &[opportunity("o1", &["a", "b"])]);
        assert_eq!(scored[0].match_score, Some(0));
    }

    #[test]
    fn rank_by_score_is_stable_for_ties() {
        let opportunities = vec![
            opportunity("o1", &["a"]),
            opportunity("o2", &["c"]),
            opportunity("o3", &["a", "b"]),
            opportunity("o4", &["b"]),
        ];

        let ranked = rank_by_score(score_opportunities(&user(&["a", "b"]), &opportunities));

        let ids: Vec<&str> = ranked.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o3", "o1", "o4", "o2"]);
    }
}
