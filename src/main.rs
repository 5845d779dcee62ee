use clap::Parser;
use skill_board::core::matching::rank_by_score;
use skill_board::core::panels::{
    CreationPanel, FormStatus, ListingPanel, MatchingPanel, Panel, UserRosterPanel,
};
use skill_board::core::{CreateOpportunityRequest, CreateUserRequest};
use skill_board::utils::error::ErrorSeverity;
use skill_board::utils::logger;
use skill_board::{ApiClient, AppConfig, CliConfig, Command, MockStore, Opportunity, Result};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_format);
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!("❌ Command failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(command: Command, config: &AppConfig) -> Result<()> {
    let client = ApiClient::from_config(config, MockStore::seeded());

    match command {
        Command::Skills => {
            for skill in client.list_skills().await? {
                println!("{}\t{}", skill.id, skill.name);
            }
        }
        Command::Opportunities => {
            for opportunity in client.list_opportunities().await? {
                print_opportunity(&opportunity);
            }
        }
        Command::CreateOpportunity {
            title,
            description,
            skill_ids,
        } => {
            let created = client
                .create_opportunity(&CreateOpportunityRequest {
                    title,
                    description,
                    skill_ids,
                })
                .await?;
            println!("✅ Created opportunity {}", created.id);
            print_opportunity(&created);
        }
        Command::Users => {
            for user in client.list_users().await? {
                println!(
                    "{}\t{} <{}>\t[{}]",
                    user.id,
                    user.name,
                    user.email,
                    user.skill_names().join(", ")
                );
            }
        }
        Command::CreateUser {
            name,
            email,
            skill_ids,
        } => {
            let created = client
                .create_user(&CreateUserRequest {
                    name,
                    email,
                    skill_ids,
                })
                .await?;
            println!("✅ Registered user {} ({})", created.name, created.id);
        }
        Command::Matches { user_id, ranked } => {
            let mut matches = client.matches_for(&user_id).await?;
            if matches.is_empty() {
                println!("No matches for user {}", user_id);
            }
            if ranked {
                matches = rank_by_score(matches);
            }
            for opportunity in &matches {
                print_opportunity(opportunity);
            }
        }
        Command::Demo => run_demo(client).await,
    }

    Ok(())
}

async fn run_demo(client: ApiClient) {
    let client = Arc::new(client);
    tracing::info!("🚀 Running panel demo against the {} backend", client.backend_name());

    let listing = ListingPanel::new(Arc::clone(&client));
    listing.activate().await;
    let listed = listing.snapshot().await;
    println!("📋 {} opportunities", listed.opportunities.len());
    if let Some(e) = &listed.last_error {
        println!("⚠️  listing: {}", e);
    }

    let creation = CreationPanel::new(Arc::clone(&client));
    creation.activate().await;
    creation.set_title("Site Reliability Engineer").await;
    creation
        .set_description("Keep the matching API fast and available.")
        .await;
    for skill_id in ["skill-5", "skill-1"] {
        creation.toggle_skill(skill_id).await;
    }
    creation.submit().await;
    match creation.snapshot().await.status {
        FormStatus::Succeeded(created) => println!("✅ Posted \"{}\"", created.title),
        FormStatus::Failed(message) => println!("❌ {}", message),
        _ => {}
    }

    let roster = UserRosterPanel::new(Arc::clone(&client));
    roster.activate().await;
    roster.set_name("Dana Wu").await;
    roster.set_email("dana@example.com").await;
    for skill_id in ["skill-1", "skill-5", "skill-8"] {
        roster.toggle_skill(skill_id).await;
    }
    roster.submit().await;
    let roster_state = roster.snapshot().await;
    let new_user = match &roster_state.status {
        FormStatus::Succeeded(user) => {
            println!("✅ Registered {} ({} users)", user.name, roster_state.users.len());
            Some(user.id.clone())
        }
        FormStatus::Failed(message) => {
            println!("❌ {}", message);
            None
        }
        _ => None,
    };

    let matching = MatchingPanel::new(client);
    matching.activate().await;
    matching.select_user(new_user).await;
    println!(
        "🧩 Skills: {}",
        matching.selected_user_skill_names().await.join(", ")
    );
    for opportunity in &matching.snapshot().await.matches {
        print_opportunity(opportunity);
    }
}

fn print_opportunity(opportunity: &Opportunity) {
    let skills: Vec<&str> = opportunity.skills.iter().map(|s| s.name.as_str()).collect();
    let score = opportunity
        .match_score
        .map(|s| format!("score {}\t", s))
        .unwrap_or_default();
    println!(
        "{}{}\t{}\t{}\t[{}]",
        score,
        opportunity.id,
        opportunity.created_at.format("%Y-%m-%d"),
        opportunity.title,
        skills.join(", ")
    );
}
