use anyhow::Context;
use tracing::{info, warn};

use youmatter_app::application::commands::engagement_commands::MarkAllNotificationsReadCommand;
use youmatter_app::application::commands::progression_commands::{
    CompleteRequirementCommand, JoinChallengeCommand,
};
use youmatter_app::application::commands::CommandHandler;
use youmatter_app::application::config::EngagementConfig;
use youmatter_app::presentation::actions::QuickAction;
use youmatter_app::presentation::state::AppState;
use youmatter_infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = EngagementConfig::load();
    let level = config.log_level.as_str();

    match dirs::data_local_dir().map(|dir| dir.join("youmatter").join("logs")) {
        Some(log_dir) => {
            if let Err(e) = logging::init_logger(log_dir, level) {
                logging::init_console_logger(level);
                warn!("File logging unavailable, using console: {:#}", e);
            }
        }
        None => logging::init_console_logger(level),
    }

    info!("🚀 Starting youmatter demo session");
    let state = AppState::new(config)
        .await
        .context("Failed to build application state")?;

    let outcome = state.quick_action(QuickAction::QuickWorkout).await?;
    info!("Quick workout earned {} points", outcome.points);

    let joined = state
        .command_handlers
        .join_challenge
        .handle(JoinChallengeCommand {
            challenge_id: "1".to_string(),
        })
        .await?;
    if !joined.joined {
        info!("Already taking part in challenge 1");
    }

    state
        .command_handlers
        .complete_requirement
        .handle(CompleteRequirementCommand {
            challenge_id: "1".to_string(),
            requirement_id: "3".to_string(),
        })
        .await?;

    state.complete_cbt_exercise().await?;
    state.send_habit_nudge().await?;
    state.add_predictive_challenge().await?;
    state.connect_wearable().await?;
    state.mint_milestone_token().await?;

    let marked = state
        .command_handlers
        .mark_all_notifications_read
        .handle(MarkAllNotificationsReadCommand)
        .await?;
    info!("Marked {} notification(s) as read", marked);

    let dashboard = state.queries.ledger.get_dashboard().await;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    Ok(())
}
