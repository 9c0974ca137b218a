/// E2E Test: Demo Session
///
/// Drives the seeded demo profile through the presentation layer:
/// 1. Startup rewards the seeded 7-day streak
/// 2. Challenge participation and requirement bonuses
/// 3. Achievement unlock notifications
/// 4. Journeys and streak milestones
use youmatter_app::application::commands::engagement_commands::{
    CompleteStageCommand, MarkAllNotificationsReadCommand,
};
use youmatter_app::application::commands::progression_commands::{
    CompleteChallengeCommand, CompleteRequirementCommand, JoinChallengeCommand,
    UpdateAchievementProgressCommand, UpdateStreakCommand,
};
use youmatter_app::application::commands::CommandHandler;
use youmatter_app::application::config::EngagementConfig;
use youmatter_app::presentation::state::AppState;
use youmatter_domain::shared::DomainError;

async fn demo_state() -> AppState {
    AppState::new(EngagementConfig::default())
        .await
        .expect("demo state")
}

#[tokio::test]
async fn e2e_startup_rewards_seeded_streak() {
    let state = demo_state().await;

    let rewards = state.queries.ledger.get_rewards_overview().await;
    assert_eq!(rewards.rewards.len(), 1);
    assert_eq!(rewards.rewards[0].title, "Streak Milestone");
    assert_eq!(rewards.total_reward_points, 50);
    assert_eq!(rewards.points_by_type, vec![("streak".to_string(), 50)]);

    let user = state.queries.ledger.get_user_progress().await;
    assert_eq!(user.level, 5);
    assert_eq!(user.total_points, 2550);
}

#[tokio::test]
async fn e2e_challenge_flow() {
    let state = demo_state().await;
    let handlers = &state.command_handlers;

    // ============================================================
    // Seeded challenges are already joined
    // ============================================================
    let join = handlers
        .join_challenge
        .handle(JoinChallengeCommand {
            challenge_id: "1".to_string(),
        })
        .await
        .unwrap();
    assert!(!join.joined);
    assert_eq!(join.bonus_experience, 0);

    // ============================================================
    // Requirement steps: 6/8, 1/1, 0/1 -> all met
    // ============================================================
    let mut last_progress = 0;
    for requirement_id in ["3", "1", "1"] {
        let result = handlers
            .complete_requirement
            .handle(CompleteRequirementCommand {
                challenge_id: "1".to_string(),
                requirement_id: requirement_id.to_string(),
            })
            .await
            .unwrap();
        assert!(result.advanced);
        last_progress = result.challenge.unwrap().progress;
    }
    assert_eq!(last_progress, 5);

    let met = handlers
        .complete_requirement
        .handle(CompleteRequirementCommand {
            challenge_id: "1".to_string(),
            requirement_id: "1".to_string(),
        })
        .await
        .unwrap();
    assert!(!met.advanced);

    let user = state.queries.ledger.get_user_progress().await;
    assert_eq!(user.experience, 2250 + 30);

    // ============================================================
    // Completion is terminal
    // ============================================================
    let completed = handlers
        .complete_challenge
        .handle(CompleteChallengeCommand {
            challenge_id: "1".to_string(),
        })
        .await
        .unwrap()
        .unwrap();
    assert!(!completed.is_active);

    let summary = state.queries.ledger.get_summary().await;
    assert_eq!(summary.completed_challenges, 1);
    assert_eq!(summary.active_challenges, 1);

    let dashboard = state.queries.ledger.get_dashboard().await;
    assert_eq!(dashboard.active_challenges.len(), 1);
    assert_eq!(dashboard.top_leaderboard.len(), 3);
}

#[tokio::test]
async fn e2e_unknown_challenge_query_is_not_found() {
    let state = demo_state().await;

    let result = state.queries.ledger.get_challenge("missing").await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));

    let joined = state.queries.ledger.get_challenges(true).await;
    assert_eq!(joined.len(), 2);
}

#[tokio::test]
async fn e2e_unlock_adds_notification() {
    let state = demo_state().await;
    let handlers = &state.command_handlers;

    handlers
        .mark_all_notifications_read
        .handle(MarkAllNotificationsReadCommand)
        .await
        .unwrap();

    let achievement = handlers
        .update_achievement_progress
        .handle(UpdateAchievementProgressCommand {
            achievement_id: "4".to_string(),
            progress: 5,
        })
        .await
        .unwrap()
        .unwrap();
    assert!(achievement.unlocked_at.is_some());

    let feed = state.queries.ledger.get_notifications(true).await;
    assert_eq!(feed.unread_count, 1);
    assert_eq!(feed.notifications[0].title, "Achievement Unlocked!");
    assert_eq!(
        feed.notifications[0].action_url.as_deref(),
        Some("/achievements")
    );

    // progress never regresses and the unlock is not repeated
    handlers
        .update_achievement_progress
        .handle(UpdateAchievementProgressCommand {
            achievement_id: "4".to_string(),
            progress: 5,
        })
        .await
        .unwrap();
    let summary = state.queries.ledger.get_summary().await;
    assert_eq!(summary.unlocked_achievements, 4);
    assert_eq!(summary.unread_notifications, 1);
}

#[tokio::test]
async fn e2e_journey_and_streak_milestones() {
    let state = demo_state().await;
    let handlers = &state.command_handlers;

    let cmd = CompleteStageCommand {
        journey_id: "journey-healthy-mornings".to_string(),
        stage_id: "jm-1".to_string(),
    };
    assert!(handlers.complete_stage.handle(cmd.clone()).await.unwrap());
    assert!(!handlers.complete_stage.handle(cmd).await.unwrap());

    let journey = state
        .queries
        .ledger
        .get_journey("journey-healthy-mornings")
        .await
        .unwrap();
    assert_eq!(journey.current_stage_index, 1);
    assert_eq!(journey.earned_points, 10);

    for streak in [8, 14, 14] {
        handlers
            .update_streak
            .handle(UpdateStreakCommand { streak })
            .await
            .unwrap();
    }

    let rewards = state.queries.ledger.get_rewards_overview().await;
    assert_eq!(rewards.total_reward_points, 100);
    let user = state.queries.ledger.get_user_progress().await;
    assert_eq!(user.streak, 14);
    assert_eq!(user.longest_streak, 14);
}
