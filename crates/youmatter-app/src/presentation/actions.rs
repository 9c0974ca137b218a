use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::application::commands::engagement_commands::*;
use crate::application::commands::progression_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::dtos::{ActivityDto, ChallengeDto, NotificationDto, RewardDto, TokenDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use youmatter_domain::activity::ActivityCategory;
use youmatter_domain::challenge::{ChallengeDefinition, ChallengeKind, Requirement};
use youmatter_domain::notification::NotificationKind;
use youmatter_domain::personalization::Recommendation;
use youmatter_domain::reward::RewardType;
use youmatter_domain::shared::{Category, ChallengeId, RecommendationId, RequirementId};

/// Wellness Warrior: every quick action counts toward it
const QUICK_ACTION_ACHIEVEMENT_ID: &str = "5";

/// One-tap actions on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    WaterIntake,
    QuickWorkout,
    Mindfulness,
    SleepTracking,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::WaterIntake,
        QuickAction::QuickWorkout,
        QuickAction::Mindfulness,
        QuickAction::SleepTracking,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::WaterIntake => "Water Intake",
            QuickAction::QuickWorkout => "Quick Workout",
            QuickAction::Mindfulness => "Mindfulness",
            QuickAction::SleepTracking => "Sleep Tracking",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionOutcome {
    pub points: u32,
    pub activity: ActivityDto,
    pub notification: NotificationDto,
}

impl AppState {
    /// Log a quick activity worth a random 10..60 points
    pub async fn quick_action(&self, action: QuickAction) -> Result<QuickActionOutcome, CommandError> {
        let points: u32 = rand::thread_rng().gen_range(10..60);
        self.quick_action_with_points(action, points).await
    }

    pub async fn quick_action_with_points(
        &self,
        action: QuickAction,
        points: u32,
    ) -> Result<QuickActionOutcome, CommandError> {
        let name = action.title();
        let lower = name.to_lowercase();
        let handlers = &self.command_handlers;

        let activity = handlers
            .log_activity
            .handle(LogActivityCommand {
                title: name.to_string(),
                description: format!("Quick {lower} activity"),
                category: ActivityCategory::Wellness,
                points: i64::from(points),
                duration: Some(5),
            })
            .await?;

        let advanced = handlers
            .advance_achievement_progress
            .handle(AdvanceAchievementProgressCommand {
                achievement_id: QUICK_ACTION_ACHIEVEMENT_ID.to_string(),
                by: 1,
            })
            .await?;
        if advanced.is_none() {
            debug!(
                "Skipping quick action achievement progress: {} not found",
                QUICK_ACTION_ACHIEVEMENT_ID
            );
        }

        let notification = self
            .notify(
                NotificationKind::Reward,
                "Points Earned!",
                format!("You earned {points} points for {lower}!"),
                None,
            )
            .await?;

        info!("Quick action {} earned {} points", name, points);
        Ok(QuickActionOutcome {
            points,
            activity,
            notification,
        })
    }

    // ============================================================
    // Innovation features
    // ============================================================

    pub async fn complete_cbt_exercise(&self) -> Result<RewardDto, CommandError> {
        let reward = self
            .command_handlers
            .grant_reward
            .handle(GrantRewardCommand {
                title: "CBT Reflection".to_string(),
                description: "Completed a guided CBT thought record".to_string(),
                points: 25,
                reward_type: RewardType::Wellness,
            })
            .await?;

        self.notify(
            NotificationKind::Reward,
            "Great Work!",
            "You completed a CBT exercise and earned 25 pts.".to_string(),
            Some("/rewards"),
        )
        .await?;
        Ok(reward)
    }

    pub async fn send_habit_nudge(&self) -> Result<NotificationDto, CommandError> {
        self.command_handlers
            .add_recommendation
            .handle(AddRecommendationCommand {
                recommendation: Recommendation {
                    id: RecommendationId::new(),
                    title: "2-min Reset".to_string(),
                    description: "Take a 2-minute breathing break now".to_string(),
                    target_route: "/activities".to_string(),
                    score: 0.8,
                },
            })
            .await?;

        self.notify(
            NotificationKind::Reminder,
            "Habit Nudge",
            "Quick breathing break suggested for you.".to_string(),
            Some("/personalization"),
        )
        .await
    }

    pub async fn add_predictive_challenge(&self) -> Result<ChallengeDto, CommandError> {
        let challenge = self
            .command_handlers
            .add_challenge
            .handle(AddChallengeCommand {
                definition: ChallengeDefinition {
                    id: ChallengeId::new(),
                    title: "Evening Walk (Predicted)".to_string(),
                    description: "A 10-minute walk suggested based on your pattern.".to_string(),
                    kind: ChallengeKind::Daily,
                    category: Category::Health,
                    points: 40,
                    start_date: None,
                    end_date: None,
                    participants: 1,
                    is_active: true,
                    progress: 0,
                    max_progress: 1,
                    requirements: vec![Requirement {
                        id: RequirementId::from_string("r1"),
                        description: "Walk 10 minutes".to_string(),
                        target: 1,
                        current: 0,
                        unit: "session".to_string(),
                    }],
                },
            })
            .await?;

        self.notify(
            NotificationKind::Challenge,
            "Predictive Challenge Added",
            "An evening walk challenge has been added for you.".to_string(),
            Some("/challenges"),
        )
        .await?;
        Ok(challenge)
    }

    pub async fn connect_wearable(&self) -> Result<RewardDto, CommandError> {
        let reward = self
            .command_handlers
            .grant_reward
            .handle(GrantRewardCommand {
                title: "Device Connected".to_string(),
                description: "Synced wearable data successfully".to_string(),
                points: 15,
                reward_type: RewardType::Micro,
            })
            .await?;

        self.notify(
            NotificationKind::Reward,
            "IoT Connected",
            "Wearable connected. Data syncing started.".to_string(),
            Some("/activities"),
        )
        .await?;
        Ok(reward)
    }

    pub async fn mint_milestone_token(&self) -> Result<TokenDto, CommandError> {
        let token = self
            .command_handlers
            .mint_token
            .handle(MintTokenCommand {
                title: "Milestone Token".to_string(),
                description: "Tokenized 500 pts milestone".to_string(),
                points: 500,
            })
            .await?;

        self.notify(
            NotificationKind::Reward,
            "Token Minted",
            "Your milestone was tokenized on-chain.".to_string(),
            Some("/innovation"),
        )
        .await?;
        Ok(token)
    }

    async fn notify(
        &self,
        kind: NotificationKind,
        title: &str,
        message: String,
        action_url: Option<&str>,
    ) -> Result<NotificationDto, CommandError> {
        Ok(self
            .command_handlers
            .add_notification
            .handle(AddNotificationCommand {
                kind,
                title: title.to_string(),
                message,
                action_url: action_url.map(str::to_string),
            })
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::EngagementConfig;

    async fn demo_state() -> AppState {
        AppState::new(EngagementConfig::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_quick_action_logs_activity_and_notifies() {
        let state = demo_state().await;
        let before = state.queries.ledger.get_user_progress().await;

        let outcome = state
            .quick_action_with_points(QuickAction::WaterIntake, 30)
            .await
            .unwrap();

        assert_eq!(outcome.activity.title, "Water Intake");
        assert_eq!(outcome.activity.description, "Quick water intake activity");
        assert_eq!(
            outcome.notification.message,
            "You earned 30 points for water intake!"
        );

        let after = state.queries.ledger.get_user_progress().await;
        assert_eq!(after.experience, before.experience + 30);

        let achievement = state.queries.ledger.get_achievement("5").await.unwrap();
        assert_eq!(achievement.progress, 46);

        // the logged activity also earns a micro reward
        let rewards = state.queries.ledger.get_rewards_overview().await;
        assert_eq!(rewards.rewards[0].title, "Consistent Engagement");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_quick_actions_each_count() {
        let state = std::sync::Arc::new(demo_state().await);

        let tasks: Vec<_> = QuickAction::ALL
            .into_iter()
            .map(|action| {
                let state = state.clone();
                tokio::spawn(async move { state.quick_action_with_points(action, 10).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let achievement = state.queries.ledger.get_achievement("5").await.unwrap();
        assert_eq!(achievement.progress, 49);
    }

    #[tokio::test]
    async fn test_random_quick_action_points_in_range() {
        let state = demo_state().await;
        for action in QuickAction::ALL {
            let outcome = state.quick_action(action).await.unwrap();
            assert!((10..60).contains(&outcome.points));
        }
    }

    #[tokio::test]
    async fn test_innovation_actions() {
        let state = demo_state().await;
        let unread_before = state.queries.ledger.get_summary().await.unread_notifications;

        let cbt = state.complete_cbt_exercise().await.unwrap();
        assert_eq!(cbt.points, 25);

        state.send_habit_nudge().await.unwrap();
        let personalization = state.queries.ledger.get_personalization().await;
        assert_eq!(personalization.recommendations[0].title, "2-min Reset");

        let challenge = state.add_predictive_challenge().await.unwrap();
        assert!(!challenge.is_joined);
        assert_eq!(challenge.requirements.len(), 1);

        state.connect_wearable().await.unwrap();

        let token = state.mint_milestone_token().await.unwrap();
        assert_eq!(token.points, 500);
        assert_eq!(state.queries.ledger.get_tokens().await.len(), 1);

        let summary = state.queries.ledger.get_summary().await;
        assert_eq!(summary.unread_notifications, unread_before + 5);
    }
}
