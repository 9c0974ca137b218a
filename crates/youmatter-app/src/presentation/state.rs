use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::config::EngagementConfig;
use crate::application::queries::LedgerQueryService;
use crate::application::services::LedgerStore;
use youmatter_domain::shared::DomainError;
use youmatter_domain::ProgressionLedger;
use youmatter_infrastructure::events::InMemoryEventBus;

/// Command handlers container
pub struct CommandHandlers {
    // progress
    pub grant_experience: Arc<GrantExperienceCommandHandler>,
    pub update_streak: Arc<UpdateStreakCommandHandler>,
    // achievements
    pub add_achievement: Arc<AddAchievementCommandHandler>,
    pub update_achievement_progress: Arc<UpdateAchievementProgressCommandHandler>,
    pub advance_achievement_progress: Arc<AdvanceAchievementProgressCommandHandler>,
    pub unlock_achievement: Arc<UnlockAchievementCommandHandler>,
    // challenges
    pub add_challenge: Arc<AddChallengeCommandHandler>,
    pub join_challenge: Arc<JoinChallengeCommandHandler>,
    pub complete_requirement: Arc<CompleteRequirementCommandHandler>,
    pub update_challenge_progress: Arc<UpdateChallengeProgressCommandHandler>,
    pub complete_challenge: Arc<CompleteChallengeCommandHandler>,
    // rewards and tokens
    pub grant_reward: Arc<GrantRewardCommandHandler>,
    pub clear_rewards: Arc<ClearRewardsCommandHandler>,
    pub mint_token: Arc<MintTokenCommandHandler>,
    pub clear_tokens: Arc<ClearTokensCommandHandler>,
    // notifications
    pub add_notification: Arc<AddNotificationCommandHandler>,
    pub mark_notification_read: Arc<MarkNotificationReadCommandHandler>,
    pub mark_all_notifications_read: Arc<MarkAllNotificationsReadCommandHandler>,
    pub remove_notification: Arc<RemoveNotificationCommandHandler>,
    // activities
    pub log_activity: Arc<LogActivityCommandHandler>,
    pub complete_activity: Arc<CompleteActivityCommandHandler>,
    pub log_insurance_activity: Arc<LogInsuranceActivityCommandHandler>,
    pub clear_insurance_activities: Arc<ClearInsuranceActivitiesCommandHandler>,
    // journeys, social, personalization
    pub add_journey: Arc<AddJourneyCommandHandler>,
    pub complete_stage: Arc<CompleteStageCommandHandler>,
    pub add_friend: Arc<AddFriendCommandHandler>,
    pub remove_friend: Arc<RemoveFriendCommandHandler>,
    pub update_leaderboard: Arc<UpdateLeaderboardCommandHandler>,
    pub set_motivation_profile: Arc<SetMotivationProfileCommandHandler>,
    pub set_recommendations: Arc<SetRecommendationsCommandHandler>,
    pub add_recommendation: Arc<AddRecommendationCommandHandler>,
    pub clear_recommendations: Arc<ClearRecommendationsCommandHandler>,
}

impl CommandHandlers {
    pub fn new(store: &Arc<LedgerStore>, config: &EngagementConfig) -> Self {
        Self {
            grant_experience: Arc::new(GrantExperienceCommandHandler::new(store.clone())),
            update_streak: Arc::new(UpdateStreakCommandHandler::new(store.clone())),
            add_achievement: Arc::new(AddAchievementCommandHandler::new(store.clone())),
            update_achievement_progress: Arc::new(UpdateAchievementProgressCommandHandler::new(
                store.clone(),
            )),
            advance_achievement_progress: Arc::new(
                AdvanceAchievementProgressCommandHandler::new(store.clone()),
            ),
            unlock_achievement: Arc::new(UnlockAchievementCommandHandler::new(store.clone())),
            add_challenge: Arc::new(AddChallengeCommandHandler::new(store.clone())),
            join_challenge: Arc::new(JoinChallengeCommandHandler::new(store.clone(), config)),
            complete_requirement: Arc::new(CompleteRequirementCommandHandler::new(
                store.clone(),
                config,
            )),
            update_challenge_progress: Arc::new(UpdateChallengeProgressCommandHandler::new(
                store.clone(),
            )),
            complete_challenge: Arc::new(CompleteChallengeCommandHandler::new(store.clone())),
            grant_reward: Arc::new(GrantRewardCommandHandler::new(store.clone())),
            clear_rewards: Arc::new(ClearRewardsCommandHandler::new(store.clone())),
            mint_token: Arc::new(MintTokenCommandHandler::new(store.clone())),
            clear_tokens: Arc::new(ClearTokensCommandHandler::new(store.clone())),
            add_notification: Arc::new(AddNotificationCommandHandler::new(store.clone())),
            mark_notification_read: Arc::new(MarkNotificationReadCommandHandler::new(
                store.clone(),
            )),
            mark_all_notifications_read: Arc::new(MarkAllNotificationsReadCommandHandler::new(
                store.clone(),
            )),
            remove_notification: Arc::new(RemoveNotificationCommandHandler::new(store.clone())),
            log_activity: Arc::new(LogActivityCommandHandler::new(store.clone())),
            complete_activity: Arc::new(CompleteActivityCommandHandler::new(store.clone())),
            log_insurance_activity: Arc::new(LogInsuranceActivityCommandHandler::new(
                store.clone(),
            )),
            clear_insurance_activities: Arc::new(ClearInsuranceActivitiesCommandHandler::new(
                store.clone(),
            )),
            add_journey: Arc::new(AddJourneyCommandHandler::new(store.clone())),
            complete_stage: Arc::new(CompleteStageCommandHandler::new(store.clone())),
            add_friend: Arc::new(AddFriendCommandHandler::new(store.clone())),
            remove_friend: Arc::new(RemoveFriendCommandHandler::new(store.clone())),
            update_leaderboard: Arc::new(UpdateLeaderboardCommandHandler::new(store.clone())),
            set_motivation_profile: Arc::new(SetMotivationProfileCommandHandler::new(
                store.clone(),
            )),
            set_recommendations: Arc::new(SetRecommendationsCommandHandler::new(store.clone())),
            add_recommendation: Arc::new(AddRecommendationCommandHandler::new(store.clone())),
            clear_recommendations: Arc::new(ClearRecommendationsCommandHandler::new(
                store.clone(),
            )),
        }
    }
}

pub struct Runtime {
    pub event_bus: Arc<InMemoryEventBus>,
    pub store: Arc<LedgerStore>,
    pub config: EngagementConfig,
}

pub struct Queries {
    pub ledger: Arc<LedgerQueryService>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    /// Build the state around the bundled demo profile
    pub async fn new(config: EngagementConfig) -> Result<Self, DomainError> {
        crate::presentation::bootstrap::build_demo_app_state(config).await
    }

    pub async fn with_ledger(
        config: EngagementConfig,
        ledger: ProgressionLedger,
    ) -> Result<Self, DomainError> {
        crate::presentation::bootstrap::build_app_state(config, ledger).await
    }
}
