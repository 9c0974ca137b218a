/// Handler that applies one command to the ledger inside a single write.
///
/// `ledger_handler!(Name, Command, |ledger, cmd| body)` where `body`
/// evaluates to `Result<Command's result, DomainError>`.
macro_rules! ledger_handler {
    ($handler:ident, $command:ty, $result:ty, |$ledger:ident, $cmd:ident| $body:expr) => {
        pub struct $handler {
            store: std::sync::Arc<crate::application::services::LedgerStore>,
        }

        impl $handler {
            pub fn new(store: std::sync::Arc<crate::application::services::LedgerStore>) -> Self {
                Self { store }
            }
        }

        #[async_trait::async_trait]
        impl crate::application::commands::command_handler::CommandHandler<$command> for $handler {
            type Result = $result;

            async fn handle(
                &self,
                $cmd: $command,
            ) -> Result<Self::Result, youmatter_domain::shared::DomainError> {
                self.store
                    .mutate(
                        move |$ledger: &mut youmatter_domain::ProgressionLedger| -> Result<
                            $result,
                            youmatter_domain::shared::DomainError,
                        > { $body },
                    )
                    .await
            }
        }
    };
}

mod achievement_handlers;
mod activity_handlers;
mod challenge_handlers;
mod engagement_handlers;
mod notification_handlers;
mod progress_handlers;
mod reward_handlers;


pub use achievement_handlers::{
    AddAchievementCommandHandler, AdvanceAchievementProgressCommandHandler,
    UnlockAchievementCommandHandler, UpdateAchievementProgressCommandHandler,
};
pub use activity_handlers::{
    ClearInsuranceActivitiesCommandHandler, CompleteActivityCommandHandler,
    LogActivityCommandHandler, LogInsuranceActivityCommandHandler,
};
pub use challenge_handlers::{
    AddChallengeCommandHandler, CompleteChallengeCommandHandler,
    CompleteRequirementCommandHandler, JoinChallengeCommandHandler,
    UpdateChallengeProgressCommandHandler,
};
pub use engagement_handlers::{
    AddFriendCommandHandler, AddJourneyCommandHandler, AddRecommendationCommandHandler,
    ClearRecommendationsCommandHandler, CompleteStageCommandHandler, RemoveFriendCommandHandler,
    SetMotivationProfileCommandHandler, SetRecommendationsCommandHandler,
    UpdateLeaderboardCommandHandler,
};
pub use notification_handlers::{
    AddNotificationCommandHandler, MarkAllNotificationsReadCommandHandler,
    MarkNotificationReadCommandHandler, RemoveNotificationCommandHandler,
};
pub use progress_handlers::{GrantExperienceCommandHandler, UpdateStreakCommandHandler};
pub use reward_handlers::{
    ClearRewardsCommandHandler, ClearTokensCommandHandler, GrantRewardCommandHandler,
    MintTokenCommandHandler,
};

/// Config bonuses are unsigned; the ledger takes signed amounts so it can reject negatives
fn bonus_amount(bonus: u64) -> i64 {
    i64::try_from(bonus).unwrap_or(i64::MAX)
}
