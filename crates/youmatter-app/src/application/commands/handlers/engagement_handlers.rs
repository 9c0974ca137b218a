use crate::application::commands::engagement_commands::*;
use youmatter_domain::shared::{FriendId, JourneyId, StageId};

ledger_handler!(
    AddJourneyCommandHandler,
    AddJourneyCommand,
    AddJourneyResult,
    |ledger, cmd| { ledger.add_journey(cmd.definition) }
);

ledger_handler!(
    CompleteStageCommandHandler,
    CompleteStageCommand,
    CompleteStageResult,
    |ledger, cmd| {
        Ok(ledger.complete_stage(
            &JourneyId::from_string(&cmd.journey_id),
            &StageId::from_string(&cmd.stage_id),
        ))
    }
);

ledger_handler!(
    AddFriendCommandHandler,
    AddFriendCommand,
    AddFriendResult,
    |ledger, cmd| { ledger.add_friend(cmd.friend) }
);

ledger_handler!(
    RemoveFriendCommandHandler,
    RemoveFriendCommand,
    RemoveFriendResult,
    |ledger, cmd| { Ok(ledger.remove_friend(&FriendId::from_string(&cmd.friend_id))) }
);

ledger_handler!(
    UpdateLeaderboardCommandHandler,
    UpdateLeaderboardCommand,
    UpdateLeaderboardResult,
    |ledger, cmd| {
        ledger.update_leaderboard(cmd.entries);
        Ok(())
    }
);

ledger_handler!(
    SetMotivationProfileCommandHandler,
    SetMotivationProfileCommand,
    SetMotivationProfileResult,
    |ledger, cmd| {
        ledger.set_motivation_profile(cmd.profile);
        Ok(())
    }
);

ledger_handler!(
    SetRecommendationsCommandHandler,
    SetRecommendationsCommand,
    SetRecommendationsResult,
    |ledger, cmd| { ledger.set_recommendations(cmd.recommendations) }
);

ledger_handler!(
    AddRecommendationCommandHandler,
    AddRecommendationCommand,
    AddRecommendationResult,
    |ledger, cmd| { ledger.add_recommendation(cmd.recommendation) }
);

ledger_handler!(
    ClearRecommendationsCommandHandler,
    ClearRecommendationsCommand,
    ClearRecommendationsResult,
    |ledger, _cmd| {
        ledger.clear_recommendations();
        Ok(())
    }
);
