use serde::{Deserialize, Serialize};

use super::engagement_dto::{ActivityDto, LeaderboardEntryDto};
use super::progression_dto::{AchievementDto, ChallengeDto, SummaryDto, UserProgressDto};

/// Everything the dashboard page renders in one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub user: UserProgressDto,
    pub summary: SummaryDto,
    pub recent_activities: Vec<ActivityDto>,
    pub unlocked_achievements: Vec<AchievementDto>,
    pub active_challenges: Vec<ChallengeDto>,
    pub top_leaderboard: Vec<LeaderboardEntryDto>,
}
