use std::sync::Arc;

use crate::application::dtos::{
    AchievementDto, ActivityDto, ChallengeDto, DashboardDto, FriendDto, InsuranceActivityDto,
    JourneyDto, LeaderboardEntryDto, NotificationDto, NotificationFeedDto, PersonalizationDto,
    RecommendationDto, RewardDto, RewardsOverviewDto, SocialOverviewDto, SummaryDto, TokenDto,
    UserProgressDto,
};
use crate::application::services::LedgerStore;
use youmatter_domain::shared::{AchievementId, ChallengeId, DomainError, JourneyId};
use youmatter_domain::ProgressionLedger;

/// Leaderboard rows shown on the dashboard
const DASHBOARD_LEADERBOARD_SIZE: usize = 3;

/// Ledger query service
/// Read-only projections of the ledger for the presentation layer
pub struct LedgerQueryService {
    store: Arc<LedgerStore>,
}

impl LedgerQueryService {
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn get_dashboard(&self) -> DashboardDto {
        self.store
            .read(|ledger| DashboardDto {
                user: UserProgressDto::from(ledger.user()),
                summary: SummaryDto::from(ledger.summary()),
                recent_activities: ledger.activities().recent().map(ActivityDto::from).collect(),
                unlocked_achievements: ledger
                    .achievements()
                    .iter()
                    .filter(|a| a.is_unlocked())
                    .map(AchievementDto::from)
                    .collect(),
                active_challenges: ledger
                    .challenges()
                    .iter()
                    .filter(|c| c.is_active())
                    .map(|c| ChallengeDto::new(c, ledger.is_joined(c.id())))
                    .collect(),
                top_leaderboard: ledger
                    .social()
                    .leaderboard()
                    .iter()
                    .take(DASHBOARD_LEADERBOARD_SIZE)
                    .map(LeaderboardEntryDto::from)
                    .collect(),
            })
            .await
    }

    pub async fn get_user_progress(&self) -> UserProgressDto {
        self.store
            .read(|ledger| UserProgressDto::from(ledger.user()))
            .await
    }

    pub async fn get_summary(&self) -> SummaryDto {
        self.store
            .read(|ledger| SummaryDto::from(ledger.summary()))
            .await
    }

    pub async fn get_achievements(&self) -> Vec<AchievementDto> {
        self.store
            .read(|ledger| ledger.achievements().iter().map(AchievementDto::from).collect())
            .await
    }

    pub async fn get_achievement(&self, achievement_id: &str) -> Result<AchievementDto, DomainError> {
        let id = AchievementId::from_string(achievement_id);
        self.store
            .read(move |ledger| {
                ledger
                    .achievement(&id)
                    .map(AchievementDto::from)
                    .ok_or_else(|| DomainError::NotFound(format!("Achievement {id}")))
            })
            .await
    }

    /// All challenges, or only the ones the user joined
    pub async fn get_challenges(&self, joined_only: bool) -> Vec<ChallengeDto> {
        self.store
            .read(move |ledger| {
                ledger
                    .challenges()
                    .iter()
                    .filter(|c| !joined_only || ledger.is_joined(c.id()))
                    .map(|c| ChallengeDto::new(c, ledger.is_joined(c.id())))
                    .collect()
            })
            .await
    }

    pub async fn get_challenge(&self, challenge_id: &str) -> Result<ChallengeDto, DomainError> {
        let id = ChallengeId::from_string(challenge_id);
        self.store
            .read(move |ledger| challenge_dto(ledger, &id))
            .await
    }

    pub async fn get_rewards_overview(&self) -> RewardsOverviewDto {
        self.store
            .read(|ledger| {
                let mut points_by_type: Vec<(String, u64)> = ledger
                    .reward_points_by_type()
                    .into_iter()
                    .map(|(kind, points)| (kind.as_str().to_string(), points))
                    .collect();
                points_by_type.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

                RewardsOverviewDto {
                    rewards: ledger.rewards().rewards().map(RewardDto::from).collect(),
                    total_reward_points: ledger.rewards().total_reward_points(),
                    points_by_type,
                }
            })
            .await
    }

    pub async fn get_notifications(&self, unread_only: bool) -> NotificationFeedDto {
        self.store
            .read(move |ledger| NotificationFeedDto {
                notifications: ledger
                    .notifications()
                    .notifications()
                    .filter(|n| !unread_only || !n.is_read)
                    .map(NotificationDto::from)
                    .collect(),
                unread_count: ledger.notifications().unread_count(),
            })
            .await
    }

    pub async fn get_activities(&self) -> Vec<ActivityDto> {
        self.store
            .read(|ledger| ledger.activities().activities().map(ActivityDto::from).collect())
            .await
    }

    pub async fn get_insurance_activities(&self) -> Vec<InsuranceActivityDto> {
        self.store
            .read(|ledger| {
                ledger
                    .insurance()
                    .activities()
                    .map(InsuranceActivityDto::from)
                    .collect()
            })
            .await
    }

    pub async fn get_journeys(&self) -> Vec<JourneyDto> {
        self.store
            .read(|ledger| ledger.journeys().iter().map(JourneyDto::from).collect())
            .await
    }

    pub async fn get_journey(&self, journey_id: &str) -> Result<JourneyDto, DomainError> {
        let id = JourneyId::from_string(journey_id);
        self.store
            .read(move |ledger| {
                ledger
                    .journey(&id)
                    .map(JourneyDto::from)
                    .ok_or_else(|| DomainError::NotFound(format!("Journey {id}")))
            })
            .await
    }

    pub async fn get_social(&self) -> SocialOverviewDto {
        self.store
            .read(|ledger| {
                let social = ledger.social();
                SocialOverviewDto {
                    friends: social.friends().iter().map(FriendDto::from).collect(),
                    online_count: social.online_friends().count(),
                    leaderboard: social
                        .leaderboard()
                        .iter()
                        .map(LeaderboardEntryDto::from)
                        .collect(),
                }
            })
            .await
    }

    pub async fn get_personalization(&self) -> PersonalizationDto {
        self.store
            .read(|ledger| {
                let personalization = ledger.personalization();
                PersonalizationDto {
                    profile: personalization.profile().cloned(),
                    recommendations: personalization
                        .recommendations()
                        .map(RecommendationDto::from)
                        .collect(),
                }
            })
            .await
    }

    pub async fn get_tokens(&self) -> Vec<TokenDto> {
        self.store
            .read(|ledger| ledger.tokens().tokens().map(TokenDto::from).collect())
            .await
    }
}

fn challenge_dto(ledger: &ProgressionLedger, id: &ChallengeId) -> Result<ChallengeDto, DomainError> {
    ledger
        .challenge(id)
        .map(|c| ChallengeDto::new(c, ledger.is_joined(id)))
        .ok_or_else(|| DomainError::NotFound(format!("Challenge {id}")))
}
