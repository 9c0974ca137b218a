use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::events::DomainEvent;
use crate::insurance::InsuranceActivityKind;
use crate::notification::NotificationKind;
use crate::reward::RewardType;
use crate::shared::{
    AchievementId, ActivityId, ChallengeId, InsuranceActivityId, JourneyId, NotificationId,
    RequirementId, RewardId, StageId, TokenId,
};

/// Macro to implement DomainEvent trait with type name
macro_rules! impl_domain_event {
    ($type:ty) => {
        impl DomainEvent for $type {
            fn as_any(&self) -> &(dyn Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

/// Event fired after experience was added to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceGranted {
    pub amount: u64,
    pub experience: u64,
    pub total_points: u64,
    pub level: u32,
    pub leveled_up: bool,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ExperienceGranted);

/// Event fired when the externally supplied streak changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakUpdated {
    pub previous: u32,
    pub streak: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(StreakUpdated);

/// Event fired exactly once per achievement, on the locked -> unlocked transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementUnlocked {
    pub achievement_id: AchievementId,
    pub title: String,
    pub points: u32,
    pub unlocked_at: DateTime<Utc>,
}

impl_domain_event!(AchievementUnlocked);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeJoined {
    pub challenge_id: ChallengeId,
    pub participants: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ChallengeJoined);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementCompleted {
    pub challenge_id: ChallengeId,
    pub requirement_id: RequirementId,
    pub current: u32,
    pub target: u32,
    pub challenge_progress: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(RequirementCompleted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeCompleted {
    pub challenge_id: ChallengeId,
    pub title: String,
    pub points: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ChallengeCompleted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardGranted {
    pub reward_id: RewardId,
    pub reward_type: RewardType,
    pub points: u64,
    pub total_reward_points: u64,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(RewardGranted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsCleared {
    pub cleared: usize,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(RewardsCleared);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationAdded {
    pub notification_id: NotificationId,
    pub kind: NotificationKind,
    pub unread_count: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(NotificationAdded);

/// Event fired for every activity appended to the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogged {
    pub activity_id: ActivityId,
    pub title: String,
    pub points: u32,
    pub total_activities: usize,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ActivityLogged);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceActivityLogged {
    pub activity_id: InsuranceActivityId,
    pub kind: InsuranceActivityKind,
    pub points: u64,
    pub points_from_insurance: u64,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(InsuranceActivityLogged);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCompleted {
    pub journey_id: JourneyId,
    pub stage_id: StageId,
    pub current_stage_index: usize,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(StageCompleted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMinted {
    pub token_id: TokenId,
    pub points: u64,
    pub tx_hash: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(TokenMinted);
