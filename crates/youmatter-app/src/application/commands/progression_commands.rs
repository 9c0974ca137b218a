use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::{AchievementDto, ChallengeDto, RewardDto, UserProgressDto};
use youmatter_domain::achievement::AchievementDefinition;
use youmatter_domain::challenge::ChallengeDefinition;
use youmatter_domain::reward::RewardType;

// ============================================================
// User progress
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantExperienceCommand {
    pub amount: i64,
}

impl Command for GrantExperienceCommand {}

pub type GrantExperienceResult = UserProgressDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStreakCommand {
    pub streak: u32,
}

impl Command for UpdateStreakCommand {}

pub type UpdateStreakResult = UserProgressDto;

// ============================================================
// Achievements
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddAchievementCommand {
    pub definition: AchievementDefinition,
}

impl Command for AddAchievementCommand {}

pub type AddAchievementResult = AchievementDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAchievementProgressCommand {
    pub achievement_id: String,
    pub progress: i64,
}

impl Command for UpdateAchievementProgressCommand {}

/// `None` when the achievement is unknown
pub type UpdateAchievementProgressResult = Option<AchievementDto>;

/// Raise progress relative to the current value, read under the same write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceAchievementProgressCommand {
    pub achievement_id: String,
    pub by: u32,
}

impl Command for AdvanceAchievementProgressCommand {}

pub type AdvanceAchievementProgressResult = Option<AchievementDto>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockAchievementCommand {
    pub achievement_id: String,
}

impl Command for UnlockAchievementCommand {}

pub type UnlockAchievementResult = Option<AchievementDto>;

// ============================================================
// Challenges
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddChallengeCommand {
    pub definition: ChallengeDefinition,
}

impl Command for AddChallengeCommand {}

pub type AddChallengeResult = ChallengeDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinChallengeCommand {
    pub challenge_id: String,
}

impl Command for JoinChallengeCommand {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinChallengeResult {
    pub joined: bool,
    pub bonus_experience: u64,
    pub challenge: Option<ChallengeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteRequirementCommand {
    pub challenge_id: String,
    pub requirement_id: String,
}

impl Command for CompleteRequirementCommand {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteRequirementResult {
    pub advanced: bool,
    pub bonus_experience: u64,
    pub challenge: Option<ChallengeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChallengeProgressCommand {
    pub challenge_id: String,
    pub progress: i64,
}

impl Command for UpdateChallengeProgressCommand {}

pub type UpdateChallengeProgressResult = Option<ChallengeDto>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteChallengeCommand {
    pub challenge_id: String,
}

impl Command for CompleteChallengeCommand {}

pub type CompleteChallengeResult = Option<ChallengeDto>;

// ============================================================
// Rewards
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantRewardCommand {
    pub title: String,
    pub description: String,
    pub points: i64,
    pub reward_type: RewardType,
}

impl Command for GrantRewardCommand {}

pub type GrantRewardResult = RewardDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearRewardsCommand;

impl Command for ClearRewardsCommand {}

pub type ClearRewardsResult = ();
