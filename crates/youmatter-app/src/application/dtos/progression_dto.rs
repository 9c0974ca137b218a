use serde::{Deserialize, Serialize};

use youmatter_domain::achievement::Achievement;
use youmatter_domain::challenge::{Challenge, Requirement};
use youmatter_domain::progress::UserProgress;
use youmatter_domain::reward::Reward;
use youmatter_domain::LedgerSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgressDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub join_date: String, // YYYY-MM-DD
    pub level: u32,
    pub experience: u64,
    pub experience_to_next_level: u64,
    pub total_points: u64,
    pub streak: u32,
    pub longest_streak: u32,
}

impl From<&UserProgress> for UserProgressDto {
    fn from(user: &UserProgress) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            avatar: user.avatar().map(str::to_string),
            join_date: user.join_date().format("%Y-%m-%d").to_string(),
            level: user.level(),
            experience: user.experience(),
            experience_to_next_level: user.experience_to_next_level(),
            total_points: user.total_points(),
            streak: user.streak(),
            longest_streak: user.longest_streak(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub points: u32,
    pub category: String,
    pub rarity: String,
    pub progress: u32,
    pub max_progress: u32,
    pub unlocked_at: Option<String>,
}

impl From<&Achievement> for AchievementDto {
    fn from(a: &Achievement) -> Self {
        Self {
            id: a.id().to_string(),
            title: a.title().to_string(),
            description: a.description().to_string(),
            icon: a.icon().to_string(),
            points: a.points(),
            category: enum_str(&a.category()),
            rarity: enum_str(&a.rarity()),
            progress: a.progress(),
            max_progress: a.max_progress(),
            unlocked_at: a.unlocked_at().map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementDto {
    pub id: String,
    pub description: String,
    pub current: u32,
    pub target: u32,
    pub unit: String,
}

impl From<&Requirement> for RequirementDto {
    fn from(r: &Requirement) -> Self {
        Self {
            id: r.id.to_string(),
            description: r.description.clone(),
            current: r.current,
            target: r.target,
            unit: r.unit.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDto {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub points: u32,
    pub start_date: String,
    pub end_date: String,
    pub participants: u32,
    pub is_active: bool,
    pub is_joined: bool,
    pub progress: u32,
    pub max_progress: u32,
    pub requirements: Vec<RequirementDto>,
}

impl ChallengeDto {
    pub fn new(challenge: &Challenge, is_joined: bool) -> Self {
        Self {
            id: challenge.id().to_string(),
            title: challenge.title().to_string(),
            description: challenge.description().to_string(),
            kind: enum_str(&challenge.kind()),
            category: enum_str(&challenge.category()),
            points: challenge.points(),
            start_date: challenge.start_date().to_rfc3339(),
            end_date: challenge.end_date().to_rfc3339(),
            participants: challenge.participants(),
            is_active: challenge.is_active(),
            is_joined,
            progress: challenge.progress(),
            max_progress: challenge.max_progress(),
            requirements: challenge.requirements().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u64,
    #[serde(rename = "type")]
    pub reward_type: String,
    pub granted_at: Option<String>,
}

impl From<&Reward> for RewardDto {
    fn from(r: &Reward) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title.clone(),
            description: r.description.clone(),
            points: r.points,
            reward_type: r.reward_type.as_str().to_string(),
            granted_at: r.granted_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsOverviewDto {
    pub rewards: Vec<RewardDto>,
    pub total_reward_points: u64,
    pub points_by_type: Vec<(String, u64)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDto {
    pub unlocked_achievements: usize,
    pub total_points: u64,
    pub unread_notifications: u32,
    pub active_challenges: usize,
    pub joined_challenges: usize,
    pub completed_challenges: usize,
    pub total_reward_points: u64,
    pub points_from_insurance: u64,
    pub activity_count: usize,
    pub token_count: usize,
}

impl From<LedgerSummary> for SummaryDto {
    fn from(s: LedgerSummary) -> Self {
        Self {
            unlocked_achievements: s.unlocked_achievements,
            total_points: s.total_points,
            unread_notifications: s.unread_notifications,
            active_challenges: s.active_challenges,
            joined_challenges: s.joined_challenges,
            completed_challenges: s.completed_challenges,
            total_reward_points: s.total_reward_points,
            points_from_insurance: s.points_from_insurance,
            activity_count: s.activity_count,
            token_count: s.token_count,
        }
    }
}

/// Wire name of a snake_case serde enum
pub(crate) fn enum_str<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}
