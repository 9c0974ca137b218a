use serde::{Deserialize, Serialize};

use super::progression_dto::enum_str;
use youmatter_domain::activity::Activity;
use youmatter_domain::insurance::InsuranceActivity;
use youmatter_domain::journey::Journey;
use youmatter_domain::notification::Notification;
use youmatter_domain::personalization::{MotivationProfile, Recommendation};
use youmatter_domain::social::{Friend, LeaderboardEntry};
use youmatter_domain::token::RewardToken;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
    pub action_url: Option<String>,
}

impl From<&Notification> for NotificationDto {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            kind: n.kind.as_str().to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            is_read: n.is_read,
            created_at: n.created_at.to_rfc3339(),
            action_url: n.action_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeedDto {
    pub notifications: Vec<NotificationDto>,
    pub unread_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub points: u32,
    pub duration: Option<u32>, // minutes
    pub completed_at: Option<String>,
}

impl From<&Activity> for ActivityDto {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id.to_string(),
            title: a.title.clone(),
            description: a.description.clone(),
            category: enum_str(&a.category),
            points: a.points,
            duration: a.duration,
            completed_at: a.completed_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceActivityDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub points: u64,
    pub completed_at: Option<String>,
    pub policy_id: Option<String>,
}

impl From<&InsuranceActivity> for InsuranceActivityDto {
    fn from(a: &InsuranceActivity) -> Self {
        Self {
            id: a.id.to_string(),
            kind: enum_str(&a.kind),
            title: a.title.clone(),
            points: a.points,
            completed_at: a.completed_at.map(|t| t.to_rfc3339()),
            policy_id: a.policy_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub current_stage_index: usize,
    pub completed_stages: usize,
    pub total_stages: usize,
    pub earned_points: u32,
}

impl From<&Journey> for JourneyDto {
    fn from(j: &Journey) -> Self {
        let completed: Vec<_> = j.stages().iter().filter(|s| s.completed).collect();
        Self {
            id: j.id().to_string(),
            title: j.title().to_string(),
            category: enum_str(&j.category()),
            current_stage_index: j.current_stage_index(),
            completed_stages: completed.len(),
            total_stages: j.stages().len(),
            earned_points: completed.iter().map(|s| s.points).sum(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendDto {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub is_online: bool,
    pub last_active: String,
}

impl From<&Friend> for FriendDto {
    fn from(f: &Friend) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            level: f.level,
            is_online: f.is_online,
            last_active: f.last_active.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub rank: u32,
    pub user_id: String,
    pub name: String,
    pub points: u64,
    pub level: u32,
}

impl From<&LeaderboardEntry> for LeaderboardEntryDto {
    fn from(e: &LeaderboardEntry) -> Self {
        Self {
            rank: e.rank,
            user_id: e.user_id.to_string(),
            name: e.name.clone(),
            points: e.points,
            level: e.level,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_route: String,
    pub score: f64,
}

impl From<&Recommendation> for RecommendationDto {
    fn from(r: &Recommendation) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title.clone(),
            description: r.description.clone(),
            target_route: r.target_route.clone(),
            score: r.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    pub id: String,
    pub title: String,
    pub points: u64,
    pub minted_at: String,
    pub tx_hash: String,
}

impl From<&RewardToken> for TokenDto {
    fn from(t: &RewardToken) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title.clone(),
            points: t.points,
            minted_at: t.minted_at.to_rfc3339(),
            tx_hash: t.tx_hash.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialOverviewDto {
    pub friends: Vec<FriendDto>,
    pub online_count: usize,
    pub leaderboard: Vec<LeaderboardEntryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationDto {
    pub profile: Option<MotivationProfile>,
    pub recommendations: Vec<RecommendationDto>,
}
