use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::RewardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Micro,
    Milestone,
    Streak,
    Insurance,
    Social,
    Wellness,
}

impl RewardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardType::Micro => "micro",
            RewardType::Milestone => "milestone",
            RewardType::Streak => "streak",
            RewardType::Insurance => "insurance",
            RewardType::Social => "social",
            RewardType::Wellness => "wellness",
        }
    }
}

impl fmt::Display for RewardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reward ledger entry. `granted_at` is filled in by the ledger when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(default)]
    pub id: RewardId,
    pub title: String,
    pub description: String,
    pub points: u64,
    #[serde(rename = "type")]
    pub reward_type: RewardType,
    #[serde(default)]
    pub granted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Reward {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        points: u64,
        reward_type: RewardType,
    ) -> Self {
        Self {
            id: RewardId::new(),
            title: title.into(),
            description: description.into(),
            points,
            reward_type,
            granted_at: None,
            metadata: None,
        }
    }
}
