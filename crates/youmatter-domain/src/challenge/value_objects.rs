use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{Category, ChallengeId, RequirementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl ChallengeKind {
    /// Default length of a challenge window
    pub fn duration(&self) -> chrono::Duration {
        match self {
            ChallengeKind::Daily => chrono::Duration::days(1),
            ChallengeKind::Weekly => chrono::Duration::days(7),
            ChallengeKind::Monthly => chrono::Duration::days(30),
            ChallengeKind::Custom => chrono::Duration::days(1),
        }
    }
}

/// One measurable step of a challenge. `current <= target` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: RequirementId,
    pub description: String,
    pub target: u32,
    #[serde(default)]
    pub current: u32,
    pub unit: String,
}

impl Requirement {
    pub fn is_met(&self) -> bool {
        self.current >= self.target
    }
}

/// Input shape for new or seeded challenges
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    #[serde(default)]
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub kind: ChallengeKind,
    pub category: Category,
    pub points: u32,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub participants: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub progress: u32,
    pub max_progress: u32,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

fn default_active() -> bool {
    true
}

/// Result of completing one step of a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementProgress {
    pub current: u32,
    pub target: u32,
    pub challenge_progress: u32,
}
