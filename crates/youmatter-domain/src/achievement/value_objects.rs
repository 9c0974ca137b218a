use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{AchievementId, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Input shape for new or seeded achievements
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    #[serde(default)]
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub points: u32,
    pub category: Category,
    pub rarity: Rarity,
    #[serde(default)]
    pub progress: u32,
    pub max_progress: u32,
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}
