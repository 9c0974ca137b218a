use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::ActivityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Exercise,
    Nutrition,
    Mental,
    Insurance,
    Social,
    Wellness,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub id: ActivityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ActivityCategory,
    pub points: u32,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Activity {
    pub fn new(title: impl Into<String>, category: ActivityCategory, points: u32) -> Self {
        Self {
            id: ActivityId::new(),
            title: title.into(),
            description: String::new(),
            category,
            points,
            duration: None,
            completed_at: None,
            metadata: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }
}
