use chrono::{DateTime, Utc};
use serde::Serialize;

use super::value_objects::{AchievementDefinition, Rarity};
use crate::shared::{AchievementId, Category, DomainError};

/// An achievement and its one-way locked -> unlocked state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    id: AchievementId,
    title: String,
    description: String,
    icon: String,
    points: u32,
    category: Category,
    rarity: Rarity,
    progress: u32,
    max_progress: u32,
    unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// Build from a definition.
    ///
    /// Progress is clamped to `max_progress`. A definition whose progress is
    /// already complete is normalized to unlocked, and an unlocked definition
    /// is normalized to full progress, so both fields always agree.
    pub fn from_definition(def: AchievementDefinition) -> Result<Self, DomainError> {
        if def.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Achievement title cannot be empty".to_string(),
            ));
        }
        if def.max_progress == 0 {
            return Err(DomainError::InvalidArgument(format!(
                "Achievement {} must have max_progress >= 1",
                def.id
            )));
        }

        let mut progress = def.progress.min(def.max_progress);
        let mut unlocked_at = def.unlocked_at;
        if unlocked_at.is_some() {
            progress = def.max_progress;
        } else if progress >= def.max_progress {
            unlocked_at = Some(Utc::now());
        }

        Ok(Self {
            id: def.id,
            title: def.title.trim().to_string(),
            description: def.description,
            icon: def.icon,
            points: def.points,
            category: def.category,
            rarity: def.rarity,
            progress,
            max_progress: def.max_progress,
            unlocked_at,
        })
    }

    pub fn id(&self) -> &AchievementId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn max_progress(&self) -> u32 {
        self.max_progress
    }

    pub fn unlocked_at(&self) -> Option<DateTime<Utc>> {
        self.unlocked_at
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }

    /// Progress never decreases and never exceeds `max_progress`.
    ///
    /// Returns the unlock timestamp when this call performed the transition.
    pub fn update_progress(&mut self, new_progress: u32) -> Option<DateTime<Utc>> {
        self.progress = self.progress.max(new_progress.min(self.max_progress));
        self.unlock_if_complete()
    }

    /// Force the unlock, raising progress to the maximum.
    pub fn unlock(&mut self) -> Option<DateTime<Utc>> {
        self.progress = self.max_progress;
        self.unlock_if_complete()
    }

    fn unlock_if_complete(&mut self) -> Option<DateTime<Utc>> {
        if self.progress >= self.max_progress && self.unlocked_at.is_none() {
            let now = Utc::now();
            self.unlocked_at = Some(now);
            return Some(now);
        }
        None
    }
}
