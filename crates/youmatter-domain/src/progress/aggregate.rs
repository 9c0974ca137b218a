use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::shared::{DomainError, UserId};

/// Experience needed per level. Level 1 starts at zero experience.
pub const EXPERIENCE_PER_LEVEL: u64 = 500;

pub fn level_for_experience(experience: u64) -> u32 {
    u32::try_from(experience / EXPERIENCE_PER_LEVEL + 1).unwrap_or(u32::MAX)
}

/// Outcome of an experience grant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub previous_level: u32,
    pub level: u32,
}

impl LevelChange {
    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

/// The session user's experience, points, level and streak
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    id: UserId,
    name: String,
    email: String,
    avatar: Option<String>,
    join_date: NaiveDate,
    experience: u64,
    total_points: u64,
    level: u32,
    streak: u32,
    longest_streak: u32,
}

impl UserProgress {
    pub fn new(name: String, email: String) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "User name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: UserId::new(),
            name: name.trim().to_string(),
            email,
            avatar: None,
            join_date: Utc::now().date_naive(),
            experience: 0,
            total_points: 0,
            level: 1,
            streak: 0,
            longest_streak: 0,
        })
    }

    /// Rebuild from seed data. The level is always derived from experience.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        name: String,
        email: String,
        avatar: Option<String>,
        join_date: NaiveDate,
        experience: u64,
        total_points: u64,
        streak: u32,
        longest_streak: u32,
    ) -> Self {
        Self {
            id,
            name,
            email,
            avatar,
            join_date,
            experience,
            total_points,
            level: level_for_experience(experience),
            streak,
            longest_streak: longest_streak.max(streak),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    /// Experience still missing before the next level
    pub fn experience_to_next_level(&self) -> u64 {
        EXPERIENCE_PER_LEVEL - self.experience % EXPERIENCE_PER_LEVEL
    }

    pub fn grant_experience(&mut self, amount: u64) -> LevelChange {
        let previous_level = self.level;
        self.experience = self.experience.saturating_add(amount);
        self.total_points = self.total_points.saturating_add(amount);
        self.level = level_for_experience(self.experience);

        LevelChange {
            previous_level,
            level: self.level,
        }
    }

    /// Credit points that do not count as experience (rewards, insurance activity)
    pub fn credit_points(&mut self, points: u64) {
        self.total_points = self.total_points.saturating_add(points);
    }

    /// Returns the previous streak
    pub fn update_streak(&mut self, streak: u32) -> u32 {
        let previous = self.streak;
        self.streak = streak;
        self.longest_streak = self.longest_streak.max(streak);
        previous
    }
}
