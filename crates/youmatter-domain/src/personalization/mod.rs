use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::reward::RewardType;
use crate::shared::{DomainError, RecommendationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Achiever,
    Socializer,
    Explorer,
    HabitBuilder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakSensitivity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationProfile {
    pub id: String,
    pub archetype: Archetype,
    pub preferred_reward_type: RewardType,
    pub activity_time_of_day: TimeOfDay,
    pub streak_sensitivity: StreakSensitivity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default)]
    pub id: RecommendationId,
    pub title: String,
    pub description: String,
    pub target_route: String,
    /// Relevance in `[0, 1]`
    pub score: f64,
}

impl Recommendation {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.score.is_finite() || !(0.0..=1.0).contains(&self.score) {
            return Err(DomainError::InvalidArgument(format!(
                "Recommendation score must be within [0, 1], got {}",
                self.score
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personalization {
    profile: Option<MotivationProfile>,
    recommendations: VecDeque<Recommendation>,
}

impl Personalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile(&mut self, profile: MotivationProfile) {
        self.profile = Some(profile);
    }

    pub fn set_recommendations(&mut self, recommendations: Vec<Recommendation>) -> Result<(), DomainError> {
        for recommendation in &recommendations {
            recommendation.validate()?;
        }
        self.recommendations = recommendations.into();
        Ok(())
    }

    pub fn add_recommendation(&mut self, recommendation: Recommendation) -> Result<(), DomainError> {
        recommendation.validate()?;
        self.recommendations.push_front(recommendation);
        Ok(())
    }

    pub fn clear_recommendations(&mut self) {
        self.recommendations.clear();
    }

    pub fn profile(&self) -> Option<&MotivationProfile> {
        self.profile.as_ref()
    }

    pub fn recommendations(&self) -> impl Iterator<Item = &Recommendation> {
        self.recommendations.iter()
    }
}
