use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::shared::InsuranceActivityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceActivityKind {
    PolicyReview,
    ClaimSubmission,
    PremiumPayment,
    WellnessCheck,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceActivity {
    #[serde(default)]
    pub id: InsuranceActivityId,
    #[serde(rename = "type")]
    pub kind: InsuranceActivityKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub points: u64,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
}

/// Insurance-related activity log and the points it earned
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceEngagement {
    activities: VecDeque<InsuranceActivity>,
    points_from_insurance: u64,
}

impl InsuranceEngagement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from history, newest first. The points total is recomputed.
    pub fn restore(activities: Vec<InsuranceActivity>) -> Self {
        let points_from_insurance = activities.iter().map(|a| a.points).sum();
        Self {
            activities: activities.into(),
            points_from_insurance,
        }
    }

    pub fn log(&mut self, mut activity: InsuranceActivity) -> &InsuranceActivity {
        activity.completed_at.get_or_insert_with(Utc::now);
        self.points_from_insurance = self.points_from_insurance.saturating_add(activity.points);
        self.activities.push_front(activity);
        &self.activities[0]
    }

    pub fn clear(&mut self) -> usize {
        let cleared = self.activities.len();
        self.activities.clear();
        self.points_from_insurance = 0;
        cleared
    }

    pub fn activities(&self) -> impl Iterator<Item = &InsuranceActivity> {
        self.activities.iter()
    }

    pub fn points_from_insurance(&self) -> u64 {
        self.points_from_insurance
    }
}
