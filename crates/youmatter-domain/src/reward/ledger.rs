use chrono::Utc;
use serde::Serialize;
use std::collections::VecDeque;

use super::value_objects::Reward;

/// Append-only, most-recent-first reward log with a running point total
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardLedger {
    rewards: VecDeque<Reward>,
    total_reward_points: u64,
}

impl RewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, mut reward: Reward) -> &Reward {
        reward.granted_at.get_or_insert_with(Utc::now);
        self.total_reward_points = self.total_reward_points.saturating_add(reward.points);
        self.rewards.push_front(reward);
        &self.rewards[0]
    }

    /// Drop every entry and zero the running total. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let cleared = self.rewards.len();
        self.rewards.clear();
        self.total_reward_points = 0;
        cleared
    }

    pub fn rewards(&self) -> impl Iterator<Item = &Reward> {
        self.rewards.iter()
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn total_reward_points(&self) -> u64 {
        self.total_reward_points
    }
}
