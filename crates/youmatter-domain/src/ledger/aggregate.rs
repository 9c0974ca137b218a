use chrono::Utc;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::achievement::{Achievement, AchievementDefinition};
use crate::activity::{Activity, ActivityLog};
use crate::challenge::{Challenge, ChallengeDefinition};
use crate::events::progression_events::{
    AchievementUnlocked, ActivityLogged, ChallengeCompleted, ChallengeJoined, ExperienceGranted,
    InsuranceActivityLogged, NotificationAdded, RequirementCompleted, RewardGranted,
    RewardsCleared, StageCompleted, StreakUpdated, TokenMinted,
};
use crate::events::DomainEvent;
use crate::insurance::{InsuranceActivity, InsuranceEngagement};
use crate::journey::{Journey, JourneyDefinition};
use crate::notification::{Notification, NotificationFeed};
use crate::personalization::{MotivationProfile, Personalization, Recommendation};
use crate::progress::UserProgress;
use crate::reward::{Reward, RewardLedger, RewardType};
use crate::shared::{
    non_negative, AchievementId, ActivityId, ChallengeId, DomainError, FriendId, JourneyId,
    NotificationId, RequirementId, StageId,
};
use crate::social::{Friend, LeaderboardEntry, SocialCircle};
use crate::token::{RewardToken, TokenWallet};

/// Read-side aggregate over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub unlocked_achievements: usize,
    pub total_points: u64,
    pub unread_notifications: u32,
    pub active_challenges: usize,
    pub joined_challenges: usize,
    pub completed_challenges: usize,
    pub total_reward_points: u64,
    pub points_from_insurance: u64,
    pub activity_count: usize,
    pub token_count: usize,
}

/// Progression ledger aggregate.
///
/// Owns every piece of gamification state for the session user. All
/// mutations are synchronous and record domain events, drained in mutation
/// order with [`ProgressionLedger::take_events`].
pub struct ProgressionLedger {
    user: UserProgress,
    achievements: Vec<Achievement>,
    unlocked_achievements: Vec<AchievementId>,
    challenges: Vec<Challenge>,
    joined_challenges: HashSet<ChallengeId>,
    completed_challenges: HashSet<ChallengeId>,
    rewards: RewardLedger,
    notifications: NotificationFeed,
    activities: ActivityLog,
    insurance: InsuranceEngagement,
    journeys: Vec<Journey>,
    social: SocialCircle,
    personalization: Personalization,
    tokens: TokenWallet,
    pending_events: Vec<Box<dyn DomainEvent>>,
}

impl ProgressionLedger {
    pub fn new(user: UserProgress) -> Self {
        Self {
            user,
            achievements: Vec::new(),
            unlocked_achievements: Vec::new(),
            challenges: Vec::new(),
            joined_challenges: HashSet::new(),
            completed_challenges: HashSet::new(),
            rewards: RewardLedger::new(),
            notifications: NotificationFeed::new(),
            activities: ActivityLog::new(),
            insurance: InsuranceEngagement::new(),
            journeys: Vec::new(),
            social: SocialCircle::new(),
            personalization: Personalization::new(),
            tokens: TokenWallet::new(),
            pending_events: Vec::new(),
        }
    }

    fn record(&mut self, event: impl DomainEvent) {
        self.pending_events.push(Box::new(event));
    }

    /// Drain recorded events in the order the mutations happened
    pub fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.pending_events)
    }

    // ========== User progress ==========

    pub fn grant_experience(&mut self, amount: i64) -> Result<(), DomainError> {
        let amount = non_negative(amount, "Experience amount")?;
        let change = self.user.grant_experience(amount);

        if change.leveled_up() {
            debug!(
                "User {} leveled up {} -> {}",
                self.user.id(),
                change.previous_level,
                change.level
            );
        }

        self.record(ExperienceGranted {
            amount,
            experience: self.user.experience(),
            total_points: self.user.total_points(),
            level: change.level,
            leveled_up: change.leveled_up(),
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    pub fn update_streak(&mut self, streak: u32) {
        let previous = self.user.update_streak(streak);
        self.record(StreakUpdated {
            previous,
            streak,
            occurred_at: Utc::now(),
        });
    }

    // ========== Achievements ==========

    pub fn add_achievement(&mut self, def: AchievementDefinition) -> Result<(), DomainError> {
        if self.achievement(&def.id).is_some() {
            return Err(DomainError::InvalidArgument(format!(
                "Achievement {} already exists",
                def.id
            )));
        }
        let achievement = Achievement::from_definition(def)?;
        if achievement.is_unlocked() {
            self.mark_unlocked(achievement.id().clone());
        }
        self.achievements.push(achievement);
        Ok(())
    }

    pub fn update_achievement_progress(
        &mut self,
        id: &AchievementId,
        new_progress: i64,
    ) -> Result<(), DomainError> {
        let new_progress = non_negative(new_progress, "Achievement progress")?;
        let new_progress = u32::try_from(new_progress).unwrap_or(u32::MAX);

        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id() == id) else {
            debug!("Ignoring progress for unknown achievement {}", id);
            return Ok(());
        };
        if let Some(unlocked_at) = achievement.update_progress(new_progress) {
            let event = AchievementUnlocked {
                achievement_id: achievement.id().clone(),
                title: achievement.title().to_string(),
                points: achievement.points(),
                unlocked_at,
            };
            self.mark_unlocked(id.clone());
            self.record(event);
        }
        Ok(())
    }

    pub fn unlock_achievement(&mut self, id: &AchievementId) {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id() == id) else {
            debug!("Ignoring unlock for unknown achievement {}", id);
            return;
        };
        if let Some(unlocked_at) = achievement.unlock() {
            let event = AchievementUnlocked {
                achievement_id: achievement.id().clone(),
                title: achievement.title().to_string(),
                points: achievement.points(),
                unlocked_at,
            };
            self.mark_unlocked(id.clone());
            self.record(event);
        }
    }

    fn mark_unlocked(&mut self, id: AchievementId) {
        if !self.unlocked_achievements.contains(&id) {
            self.unlocked_achievements.push(id);
        }
    }

    // ========== Challenges ==========

    pub fn add_challenge(&mut self, def: ChallengeDefinition) -> Result<(), DomainError> {
        if self.challenge(&def.id).is_some() {
            return Err(DomainError::InvalidArgument(format!(
                "Challenge {} already exists",
                def.id
            )));
        }
        let challenge = Challenge::from_definition(def)?;
        if !challenge.is_active() {
            self.completed_challenges.insert(challenge.id().clone());
        }
        self.challenges.push(challenge);
        Ok(())
    }

    /// Mark a challenge as joined without counting a new participant.
    /// Used when rebuilding a session whose participant counts already include the user.
    pub fn restore_joined_challenge(&mut self, id: &ChallengeId) -> Result<(), DomainError> {
        if self.challenge(id).is_none() {
            return Err(DomainError::NotFound(format!("Challenge {id}")));
        }
        self.joined_challenges.insert(id.clone());
        Ok(())
    }

    /// Returns whether the join took effect
    pub fn join_challenge(&mut self, id: &ChallengeId) -> bool {
        if self.joined_challenges.contains(id) {
            return false;
        }
        let Some(challenge) = self.challenges.iter_mut().find(|c| c.id() == id) else {
            debug!("Ignoring join for unknown challenge {}", id);
            return false;
        };
        if !challenge.is_active() {
            debug!("Ignoring join for completed challenge {}", id);
            return false;
        }

        let participants = challenge.add_participant();
        self.joined_challenges.insert(id.clone());
        self.record(ChallengeJoined {
            challenge_id: id.clone(),
            participants,
            occurred_at: Utc::now(),
        });
        true
    }

    /// Returns whether a requirement advanced
    pub fn complete_requirement(
        &mut self,
        challenge_id: &ChallengeId,
        requirement_id: &RequirementId,
    ) -> bool {
        let Some(challenge) = self.challenges.iter_mut().find(|c| c.id() == challenge_id) else {
            debug!("Ignoring requirement for unknown challenge {}", challenge_id);
            return false;
        };
        let Some(result) = challenge.complete_requirement(requirement_id) else {
            return false;
        };

        self.record(RequirementCompleted {
            challenge_id: challenge_id.clone(),
            requirement_id: requirement_id.clone(),
            current: result.current,
            target: result.target,
            challenge_progress: result.challenge_progress,
            occurred_at: Utc::now(),
        });
        true
    }

    pub fn update_challenge_progress(&mut self, id: &ChallengeId, progress: i64) -> Result<(), DomainError> {
        let progress = non_negative(progress, "Challenge progress")?;
        let progress = u32::try_from(progress).unwrap_or(u32::MAX);

        match self.challenges.iter_mut().find(|c| c.id() == id) {
            Some(challenge) => {
                challenge.update_progress(progress);
            }
            None => debug!("Ignoring progress for unknown challenge {}", id),
        }
        Ok(())
    }

    pub fn complete_challenge(&mut self, id: &ChallengeId) {
        let Some(challenge) = self.challenges.iter_mut().find(|c| c.id() == id) else {
            debug!("Ignoring completion of unknown challenge {}", id);
            return;
        };
        if !challenge.complete() {
            return;
        }
        let event = ChallengeCompleted {
            challenge_id: id.clone(),
            title: challenge.title().to_string(),
            points: challenge.points(),
            occurred_at: Utc::now(),
        };
        self.completed_challenges.insert(id.clone());
        self.record(event);
    }

    // ========== Rewards ==========

    /// Append to the reward ledger. Reward points also count toward the user's total.
    pub fn grant_reward(&mut self, reward: Reward) {
        let granted = self.rewards.grant(reward);
        let event = RewardGranted {
            reward_id: granted.id.clone(),
            reward_type: granted.reward_type,
            points: granted.points,
            total_reward_points: self.rewards.total_reward_points(),
            occurred_at: Utc::now(),
        };
        self.user.credit_points(event.points);
        self.record(event);
    }

    pub fn clear_rewards(&mut self) {
        let cleared = self.rewards.clear();
        self.record(RewardsCleared {
            cleared,
            occurred_at: Utc::now(),
        });
    }

    // ========== Notifications ==========

    pub fn add_notification(&mut self, notification: Notification) -> Result<(), DomainError> {
        let added = self.notifications.add(notification)?;
        let event = NotificationAdded {
            notification_id: added.id.clone(),
            kind: added.kind,
            unread_count: self.notifications.unread_count(),
            occurred_at: Utc::now(),
        };
        self.record(event);
        Ok(())
    }

    pub fn mark_notification_as_read(&mut self, id: &NotificationId) -> bool {
        self.notifications.mark_as_read(id)
    }

    pub fn mark_all_notifications_as_read(&mut self) -> usize {
        self.notifications.mark_all_as_read()
    }

    pub fn remove_notification(&mut self, id: &NotificationId) -> Option<Notification> {
        self.notifications.remove(id)
    }

    // ========== Activities ==========

    pub fn log_activity(&mut self, activity: Activity) {
        let logged = self.activities.log(activity);
        let event = ActivityLogged {
            activity_id: logged.id.clone(),
            title: logged.title.clone(),
            points: logged.points,
            total_activities: self.activities.len(),
            occurred_at: Utc::now(),
        };
        self.record(event);
    }

    pub fn complete_activity(&mut self, id: &ActivityId) -> bool {
        self.activities.complete(id)
    }

    /// Seed historic activities without emitting events
    pub fn restore_activities(&mut self, activities: Vec<Activity>) {
        self.activities = ActivityLog::restore(activities);
    }

    // ========== Insurance ==========

    pub fn log_insurance_activity(&mut self, activity: InsuranceActivity) {
        let logged = self.insurance.log(activity);
        let event = InsuranceActivityLogged {
            activity_id: logged.id.clone(),
            kind: logged.kind,
            points: logged.points,
            points_from_insurance: self.insurance.points_from_insurance(),
            occurred_at: Utc::now(),
        };
        self.user.credit_points(event.points);
        self.record(event);
    }

    /// Seed historic insurance activities without crediting the user again
    pub fn restore_insurance_activities(&mut self, activities: Vec<InsuranceActivity>) {
        self.insurance = InsuranceEngagement::restore(activities);
    }

    /// Empties the insurance log. `total_points` keeps what was already earned.
    pub fn clear_insurance_activities(&mut self) -> usize {
        self.insurance.clear()
    }

    // ========== Journeys ==========

    pub fn add_journey(&mut self, def: JourneyDefinition) -> Result<(), DomainError> {
        if self.journey(&def.id).is_some() {
            return Err(DomainError::InvalidArgument(format!(
                "Journey {} already exists",
                def.id
            )));
        }
        self.journeys.push(Journey::from_definition(def)?);
        Ok(())
    }

    /// Returns whether the stage was completed for the first time
    pub fn complete_stage(&mut self, journey_id: &JourneyId, stage_id: &StageId) -> bool {
        let Some(journey) = self.journeys.iter_mut().find(|j| j.id() == journey_id) else {
            debug!("Ignoring stage for unknown journey {}", journey_id);
            return false;
        };
        let Some(completion) = journey.complete_stage(stage_id) else {
            debug!("Ignoring unknown stage {} of journey {}", stage_id, journey_id);
            return false;
        };
        if completion.newly_completed {
            self.record(StageCompleted {
                journey_id: journey_id.clone(),
                stage_id: stage_id.clone(),
                current_stage_index: completion.current_stage_index,
                occurred_at: Utc::now(),
            });
        }
        completion.newly_completed
    }

    // ========== Social ==========

    pub fn add_friend(&mut self, friend: Friend) -> Result<(), DomainError> {
        self.social.add_friend(friend)
    }

    pub fn remove_friend(&mut self, id: &FriendId) -> bool {
        self.social.remove_friend(id)
    }

    pub fn update_leaderboard(&mut self, entries: Vec<LeaderboardEntry>) {
        self.social.update_leaderboard(entries);
    }

    // ========== Personalization ==========

    pub fn set_motivation_profile(&mut self, profile: MotivationProfile) {
        self.personalization.set_profile(profile);
    }

    pub fn set_recommendations(&mut self, recommendations: Vec<Recommendation>) -> Result<(), DomainError> {
        self.personalization.set_recommendations(recommendations)
    }

    pub fn add_recommendation(&mut self, recommendation: Recommendation) -> Result<(), DomainError> {
        self.personalization.add_recommendation(recommendation)
    }

    pub fn clear_recommendations(&mut self) {
        self.personalization.clear_recommendations();
    }

    // ========== Tokens ==========

    pub fn mint_token(&mut self, title: String, description: String, points: u64) -> RewardToken {
        let token = self.tokens.mint(title, description, points).clone();
        self.record(TokenMinted {
            token_id: token.id.clone(),
            points: token.points,
            tx_hash: token.tx_hash.clone(),
            occurred_at: token.minted_at,
        });
        token
    }

    pub fn clear_tokens(&mut self) {
        self.tokens.clear();
    }

    // ========== Read side ==========

    pub fn user(&self) -> &UserProgress {
        &self.user
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn achievement(&self, id: &AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id() == id)
    }

    /// Unlocked achievement ids in unlock order
    pub fn unlocked_achievements(&self) -> &[AchievementId] {
        &self.unlocked_achievements
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn challenge(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id() == id)
    }

    pub fn is_joined(&self, id: &ChallengeId) -> bool {
        self.joined_challenges.contains(id)
    }

    pub fn rewards(&self) -> &RewardLedger {
        &self.rewards
    }

    pub fn notifications(&self) -> &NotificationFeed {
        &self.notifications
    }

    pub fn activities(&self) -> &ActivityLog {
        &self.activities
    }

    pub fn insurance(&self) -> &InsuranceEngagement {
        &self.insurance
    }

    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }

    pub fn journey(&self, id: &JourneyId) -> Option<&Journey> {
        self.journeys.iter().find(|j| j.id() == id)
    }

    pub fn social(&self) -> &SocialCircle {
        &self.social
    }

    pub fn personalization(&self) -> &Personalization {
        &self.personalization
    }

    pub fn tokens(&self) -> &TokenWallet {
        &self.tokens
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            unlocked_achievements: self.unlocked_achievements.len(),
            total_points: self.user.total_points(),
            unread_notifications: self.notifications.unread_count(),
            active_challenges: self.challenges.iter().filter(|c| c.is_active()).count(),
            joined_challenges: self.joined_challenges.len(),
            completed_challenges: self.completed_challenges.len(),
            total_reward_points: self.rewards.total_reward_points(),
            points_from_insurance: self.insurance.points_from_insurance(),
            activity_count: self.activities.len(),
            token_count: self.tokens.len(),
        }
    }

    /// Points granted per reward type, for the rewards breakdown view
    pub fn reward_points_by_type(&self) -> HashMap<RewardType, u64> {
        let mut totals = HashMap::new();
        for reward in self.rewards.rewards() {
            *totals.entry(reward.reward_type).or_insert(0) += reward.points;
        }
        totals
    }
}
