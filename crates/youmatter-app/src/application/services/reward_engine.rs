use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::LedgerStore;
use crate::application::config::EngagementConfig;
use youmatter_domain::events::progression_events::{
    AchievementUnlocked, ActivityLogged, StreakUpdated,
};
use youmatter_domain::events::{EventHandler, TypedEventHandlerWrapper};
use youmatter_domain::notification::{Notification, NotificationKind};
use youmatter_domain::reward::{Reward, RewardType};
use youmatter_domain::shared::DomainError;
use youmatter_infrastructure::events::InMemoryEventBus;

/// Reward rules that react to ledger writes.
///
/// Every handler holds a weak store reference; once the store is dropped
/// the handlers become no-ops.
pub struct RewardEngine;

impl RewardEngine {
    /// Subscribe the engine's handlers and run the initial streak check
    pub async fn register(
        bus: &InMemoryEventBus,
        store: &Arc<LedgerStore>,
        config: &EngagementConfig,
    ) -> Result<(), DomainError> {
        let weak = Arc::downgrade(store);

        let micro = MicroRewardHandler {
            store: weak.clone(),
            points_per_activity: config.micro_reward_per_activity,
        };
        bus.subscribe::<ActivityLogged>(Arc::new(
            TypedEventHandlerWrapper::<ActivityLogged, _>::new(micro),
        ))
        .await?;

        let streak_handler = StreakRewardHandler::new(weak.clone(), config);
        bus.subscribe::<StreakUpdated>(Arc::new(
            TypedEventHandlerWrapper::<StreakUpdated, _>::new(streak_handler.clone()),
        ))
        .await?;

        let notifier = AchievementNotifier { store: weak };
        bus.subscribe::<AchievementUnlocked>(Arc::new(
            TypedEventHandlerWrapper::<AchievementUnlocked, _>::new(notifier),
        ))
        .await?;

        let streak = store.read(|ledger| ledger.user().streak()).await;
        streak_handler.check(streak).await;

        let subscribed = bus.handler_count::<ActivityLogged>().await
            + bus.handler_count::<StreakUpdated>().await
            + bus.handler_count::<AchievementUnlocked>().await;
        info!("Reward engine registered ({} handler(s) on the bus)", subscribed);
        Ok(())
    }
}

struct MicroRewardHandler {
    store: Weak<LedgerStore>,
    points_per_activity: u64,
}

#[async_trait]
impl EventHandler<ActivityLogged> for MicroRewardHandler {
    async fn handle(&self, event: &ActivityLogged) -> Result<(), DomainError> {
        let Some(store) = self.store.upgrade() else {
            return Ok(());
        };
        debug!("Micro reward for activity {}", event.activity_id);

        let reward = Reward::new(
            "Consistent Engagement",
            "Logged 1 new activity",
            self.points_per_activity,
            RewardType::Micro,
        );
        store.mutate(|ledger| ledger.grant_reward(reward)).await;
        Ok(())
    }
}

/// Grants one reward per streak milestone value. Clones share the rewarded set.
#[derive(Clone)]
struct StreakRewardHandler {
    store: Weak<LedgerStore>,
    interval: u32,
    points: u64,
    rewarded: Arc<Mutex<HashSet<u32>>>,
}

impl StreakRewardHandler {
    fn new(store: Weak<LedgerStore>, config: &EngagementConfig) -> Self {
        Self {
            store,
            interval: config.streak_milestone_interval.max(1),
            points: config.streak_reward_points,
            rewarded: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    async fn check(&self, streak: u32) {
        if streak == 0 || streak % self.interval != 0 {
            return;
        }
        if !self.rewarded.lock().await.insert(streak) {
            return;
        }
        let Some(store) = self.store.upgrade() else {
            return;
        };

        info!("Streak milestone reached: {} days", streak);
        let reward = Reward::new(
            "Streak Milestone",
            format!("Congrats on a {streak}-day streak!"),
            self.points,
            RewardType::Streak,
        );
        store.mutate(|ledger| ledger.grant_reward(reward)).await;
    }
}

#[async_trait]
impl EventHandler<StreakUpdated> for StreakRewardHandler {
    async fn handle(&self, event: &StreakUpdated) -> Result<(), DomainError> {
        self.check(event.streak).await;
        Ok(())
    }
}

struct AchievementNotifier {
    store: Weak<LedgerStore>,
}

#[async_trait]
impl EventHandler<AchievementUnlocked> for AchievementNotifier {
    async fn handle(&self, event: &AchievementUnlocked) -> Result<(), DomainError> {
        let Some(store) = self.store.upgrade() else {
            return Ok(());
        };

        let notification = Notification::new(
            NotificationKind::Achievement,
            "Achievement Unlocked!",
            format!("You earned the \"{}\" badge (+{} pts)", event.title, event.points),
        )
        .with_action_url("/achievements");
        store
            .mutate(|ledger| ledger.add_notification(notification))
            .await
    }
}
