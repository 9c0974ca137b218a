//! Integration: ledger mutations drained and published through the in-memory bus
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use youmatter_domain::activity::{Activity, ActivityCategory};
use youmatter_domain::events::progression_events::{
    ActivityLogged, ExperienceGranted, RewardGranted,
};
use youmatter_domain::events::{
    DynamicEventHandler, EventBus, EventHandler, TypedEventHandlerWrapper,
};
use youmatter_domain::progress::UserProgress;
use youmatter_domain::reward::{Reward, RewardType};
use youmatter_domain::{DomainError, DomainEvent, ProgressionLedger};
use youmatter_infrastructure::events::InMemoryEventBus;

#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl EventHandler<ExperienceGranted> for Recorder {
    async fn handle(&self, event: &ExperienceGranted) -> Result<(), DomainError> {
        self.seen.lock().await.push(format!("xp:{}", event.amount));
        Ok(())
    }
}

#[async_trait]
impl EventHandler<ActivityLogged> for Recorder {
    async fn handle(&self, event: &ActivityLogged) -> Result<(), DomainError> {
        self.seen.lock().await.push(format!("activity:{}", event.title));
        Ok(())
    }
}

#[async_trait]
impl EventHandler<RewardGranted> for Recorder {
    async fn handle(&self, event: &RewardGranted) -> Result<(), DomainError> {
        self.seen.lock().await.push(format!("reward:{}", event.points));
        Ok(())
    }
}

fn wrap<E>(recorder: &Recorder) -> Arc<dyn DynamicEventHandler>
where
    E: DomainEvent + 'static,
    Recorder: EventHandler<E>,
{
    Arc::new(TypedEventHandlerWrapper::<E, _>::new(recorder.clone()))
}

#[tokio::test]
async fn events_reach_subscribers_in_mutation_order() {
    let bus = InMemoryEventBus::new();
    let recorder = Recorder::default();

    bus.subscribe::<ExperienceGranted>(wrap::<ExperienceGranted>(&recorder))
        .await
        .unwrap();
    bus.subscribe::<ActivityLogged>(wrap::<ActivityLogged>(&recorder))
        .await
        .unwrap();
    bus.subscribe::<RewardGranted>(wrap::<RewardGranted>(&recorder))
        .await
        .unwrap();

    let user = UserProgress::new("Alex Johnson".to_string(), "alex@example.com".to_string())
        .expect("valid user");
    let mut ledger = ProgressionLedger::new(user);

    ledger.grant_experience(42).unwrap();
    ledger.log_activity(Activity::new("Quick Boost", ActivityCategory::Wellness, 42));
    ledger.grant_reward(Reward::new("Consistent Engagement", "", 10, RewardType::Micro));
    ledger.update_streak(3);

    for event in ledger.take_events() {
        bus.publish(event).await.unwrap();
    }

    let seen = recorder.seen.lock().await.clone();
    assert_eq!(seen, vec!["xp:42", "activity:Quick Boost", "reward:10"]);
    assert!(ledger.take_events().is_empty());
}
