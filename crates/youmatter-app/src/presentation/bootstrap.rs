use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::config::EngagementConfig;
use crate::application::queries::LedgerQueryService;
use crate::application::seeder::seed_demo_ledger;
use crate::application::services::{LedgerStore, RewardEngine};
use crate::presentation::state::{AppState, CommandHandlers, Queries, Runtime};
use youmatter_domain::events::EventBus;
use youmatter_domain::shared::DomainError;
use youmatter_domain::ProgressionLedger;
use youmatter_infrastructure::events::InMemoryEventBus;

pub async fn build_demo_app_state(config: EngagementConfig) -> Result<AppState, DomainError> {
    info!("🌱 Seeding demo profile...");
    let started_at = Instant::now();
    let ledger = seed_demo_ledger()?;
    info!(
        "✓ Demo profile seeded ({}ms)",
        started_at.elapsed().as_millis()
    );

    build_app_state(config, ledger).await
}

pub async fn build_app_state(
    config: EngagementConfig,
    ledger: ProgressionLedger,
) -> Result<AppState, DomainError> {
    let startup_started_at = Instant::now();

    let event_bus = Arc::new(InMemoryEventBus::new());
    let store = Arc::new(LedgerStore::new(
        ledger,
        event_bus.clone() as Arc<dyn EventBus>,
    ));

    info!("🎯 Registering reward engine...");
    let started_at = Instant::now();
    RewardEngine::register(&event_bus, &store, &config).await?;
    info!(
        "✓ Reward engine registered ({}ms)",
        started_at.elapsed().as_millis()
    );

    let command_handlers = CommandHandlers::new(&store, &config);
    let queries = Queries {
        ledger: Arc::new(LedgerQueryService::new(store.clone())),
    };

    info!(
        "✅ Application state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        runtime: Runtime {
            event_bus,
            store,
            config,
        },
        queries,
        command_handlers,
    })
}
