use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

use youmatter_domain::events::EventBus;
use youmatter_domain::ProgressionLedger;

/// Single-writer home of the ledger.
///
/// Writes are serialized through one mutex. Events recorded by a write are
/// drained while the lock is held and published after it is released, in
/// mutation order, so handlers may write back into the store.
pub struct LedgerStore {
    ledger: Mutex<ProgressionLedger>,
    event_bus: Arc<dyn EventBus>,
}

impl LedgerStore {
    pub fn new(ledger: ProgressionLedger, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            event_bus,
        }
    }

    pub async fn mutate<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut ProgressionLedger) -> T + Send,
        T: Send,
    {
        let (result, events) = {
            let mut ledger = self.ledger.lock().await;
            let result = f(&mut ledger);
            (result, ledger.take_events())
        };

        if !events.is_empty() {
            debug!("Publishing {} ledger event(s)", events.len());
        }
        for event in events {
            let event_type = event.event_type_name();
            if let Err(e) = self.event_bus.publish(event).await {
                error!("Failed to publish {}: {}", event_type, e);
            }
        }

        result
    }

    pub async fn read<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&ProgressionLedger) -> T + Send,
        T: Send,
    {
        let ledger = self.ledger.lock().await;
        f(&ledger)
    }
}
