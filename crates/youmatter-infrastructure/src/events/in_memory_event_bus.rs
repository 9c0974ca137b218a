use async_trait::async_trait;
use log::{debug, error};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use youmatter_domain::events::{DynamicEventHandler, EventBus};
use youmatter_domain::shared::DomainError;
use youmatter_domain::DomainEvent;

type HandlerMap = HashMap<&'static str, Vec<Arc<dyn DynamicEventHandler>>>;

/// In-memory event bus keyed by concrete event type.
///
/// Handlers run sequentially in subscription order. The handler list is
/// snapshotted before dispatch, so a handler may publish further events
/// (or subscribe) without deadlocking the bus.
pub struct InMemoryEventBus {
    handlers: Arc<RwLock<HandlerMap>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe a handler to a specific event type
    pub async fn subscribe<E: DomainEvent + 'static>(
        &self,
        handler: Arc<dyn DynamicEventHandler>,
    ) -> Result<(), DomainError> {
        let event_type_name = std::any::type_name::<E>();
        if handler.event_type_name() != event_type_name {
            return Err(DomainError::InvalidArgument(format!(
                "Handler for {} cannot subscribe to {}",
                handler.event_type_name(),
                event_type_name
            )));
        }

        let mut handlers = self.handlers.write().await;
        handlers.entry(event_type_name).or_default().push(handler);

        debug!("Subscribed handler for event type: {}", event_type_name);
        Ok(())
    }

    /// Get the number of handlers for a specific event type
    pub async fn handler_count<E: DomainEvent + 'static>(&self) -> usize {
        let event_type_name = std::any::type_name::<E>();
        let handlers = self.handlers.read().await;
        handlers.get(event_type_name).map_or(0, |h| h.len())
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
        let event_type_name = event.event_type_name();

        let event_handlers = {
            let handlers = self.handlers.read().await;
            handlers.get(event_type_name).cloned().unwrap_or_default()
        };

        if event_handlers.is_empty() {
            debug!("No handlers registered for event type: {}", event_type_name);
            return Ok(());
        }

        debug!(
            "Dispatching {} to {} handler(s)",
            event_type_name,
            event_handlers.len()
        );

        for handler in event_handlers {
            if let Err(e) = handler.handle_dynamic(event.as_any()).await {
                // Log and continue with the remaining handlers
                error!("Handler failed to process event {}: {}", event_type_name, e);
            }
        }

        Ok(())
    }
}
