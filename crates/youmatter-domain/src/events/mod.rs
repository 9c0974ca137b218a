use std::any::Any;
use std::fmt::Debug;

pub mod event_bus;
pub mod progression_events;

pub use event_bus::{DynamicEventHandler, EventBus, EventHandler, TypedEventHandlerWrapper};

/// Base trait for all domain events.
/// Events must be Send + Sync so they can cross the bus.
pub trait DomainEvent: Debug + Send + Sync + Any {
    /// Convert to Any for type-safe downcasting
    fn as_any(&self) -> &(dyn Any + Send + Sync);

    /// Fully qualified type name, used as the subscription key
    fn event_type_name(&self) -> &'static str;
}
