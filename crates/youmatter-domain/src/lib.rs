// Domain layer - progression rules and state
// No dependencies on infrastructure or application layers

pub mod achievement;
pub mod activity;
pub mod challenge;
pub mod events;
pub mod insurance;
pub mod journey;
pub mod ledger;
pub mod notification;
pub mod personalization;
pub mod progress;
pub mod reward;
pub mod shared;
pub mod social;
pub mod token;

// Re-exports for convenience
pub use events::DomainEvent;
pub use ledger::{LedgerSummary, ProgressionLedger};
pub use shared::{AchievementId, ChallengeId, DomainError, NotificationId, RequirementId};
