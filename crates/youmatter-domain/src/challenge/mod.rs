mod aggregate;
mod value_objects;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::Challenge;
pub use value_objects::{ChallengeDefinition, ChallengeKind, Requirement, RequirementProgress};
