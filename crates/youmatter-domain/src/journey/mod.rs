mod aggregate;

pub use aggregate::{Journey, JourneyCategory, JourneyDefinition, JourneyStage, StageCompletion};
