mod aggregate;
mod value_objects;


pub use aggregate::Achievement;
pub use value_objects::{AchievementDefinition, Rarity};
