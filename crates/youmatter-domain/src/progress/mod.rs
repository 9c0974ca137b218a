mod aggregate;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{level_for_experience, LevelChange, UserProgress, EXPERIENCE_PER_LEVEL};
