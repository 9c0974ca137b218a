mod engagement;

pub use engagement::{EngagementConfig, LogLevel, CONFIG_ENV_VAR};
