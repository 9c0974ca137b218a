use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_ENV_VAR: &str = "YOUMATTER_CONFIG";
const CONFIG_FILE_NAME: &str = "engagement.json";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Tunables for the reward engine and the UI flow bonuses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngagementConfig {
    pub log_level: LogLevel,
    /// Micro reward per newly logged activity
    pub micro_reward_per_activity: u64,
    pub streak_milestone_interval: u32,
    pub streak_reward_points: u64,
    /// Experience for joining a challenge
    pub join_challenge_bonus: u64,
    /// Experience for completing one requirement step
    pub requirement_bonus: u64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            micro_reward_per_activity: 10,
            streak_milestone_interval: 7,
            streak_reward_points: 50,
            join_challenge_bonus: 25,
            requirement_bonus: 10,
        }
    }
}

impl EngagementConfig {
    /// Resolve the config path: `$YOUMATTER_CONFIG`, else `<config dir>/youmatter/engagement.json`
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("youmatter").join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults on any problem
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                info!("📁 Config loaded from: {:?}", path);
                config
            }
            Err(e) => {
                warn!("Invalid engagement config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.streak_milestone_interval == 0 {
            anyhow::bail!("streak_milestone_interval must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::from_u8(1), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(3), LogLevel::Info);
        assert_eq!(LogLevel::from_u8(5), LogLevel::Trace);
        assert_eq!(LogLevel::from_u8(99), LogLevel::Info);
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "debug", "streak_reward_points": 75}}"#).unwrap();

        let config = EngagementConfig::load_from(file.path()).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.streak_reward_points, 75);
        assert_eq!(config.micro_reward_per_activity, 10);
        assert_eq!(config.streak_milestone_interval, 7);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(
            EngagementConfig::load_or_default(file.path()),
            EngagementConfig::default()
        );

        let mut zero = tempfile::NamedTempFile::new().unwrap();
        write!(zero, r#"{{"streak_milestone_interval": 0}}"#).unwrap();
        assert!(EngagementConfig::load_from(zero.path()).is_err());
    }
}
