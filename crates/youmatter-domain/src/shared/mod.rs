use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId);
define_id!(AchievementId);
define_id!(ChallengeId);
define_id!(RequirementId);
define_id!(RewardId);
define_id!(NotificationId);
define_id!(ActivityId);
define_id!(InsuranceActivityId);
define_id!(JourneyId);
define_id!(StageId);
define_id!(FriendId);
define_id!(RecommendationId);
define_id!(TokenId);

/// Engagement area shared by achievements and challenges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Health,
    Wellness,
    Insurance,
    Social,
}

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    NotFound = 2001,

    // Data & Persistence (4xxx)
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidArgument = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::NotFound | ErrorCode::ValidationError | ErrorCode::InvalidArgument => {
                ErrorSeverity::Info
            }
            ErrorCode::SerializationError => ErrorSeverity::Warning,
            ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable (can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::InfrastructureError)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::NotFound(_) => ErrorCode::NotFound,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Serialization(_) | DomainError::Deserialization(_) => {
                ErrorCode::SerializationError
            }
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg)
            | DomainError::Validation(msg)
            | DomainError::NotFound(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Serialization(msg)
            | DomainError::Deserialization(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

/// Reject negative point amounts before they reach an unsigned counter.
pub fn non_negative(amount: i64, what: &str) -> Result<u64, DomainError> {
    u64::try_from(amount).map_err(|_| {
        DomainError::InvalidArgument(format!("{what} must not be negative, got {amount}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip_through_string() {
        let id = AchievementId::from_string("5");
        assert_eq!(id.as_str(), "5");
        assert_eq!(id.to_string(), "5");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"5\"");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(RewardId::new(), RewardId::new());
    }

    #[test]
    fn test_invalid_argument_code() {
        let err = DomainError::InvalidArgument("amount must not be negative".to_string());
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert!(!err.is_recoverable());
        assert_eq!(
            err.format_with_code(),
            "[6002] Invalid argument: amount must not be negative"
        );
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(0, "amount").unwrap(), 0);
        assert_eq!(non_negative(42, "amount").unwrap(), 42);
        assert!(matches!(
            non_negative(-1, "amount"),
            Err(DomainError::InvalidArgument(_))
        ));
    }
}
