//! Error types for rapid_textstats
//!
//! The analytics themselves never fail. Errors only come from the edges:
//! parsing option bags and managing change subscriptions.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextStatsError>;

/// Main error type for rapid_textstats
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextStatsError {
    /// Option bag could not be parsed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The source already has a live binding in this registry
    #[error("Source {source_id:#x} is already bound")]
    AlreadyBound { source_id: usize },

    /// The source has no live binding in this registry
    #[error("Source {source_id:#x} is not bound")]
    NotBound { source_id: usize },
}

impl TextStatsError {
    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an already-bound error
    pub fn already_bound(source_id: usize) -> Self {
        Self::AlreadyBound { source_id }
    }

    /// Create a not-bound error
    pub fn not_bound(source_id: usize) -> Self {
        Self::NotBound { source_id }
    }

    /// Check if this error came from the subscription registry
    pub fn is_binding_error(&self) -> bool {
        matches!(self, Self::AlreadyBound { .. } | Self::NotBound { .. })
    }
}

impl From<serde_json::Error> for TextStatsError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextStatsError::serialization("expected a boolean");
        assert!(err.to_string().contains("Serialization error"));
        assert!(err.to_string().contains("expected a boolean"));

        let err = TextStatsError::already_bound(0x10);
        assert_eq!(err.to_string(), "Source 0x10 is already bound");

        let err = TextStatsError::not_bound(0x20);
        assert_eq!(err.to_string(), "Source 0x20 is not bound");
    }

    #[test]
    fn test_is_binding_error() {
        assert!(TextStatsError::already_bound(1).is_binding_error());
        assert!(TextStatsError::not_bound(1).is_binding_error());
        assert!(!TextStatsError::serialization("bad").is_binding_error());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<bool>("nope").unwrap_err();
        let err: TextStatsError = err.into();
        assert!(matches!(err, TextStatsError::Serialization { .. }));
    }
}
