//! Error types for Kino Embed

use thiserror::Error;

/// Result type alias for embed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Embed error types
///
/// The selection engine itself never fails: an unsupported format simply
/// produces no markup. Errors come from URL and configuration parsing, or
/// from a player that breaks its contract.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Invalid media URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    // Player errors
    #[error("Player '{player}' failed: {message}")]
    Player { player: String, message: String },

    #[error("Unknown player kind: {0}")]
    UnknownPlayer(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a player contract error
    pub fn player(player: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Player {
            player: player.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error originates from configuration loading
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownPlayer(_)
                | Error::InvalidConfig(_)
                | Error::Serialization(_)
                | Error::Io(_)
        )
    }

    /// Returns the error code for logs and CLI output
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidUrl(_) => "INVALID_URL",
            Error::InvalidDimension(_) => "INVALID_DIMENSION",
            Error::Player { .. } => "PLAYER",
            Error::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Serialization(_) => "SERIALIZATION",
            Error::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::player("video", "boom").error_code(), "PLAYER");
        assert_eq!(Error::UnknownPlayer("flash".into()).error_code(), "UNKNOWN_PLAYER");
    }

    #[test]
    fn test_player_error_display() {
        let err = Error::player("video", "two fallback slots");
        assert_eq!(err.to_string(), "Player 'video' failed: two fallback slots");
        assert!(!err.is_config_error());
        assert!(Error::InvalidConfig("x".into()).is_config_error());
    }
}
