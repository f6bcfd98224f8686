//! Unified error handling for the command layer.
//!
//! Handler faults never escape the dispatcher: they are logged and, when
//! [`HandlerError::is_user_facing`] says so, echoed to the active panel.

use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur while a command handler runs.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Required argument missing. Carries the usage line without prefix.
    #[error("not enough parameters (usage: {0})")]
    NeedMoreParams(&'static str),

    /// The command needs a channel and none was given or active.
    #[error("not on a channel")]
    NotOnChannel,

    #[error("connection is restricted to {0}")]
    ServerRestricted(String),

    #[error("invalid mask {mask}: {reason}")]
    InvalidMask { mask: String, reason: MaskError },

    #[error("alias error: {0}")]
    Alias(#[from] AliasError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Static label for log fields and usage counters.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams(_) => "need_more_params",
            Self::NotOnChannel => "not_on_channel",
            Self::ServerRestricted(_) => "server_restricted",
            Self::InvalidMask { .. } => "invalid_mask",
            Self::Alias(_) => "alias",
            Self::Settings(_) => "settings",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Whether the error text is worth showing to the user.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Alias Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias expansion of {alias} exceeded {depth} steps")]
    DepthExceeded { alias: String, depth: usize },

    #[error("alias {0} expands to itself")]
    SelfReference(String),

    #[error("alias name is empty")]
    EmptyName,
}

// ============================================================================
// Mask Errors
// ============================================================================

#[derive(Debug, Clone, Error)]
pub enum MaskError {
    #[error("more than one '!'")]
    ExtraBang,

    #[error("more than one '@'")]
    ExtraAt,

    #[error("{0}")]
    Pattern(#[from] regex::Error),
}

// ============================================================================
// Settings Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no settings file configured")]
    NoPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_codes() {
        assert_eq!(HandlerError::NeedMoreParams("nick <nick>").error_code(), "need_more_params");
        assert_eq!(HandlerError::Internal("x".into()).error_code(), "internal_error");
        assert_eq!(
            HandlerError::from(SettingsError::NoPath).error_code(),
            "settings"
        );
    }

    #[test]
    fn test_internal_errors_stay_quiet() {
        assert!(HandlerError::NeedMoreParams("nick <nick>").is_user_facing());
        assert!(HandlerError::ServerRestricted("irc.example.net".into()).is_user_facing());
        assert!(HandlerError::NotOnChannel.is_user_facing());
        assert!(
            HandlerError::InvalidMask { mask: "a!b!c".into(), reason: MaskError::ExtraBang }
                .is_user_facing()
        );
        assert!(!HandlerError::Internal("oops".into()).is_user_facing());
    }

    #[test]
    fn test_alias_error_message() {
        let err = AliasError::DepthExceeded { alias: "/a".into(), depth: 16 };
        assert_eq!(err.to_string(), "alias expansion of /a exceeded 16 steps");
    }
}
