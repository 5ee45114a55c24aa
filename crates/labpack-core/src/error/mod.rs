//! Error types and result aliases for packaging API operations.
//!
//! Provides a unified error type covering every failure a client call can
//! surface, from rejected logins to transport breakdowns. All errors are
//! terminal at this layer: no retry or fallback is attempted.

use thiserror::Error;

/// Unified error type for all packaging API operations
#[derive(Error, Debug)]
pub enum LabpackError {
    // Server-reported failures
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Shell '{name}' not found")]
    ShellNotFound { name: String },

    #[error("The server does not support {feature}")]
    FeatureUnavailable { feature: &'static str },

    /// Catch-all for unexpected server responses. The message is the raw
    /// response text (or a preformatted operation message around it), so
    /// the display output preserves whatever the server said.
    #[error("{message}")]
    Api { message: String },

    // Client-side failures
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to decode {message}")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid client configuration: {message}")]
    Config { message: String },
}

/// Result type alias for packaging API operations
pub type LabpackResult<T> = Result<T, LabpackError>;

impl LabpackError {
    /// Create a transport error from any error type
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a generic API error carrying the server's response text
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a decode error naming what was being decoded
    pub fn decode(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            message: message.into(),
            source,
        }
    }
}
