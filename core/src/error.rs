//! Error types for the Zillow web service client.
//!
//! # Design
//! The service reports failures in two distinct ways, and callers usually
//! care which one happened. `Transport` means the body never parsed as XML,
//! so the only thing known is the HTTP status. `Application` means the
//! service answered with a well-formed document whose `message/code` was
//! not `"0"`; the code and text are relayed verbatim.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZillowError>;

/// Errors returned by `Transport::fetch` and every `ZillowClient` operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZillowError {
    /// The response body could not be parsed as XML.
    ///
    /// `status` is `0` when the exchange failed before any HTTP status was
    /// received (refused connection, DNS failure, timeout).
    #[error("{message}")]
    Transport { status: u16, message: String },

    /// The service parsed the request and rejected it with a non-zero code.
    #[error("{code} {message}")]
    Application { code: String, message: String },
}

impl ZillowError {
    pub(crate) fn transport(status: u16) -> Self {
        ZillowError::Transport {
            status,
            message: format!("{status} Error"),
        }
    }

    /// Machine-readable code: the HTTP status for transport failures, the
    /// service's own code for application failures.
    pub fn code(&self) -> String {
        match self {
            ZillowError::Transport { status, .. } => status.to_string(),
            ZillowError::Application { code, .. } => code.clone(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ZillowError::Transport { message, .. } | ZillowError::Application { message, .. } => {
                message
            }
        }
    }
}

/// Errors raised while loading `ClientConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}
