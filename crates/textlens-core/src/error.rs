//! Error types for textlens-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by an [`AccountStore`](crate::accounts::AccountStore).
///
/// A duplicate registration or a failed credential check is *not* an error;
/// both are reported through the `bool` result of the store operation.
#[derive(Error, Debug)]
pub enum AccountError {
    /// The backing SQLite database failed.
    #[error("account storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The account database directory could not be created.
    #[error("failed to prepare account database directory: {0}")]
    Io(#[from] std::io::Error),

    /// The account id is empty or only whitespace.
    #[error("account id must not be blank")]
    InvalidId,

    /// A previous panic left the in-memory store locked.
    #[error("account store lock poisoned")]
    Poisoned,
}

/// Result type alias using [`AccountError`].
pub type AccountResult<T> = Result<T, AccountError>;

/// Errors raised when a [`Session`](crate::session::Session) receives an
/// event that is not valid in its current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A text event arrived before anyone signed in.
    #[error("cannot handle `{event}` before signing in")]
    NotSignedIn {
        /// Name of the rejected event.
        event: &'static str,
    },
}

/// Result type alias using [`SessionError`].
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while validating input text before analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {max} bytes)")]
    TooLarge {
        /// Size of the input in bytes.
        size: usize,
        /// Configured limit in bytes.
        max: usize,
    },
}
