//! Core library for textlens.
//!
//! This crate provides the text analysis engine and the pieces the
//! `textlens` CLI wires around it.
//!
//! # Modules
//!
//! - [`analysis`] - The pure text analyzer and its report
//! - [`text`] - Word and sentence splitting
//! - [`accounts`] - Credential storage behind the [`AccountStore`] trait
//! - [`session`] - The explicit sign-in / submit / clear state machine
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textlens_core::analyze;
//!
//! let report = analyze("Hello world.");
//! assert_eq!(report.character_count, 12);
//! assert_eq!(report.word_count, 2);
//! assert_eq!(report.sentence_count, 1);
//! ```
#![deny(unsafe_code)]

pub mod accounts;
pub mod analysis;
pub mod config;
pub mod error;
pub mod session;
pub mod text;

pub use accounts::{AccountStore, MemoryAccountStore, SqliteAccountStore};
pub use analysis::{AnalysisReport, analyze, has_content};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    AccountError, AccountResult, ConfigError, ConfigResult, InputError, SessionError,
};
pub use session::{Session, SessionEvent, SessionState};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Reject text larger than `max_bytes`.
///
/// Returns the byte length on success so callers can log it.
pub fn check_input_size(text: &str, max_bytes: Option<usize>) -> Result<usize, InputError> {
    let size = text.len();
    match max_bytes {
        Some(max) if size > max => Err(InputError::TooLarge { size, max }),
        _ => Ok(size),
    }
}
