//! Interactive session state.
//!
//! A [`Session`] is owned by whatever drives the interaction (the CLI
//! `session` command, for instance). It moves between three states on
//! explicit [`SessionEvent`]s and runs [`analyze`] exactly once per
//! [`SessionEvent::TextSubmitted`]. The analyzer knows nothing about it.
//!
//! ```text
//!  LoggedOut --LoginSucceeded--> AwaitingInput --TextSubmitted--> ShowingReport
//!      ^                           ^    ^                              |
//!      |                           |    +--------- Cleared ------------+
//!      +------- SignedOut ---------+-----------------------------------+
//! ```

use crate::accounts::AccountStore;
use crate::analysis::{AnalysisReport, analyze, has_content};
use crate::error::{AccountResult, SessionError, SessionResult};

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No one has signed in yet.
    #[default]
    LoggedOut,
    /// Signed in, waiting for text.
    AwaitingInput,
    /// Signed in, showing the report for the last non-blank submission.
    ShowingReport {
        /// The submitted text, kept so a UI can redisplay it.
        text: String,
        /// The analysis of `text`.
        report: AnalysisReport,
    },
}

impl SessionState {
    /// Short, stable name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoggedOut => "logged_out",
            Self::AwaitingInput => "awaiting_input",
            Self::ShowingReport { .. } => "showing_report",
        }
    }
}

/// Something that happened in the interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Credentials were accepted.
    LoginSucceeded,
    /// The user submitted a block of text.
    TextSubmitted(String),
    /// The user cleared the input.
    Cleared,
    /// The user signed out.
    SignedOut,
}

impl SessionEvent {
    /// Short, stable name for logs and errors.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoginSucceeded => "login_succeeded",
            Self::TextSubmitted(_) => "text_submitted",
            Self::Cleared => "cleared",
            Self::SignedOut => "signed_out",
        }
    }
}

/// Explicit finite-state session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Start a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether someone is signed in.
    pub const fn is_signed_in(&self) -> bool {
        !matches!(self.state, SessionState::LoggedOut)
    }

    /// The report on display, if any.
    pub const fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            SessionState::ShowingReport { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Apply an event.
    ///
    /// Text events (`TextSubmitted`, `Cleared`) are rejected while signed
    /// out and leave the state untouched. A blank submission returns to
    /// `AwaitingInput` without producing a report.
    #[tracing::instrument(skip_all, fields(event = event.name(), from = self.state.name()))]
    pub fn handle(&mut self, event: SessionEvent) -> SessionResult<&SessionState> {
        let next = match (&self.state, event) {
            (SessionState::LoggedOut, SessionEvent::LoginSucceeded) => SessionState::AwaitingInput,
            (_, SessionEvent::LoginSucceeded) => return Ok(&self.state),
            (_, SessionEvent::SignedOut) => SessionState::LoggedOut,
            (SessionState::LoggedOut, event) => {
                return Err(SessionError::NotSignedIn {
                    event: event.name(),
                });
            }
            (_, SessionEvent::Cleared) => SessionState::AwaitingInput,
            (_, SessionEvent::TextSubmitted(text)) => {
                if has_content(&text) {
                    let report = analyze(&text);
                    SessionState::ShowingReport { text, report }
                } else {
                    tracing::debug!("blank submission, nothing to analyze");
                    SessionState::AwaitingInput
                }
            }
        };

        tracing::debug!(to = next.name(), "session transition");
        self.state = next;
        Ok(&self.state)
    }

    /// Verify credentials through `store` and sign in on success.
    ///
    /// Returns `Ok(false)` and leaves the session unchanged when the
    /// credentials are rejected.
    pub fn sign_in(
        &mut self,
        store: &dyn AccountStore,
        id: &str,
        secret: &str,
    ) -> AccountResult<bool> {
        if !store.verify(id, secret)? {
            tracing::debug!("sign-in rejected");
            return Ok(false);
        }
        if !self.is_signed_in() {
            tracing::debug!(to = "awaiting_input", "session transition");
            self.state = SessionState::AwaitingInput;
        }
        Ok(true)
    }
}
