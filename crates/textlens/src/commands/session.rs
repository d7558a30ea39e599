//! Session command: sign in, then analyze text interactively.
//!
//! Lines typed after signing in accumulate into one block of text.
//! Directives on a line of their own control the session:
//!
//! - `:submit` analyzes the block and clears it
//! - `:clear` discards the block
//! - `:logout` signs out and asks for credentials again
//! - `:quit` exits
//!
//! End of input submits any pending text, then exits. A block that grows
//! past the input limit before it is submitted is discarded with an error.

use std::io::{BufRead, Read, Write};

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textlens_core::{AccountStore, Config, Session, SessionEvent, check_input_size};

use super::analyze::write_report;
use super::open_account_store;

const HELP: &str = "Type or paste text. On a line of their own: :submit, :clear, :logout, :quit";

/// Arguments for the `session` subcommand.
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Sign in as this account (only the password is prompted).
    #[arg(long)]
    pub email: Option<String>,
}

/// Run an interactive session on stdin/stdout.
#[instrument(name = "cmd_session", skip_all)]
pub fn cmd_session(
    args: SessionArgs,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(email = ?args.email, "executing session command");
    let store = open_account_store(config)?;
    run_session(
        &store,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        args.email.as_deref(),
        max_input_bytes,
    )
}

/// Drive a [`Session`] from line-oriented input.
pub fn run_session<R: BufRead, W: Write>(
    store: &dyn AccountStore,
    mut input: R,
    mut out: W,
    email: Option<&str>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    let mut pending = String::new();
    // A line may carry its own terminator on top of a full-size block.
    let line_cap = max_input_bytes.map(|max| max.saturating_add(2));

    loop {
        if !session.is_signed_in() {
            let Some((id, secret)) = prompt_credentials(&mut input, &mut out, email)? else {
                return Ok(());
            };
            match session.sign_in(store, &id, &secret) {
                Ok(true) => {
                    debug!("signed in");
                    writeln!(out, "{} signed in as {id}", "OK:".green())?;
                    writeln!(out, "{HELP}")?;
                }
                Ok(false) => writeln!(out, "{} invalid email or password", "error:".red())?,
                Err(err) => writeln!(out, "{} {err}", "error:".red())?,
            }
            continue;
        }

        let Some(line) = read_line(&mut input, line_cap)? else {
            if !pending.is_empty() {
                submit(&mut session, &mut pending, &mut out, max_input_bytes)?;
            }
            return Ok(());
        };
        let Line::Text(line) = line else {
            discard_oversized(&mut session, &mut pending, &mut out, max_input_bytes)?;
            continue;
        };

        match line.trim() {
            ":submit" => submit(&mut session, &mut pending, &mut out, max_input_bytes)?,
            ":clear" => {
                pending.clear();
                session.handle(SessionEvent::Cleared)?;
                writeln!(out, "cleared")?;
            }
            ":logout" => {
                pending.clear();
                session.handle(SessionEvent::SignedOut)?;
                writeln!(out, "signed out")?;
            }
            ":quit" => return Ok(()),
            ":help" => writeln!(out, "{HELP}")?,
            _ => {
                pending.push_str(&line);
                if check_input_size(without_final_newline(&pending), max_input_bytes).is_err() {
                    discard_oversized(&mut session, &mut pending, &mut out, max_input_bytes)?;
                }
            }
        }
    }
}

/// Drop a block that outgrew the input limit before it was submitted.
fn discard_oversized<W: Write>(
    session: &mut Session,
    pending: &mut String,
    out: &mut W,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    pending.clear();
    session.handle(SessionEvent::Cleared)?;
    let limit = max_input_bytes.unwrap_or_default();
    writeln!(
        out,
        "{} input too large: text exceeds {limit} bytes; discarded",
        "error:".red()
    )?;
    out.flush()?;
    Ok(())
}

/// The final line break belongs to the last directive-free line, not the text.
fn without_final_newline(text: &str) -> &str {
    text.strip_suffix('\n')
        .map_or(text, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

/// Submit the pending block. Oversized input is reported, not fatal.
fn submit<W: Write>(
    session: &mut Session,
    pending: &mut String,
    out: &mut W,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let block = std::mem::take(pending);
    let text = without_final_newline(&block).to_string();

    if let Err(err) = check_input_size(&text, max_input_bytes) {
        writeln!(out, "{} {err}", "error:".red())?;
        return Ok(());
    }

    session.handle(SessionEvent::TextSubmitted(text))?;
    match session.report() {
        Some(report) => write_report(out, report)?,
        None => writeln!(out, "{} nothing to analyze", "note:".yellow())?,
    }
    out.flush()?;
    Ok(())
}

fn prompt_credentials<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    email: Option<&str>,
) -> anyhow::Result<Option<(String, String)>> {
    let id = match email {
        Some(id) => id.to_string(),
        None => {
            write!(out, "email: ")?;
            out.flush()?;
            let Some(line) = read_line(input, Some(CREDENTIAL_LINE_MAX))? else {
                return Ok(None);
            };
            // An oversized id becomes blank and is rejected by the store.
            line.text().trim().to_string()
        }
    };

    write!(out, "password: ")?;
    out.flush()?;
    let Some(line) = read_line(input, Some(CREDENTIAL_LINE_MAX))? else {
        return Ok(None);
    };
    let secret = line.text().trim_end_matches(['\r', '\n']).to_string();
    Ok(Some((id, secret)))
}

/// Longest accepted email or password line, terminator included.
const CREDENTIAL_LINE_MAX: usize = 4096;

/// One line of input.
enum Line {
    /// The line, including its terminator.
    Text(String),
    /// The line exceeded the cap; its remainder was skipped.
    TooLong,
}

impl Line {
    fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::TooLong => "",
        }
    }
}

/// Read one line of at most `cap` bytes; `None` at end of input.
///
/// Longer lines are consumed up to their terminator without being buffered.
fn read_line<R: BufRead>(input: &mut R, cap: Option<usize>) -> anyhow::Result<Option<Line>> {
    let take = cap.map_or(u64::MAX, |cap| {
        u64::try_from(cap).unwrap_or(u64::MAX).saturating_add(1)
    });
    let mut buf = Vec::new();
    let read = input
        .by_ref()
        .take(take)
        .read_until(b'\n', &mut buf)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    if cap.is_some_and(|cap| buf.len() > cap) {
        if !buf.ends_with(b"\n") {
            input
                .skip_until(b'\n')
                .context("failed to read from stdin")?;
        }
        return Ok(Some(Line::TooLong));
    }

    let line = String::from_utf8(buf).context("stdin is not valid UTF-8")?;
    Ok(Some(Line::Text(line)))
}
