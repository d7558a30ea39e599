//! Signup and login commands.
//!
//! Secrets are read from the first line of stdin so they never show up in
//! shell history or process listings.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use textlens_core::{AccountStore, Config};

use super::{open_account_store, read_secret};

/// Arguments for the `signup` subcommand.
#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Account id (an email address).
    pub email: String,
}

/// Arguments for the `login` subcommand.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account id (an email address).
    pub email: String,
}

#[derive(Serialize)]
struct AccountOutcome<'a> {
    email: &'a str,
    ok: bool,
}

/// Register a new account.
#[instrument(name = "cmd_signup", skip_all)]
pub fn cmd_signup(args: SignupArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!("executing signup command");
    let secret = read_secret(std::io::stdin().lock())?;
    let store = open_account_store(config)?;
    signup(&store, &args.email, &secret, global_json)
}

/// Verify account credentials.
#[instrument(name = "cmd_login", skip_all)]
pub fn cmd_login(args: LoginArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!("executing login command");
    let secret = read_secret(std::io::stdin().lock())?;
    let store = open_account_store(config)?;
    login(&store, &args.email, &secret, global_json)
}

fn signup(store: &dyn AccountStore, email: &str, secret: &str, json: bool) -> anyhow::Result<()> {
    let created = store.register(email, secret)?;
    if json {
        let outcome = AccountOutcome { email, ok: created };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    if !created {
        bail!("account already exists: {email}");
    }
    if !json {
        println!("{} account created for {email}; log in to continue", "OK:".green());
    }
    Ok(())
}

fn login(store: &dyn AccountStore, email: &str, secret: &str, json: bool) -> anyhow::Result<()> {
    let ok = store.verify(email, secret)?;
    if json {
        let outcome = AccountOutcome { email, ok };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    if !ok {
        bail!("invalid email or password");
    }
    if !json {
        println!("{} signed in as {email}", "OK:".green());
    }
    Ok(())
}
