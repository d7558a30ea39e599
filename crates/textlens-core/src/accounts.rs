//! Account registration and credential checks.
//!
//! The analyzer never touches accounts. Callers gate access through an
//! injected [`AccountStore`]; nothing in this crate holds a global
//! connection.
//!
//! Secrets are stored as lowercase hex SHA-256 digests. There is no salt
//! and no key stretching.

use std::collections::HashMap;
use std::sync::Mutex;

use camino::Utf8Path;
use rusqlite::{Connection, OptionalExtension, params};
use sha2::{Digest, Sha256};

use crate::error::{AccountError, AccountResult};

/// Credential storage capability.
pub trait AccountStore {
    /// Create an account.
    ///
    /// Returns `Ok(false)` when an account with this id already exists.
    fn register(&self, id: &str, secret: &str) -> AccountResult<bool>;

    /// Check a secret against the stored account.
    ///
    /// Returns `Ok(false)` for an unknown id or a mismatched secret.
    fn verify(&self, id: &str, secret: &str) -> AccountResult<bool>;
}

/// Hash a secret the way both stores persist it.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn validate_id(id: &str) -> AccountResult<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AccountError::InvalidId);
    }
    Ok(id)
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (email TEXT PRIMARY KEY, password TEXT)";

/// SQLite-backed account store.
pub struct SqliteAccountStore {
    conn: Connection,
}

impl SqliteAccountStore {
    /// Open (or create) the account database at `path`.
    ///
    /// Missing parent directories are created.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn open(path: &Utf8Path) -> AccountResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent.as_std_path())?;
        }
        let conn = Connection::open(path.as_std_path())?;
        Self::init(conn)
    }

    /// Open a private, non-persistent database.
    pub fn open_in_memory() -> AccountResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> AccountResult<Self> {
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("account schema ready");
        Ok(Self { conn })
    }
}

impl AccountStore for SqliteAccountStore {
    #[tracing::instrument(skip(self, secret))]
    fn register(&self, id: &str, secret: &str) -> AccountResult<bool> {
        let id = validate_id(id)?;
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO users (email, password) VALUES (?1, ?2)",
            params![id, hash_secret(secret)],
        )?;
        tracing::debug!(created = inserted == 1, "register");
        Ok(inserted == 1)
    }

    #[tracing::instrument(skip(self, secret))]
    fn verify(&self, id: &str, secret: &str) -> AccountResult<bool> {
        let id = validate_id(id)?;
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT password FROM users WHERE email = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        let ok = stored.is_some_and(|hash| hash == hash_secret(secret));
        tracing::debug!(ok, "verify");
        Ok(ok)
    }
}

/// Process-local account store, mostly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<HashMap<String, String>>,
}

impl MemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryAccountStore {
    fn register(&self, id: &str, secret: &str) -> AccountResult<bool> {
        let id = validate_id(id)?;
        let mut accounts = self.accounts.lock().map_err(|_| AccountError::Poisoned)?;
        if accounts.contains_key(id) {
            return Ok(false);
        }
        accounts.insert(id.to_string(), hash_secret(secret));
        Ok(true)
    }

    fn verify(&self, id: &str, secret: &str) -> AccountResult<bool> {
        let id = validate_id(id)?;
        let accounts = self.accounts.lock().map_err(|_| AccountError::Poisoned)?;
        Ok(accounts
            .get(id)
            .is_some_and(|hash| *hash == hash_secret(secret)))
    }
}
