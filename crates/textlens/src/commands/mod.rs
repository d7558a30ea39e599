//! Command implementations.

use std::io::{BufRead, Read};

use anyhow::{Context, bail};
use camino::Utf8Path;
use textlens_core::{Config, SqliteAccountStore};

pub mod accounts;
pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod session;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read all of `reader` and validate its size against the configured limit.
///
/// Reads at most one byte past the limit so an oversized stream is rejected
/// without buffering all of it.
pub fn read_input_stream<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            if buf.len() > max {
                bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
        }
    }
    String::from_utf8(buf).context("stdin is not valid UTF-8")
}

/// Read a secret from the first line of `reader`, without the line ending.
pub fn read_secret<R: BufRead>(mut reader: R) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read secret from stdin")?;
    let secret = line.trim_end_matches(['\r', '\n']);
    if secret.is_empty() {
        bail!("no secret provided on stdin");
    }
    Ok(secret.to_string())
}

/// Open the configured account database.
pub fn open_account_store(config: &Config) -> anyhow::Result<SqliteAccountStore> {
    let path = config
        .accounts_db_path()
        .context("cannot determine account database location; set accounts_db")?;
    tracing::debug!(path = %path, "opening account database");
    SqliteAccountStore::open(&path)
        .with_context(|| format!("failed to open account database {path}"))
}
