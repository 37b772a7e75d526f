//! # Credential Lookup
//!
//! Credentials for the Jira site are read from the user's `.netrc` file. Nothing
//! is cached; every lookup goes back to disk so rotated tokens are picked up
//! without restarting.

pub mod netrc;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;

/// Represents credentials for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Machine entry consulted when no entry matches the configured host.
pub const FALLBACK_MACHINE: &str = "atlassian.net";

/// Resolve the current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().context("Could not determine the home directory")?;
  Ok(base_dirs.home_dir().to_path_buf())
}

/// Find credentials for a Jira host in `<home>/.netrc`.
///
/// The host is normalized first, so `https://acme.atlassian.net/` and
/// `acme.atlassian.net` find the same entry. When the host has no entry, the
/// [`FALLBACK_MACHINE`] entry is used, and the `default` entry after that.
pub fn find_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let netrc_path = netrc::get_netrc_path(home);
  let host = netrc::normalize_host(jira_host);

  if netrc_path.exists() {
    let entries = netrc::read_netrc_file(&netrc_path)?;
    let found = netrc::lookup(&entries, &host)
      .or_else(|| netrc::lookup(&entries, FALLBACK_MACHINE))
      .or_else(|| netrc::lookup_default(&entries));
    if let Some(creds) = found {
      return Ok(creds);
    }
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found in {}. Please add credentials for machine '{host}' or '{FALLBACK_MACHINE}'.",
    netrc_path.display()
  ))
}
