//! Helpers for reading credentials stored in `.netrc` files.
//!
//! The file is tokenized on whitespace, so single-line entries
//! (`machine host login user password pass`) and multi-line entries parse the
//! same way. `default` entries are honoured as a last resort, `macdef` blocks
//! are skipped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;

use crate::creds::Credentials;

/// One `machine` (or `default`) block of a `.netrc` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetrcEntry {
  /// `None` for the `default` entry.
  pub machine: Option<String>,
  pub login: Option<String>,
  pub password: Option<String>,
}

impl NetrcEntry {
  fn credentials(&self) -> Option<Credentials> {
    match (&self.login, &self.password) {
      (Some(login), Some(password)) if !login.is_empty() && !password.is_empty() => Some(Credentials {
        username: login.clone(),
        password: password.clone(),
      }),
      _ => None,
    }
  }
}

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// ```
/// use std::path::Path;
/// use storylink_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Read and parse every entry of a `.netrc` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_netrc_file(path: &Path) -> Result<Vec<NetrcEntry>> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("Failed to read .netrc file at {}", path.display()))?;
  Ok(parse_netrc(&content))
}

/// Parse `.netrc` content into its entries, in file order.
pub fn parse_netrc(content: &str) -> Vec<NetrcEntry> {
  let mut entries = Vec::new();
  let mut current: Option<NetrcEntry> = None;
  let mut tokens = tokenize(content).into_iter();

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        entries.extend(current.take());
        current = Some(NetrcEntry {
          machine: tokens.next().map(str::to_string),
          ..NetrcEntry::default()
        });
      }
      "default" => {
        entries.extend(current.take());
        current = Some(NetrcEntry::default());
      }
      "login" => {
        if let (Some(entry), Some(value)) = (current.as_mut(), tokens.next()) {
          entry.login = Some(value.to_string());
        }
      }
      "password" => {
        if let (Some(entry), Some(value)) = (current.as_mut(), tokens.next()) {
          entry.password = Some(value.to_string());
        }
      }
      "account" => {
        tokens.next();
      }
      other => trace!("Ignoring unknown .netrc token: {other}"),
    }
  }

  entries.extend(current);
  entries
}

/// Split the whole file on whitespace, dropping `macdef` blocks.
///
/// A macro definition covers the rest of its `macdef` line and runs until the
/// next blank line.
fn tokenize(content: &str) -> Vec<&str> {
  let mut tokens = Vec::new();
  let mut lines = content.lines();

  while let Some(line) = lines.next() {
    for word in line.split_whitespace() {
      if word == "macdef" {
        for body in lines.by_ref() {
          if body.trim().is_empty() {
            break;
          }
        }
        break;
      }
      tokens.push(word);
    }
  }

  tokens
}

/// Find complete credentials for exactly `machine`.
pub fn lookup(entries: &[NetrcEntry], machine: &str) -> Option<Credentials> {
  entries
    .iter()
    .filter(|entry| entry.machine.as_deref() == Some(machine))
    .find_map(NetrcEntry::credentials)
}

/// Credentials of the `default` entry, if it is complete.
pub fn lookup_default(entries: &[NetrcEntry]) -> Option<Credentials> {
  entries
    .iter()
    .filter(|entry| entry.machine.is_none())
    .find_map(NetrcEntry::credentials)
}

/// Strip the scheme, any path, and trailing slashes from a Jira host so it can
/// be matched against `machine` names.
///
/// ```
/// use storylink_core::creds::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("http://jira.example.com/jira"), "jira.example.com");
/// assert_eq!(normalize_host("my-jira-instance.com"), "my-jira-instance.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  let trimmed = raw_host.trim();
  let without_scheme = trimmed
    .strip_prefix("https://")
    .or_else(|| trimmed.strip_prefix("http://"))
    .unwrap_or(trimmed);

  without_scheme
    .split('/')
    .next()
    .unwrap_or_default()
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_netrc_multi_line() {
    let content = r#"machine example.com
  login user1
  password pass1

machine github.com
  login user2
  password pass2
"#;

    let entries = parse_netrc(content);
    assert_eq!(entries.len(), 2);

    let creds = lookup(&entries, "github.com").unwrap();
    assert_eq!(creds.username, "user2");
    assert_eq!(creds.password, "pass2");
  }

  #[test]
  fn test_parse_netrc_single_line_and_mixed() {
    let content = r#"machine example.com login user1 password pass1
machine atlassian.net login user3
  password pass3
"#;

    let entries = parse_netrc(content);
    assert_eq!(lookup(&entries, "example.com").unwrap().username, "user1");
    assert_eq!(lookup(&entries, "atlassian.net").unwrap().password, "pass3");
  }

  #[test]
  fn test_lookup_skips_incomplete_entry() {
    let content = r#"machine example.com
  login testuser
machine github.com
  login user2
  password pass2
"#;

    let entries = parse_netrc(content);
    assert!(lookup(&entries, "example.com").is_none());
    assert!(lookup(&entries, "github.com").is_some());
  }

  #[test]
  fn test_lookup_uses_default_entry() {
    let content = "machine example.com login a password b\ndefault login anon password secret\n";

    let entries = parse_netrc(content);
    assert!(lookup(&entries, "unknown.com").is_none());

    let creds = lookup_default(&entries).unwrap();
    assert_eq!(creds.username, "anon");
    assert_eq!(creds.password, "secret");
  }

  #[test]
  fn test_parse_netrc_skips_macdef_body() {
    let content = r#"machine example.com login user1 password pass1
macdef init
  machine evil.com login x password y

machine github.com login user2 password pass2
"#;

    let entries = parse_netrc(content);
    assert!(lookup(&entries, "evil.com").is_none());
    assert_eq!(lookup(&entries, "github.com").unwrap().username, "user2");
  }

  #[test]
  fn test_parse_netrc_values_on_following_lines() {
    let content = "machine\n  acme.atlassian.net\nlogin\n  dev@example.com\npassword\n  s3cret\n";

    let entries = parse_netrc(content);
    assert_eq!(entries.len(), 1);
    let creds = lookup(&entries, "acme.atlassian.net").unwrap();
    assert_eq!(creds.username, "dev@example.com");
    assert_eq!(creds.password, "s3cret");
  }

  #[test]
  fn test_parse_netrc_empty() {
    assert!(parse_netrc("").is_empty());
    assert!(lookup(&[], "example.com").is_none());
  }

  #[test]
  fn test_normalize_host_strips_path_and_port_is_kept() {
    assert_eq!(normalize_host("https://localhost:8080/"), "localhost:8080");
    assert_eq!(normalize_host("  acme.atlassian.net  "), "acme.atlassian.net");
  }
}
