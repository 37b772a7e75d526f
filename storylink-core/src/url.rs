//! Jira site URL resolution.
//!
//! The Jira site root comes from the `JIRA_HOST` environment variable. Users
//! commonly set it to a bare hostname, so the scheme is optional and defaults
//! to `https`.

use anyhow::Result;
use url::{Position, Url};

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Get the $JIRA_HOST environment variable value with proper URL scheme.
///
/// Returns an error if the environment variable is not set or cannot be
/// turned into a URL.
pub fn resolve_jira_base_url() -> Result<String> {
  match std::env::var(ENV_JIRA_HOST) {
    Ok(host) => ensure_url_scheme(&host),
    Err(_) => Err(anyhow::anyhow!(
      "Jira host environment variable '{ENV_JIRA_HOST}' not set"
    )),
  }
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Malformed schemes
/// such as `https:/example.com` are repaired, and a bare trailing `/` is
/// dropped so paths can be appended directly.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.has_host() && trimmed.contains("://") => url,
    _ => Url::parse(&format!("https://{}", strip_broken_scheme(trimmed)))
      .map_err(|e| anyhow::anyhow!("Failed to parse URL: '{input}' ({e})"))?,
  };

  Ok(without_root_slash(&url))
}

/// Drop a scheme that is missing one or both slashes (`https:/host`,
/// `http:host`) but keep `host:port` untouched.
fn strip_broken_scheme(input: &str) -> &str {
  match input.split_once(':') {
    Some((scheme, rest))
      if ["http", "https"].iter().any(|s| scheme.eq_ignore_ascii_case(s)) && !rest.starts_with("//") =>
    {
      rest.trim_start_matches('/')
    }
    _ => input,
  }
}

fn without_root_slash(url: &Url) -> String {
  if url.path() == "/" {
    format!("{}{}", &url[..Position::BeforePath], &url[Position::AfterPath..])
  } else {
    url.to_string()
  }
}
