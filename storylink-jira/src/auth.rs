//! Authentication seam for the Jira client.
//!
//! Every operation asks its [`AuthProvider`] for a fresh [`AuthContext`]
//! (credentials, headers, base URL) before touching the network. The client
//! never stores the answer, so providers are free to re-read configuration on
//! each call.

use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use storylink_core::creds::{find_jira_credentials, home_dir};
use storylink_core::url::resolve_jira_base_url;
use tracing::debug;

use crate::consts;
use crate::models::JiraAuth;

/// Everything needed to address one request to Jira.
#[derive(Debug, Clone)]
pub struct AuthContext {
  pub credentials: JiraAuth,
  pub headers: HeaderMap,
  /// Site root, without a trailing slash (e.g. `https://acme.atlassian.net`).
  pub base_url: String,
}

impl AuthContext {
  pub fn new(base_url: &str, credentials: JiraAuth) -> Self {
    Self {
      credentials,
      headers: default_headers(),
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }
}

/// Supplies credentials, headers and the base URL for each operation.
pub trait AuthProvider {
  fn auth_context(&self) -> Result<AuthContext>;
}

/// Headers sent with every Jira request.
pub fn default_headers() -> HeaderMap {
  let mut headers = HeaderMap::new();
  headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
  headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
  headers.insert(USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
  headers
}

/// Provider handing out the same context on every call.
#[derive(Debug, Clone)]
pub struct StaticAuthProvider {
  context: AuthContext,
}

impl StaticAuthProvider {
  pub fn new(base_url: &str, username: &str, api_token: &str) -> Self {
    let credentials = JiraAuth {
      username: username.to_string(),
      api_token: api_token.to_string(),
    };
    Self {
      context: AuthContext::new(base_url, credentials),
    }
  }
}

impl From<AuthContext> for StaticAuthProvider {
  fn from(context: AuthContext) -> Self {
    Self { context }
  }
}

impl AuthProvider for StaticAuthProvider {
  fn auth_context(&self) -> Result<AuthContext> {
    Ok(self.context.clone())
  }
}

/// Provider reading `$JIRA_HOST` and `<home>/.netrc` on every call.
#[derive(Debug, Clone)]
pub struct NetrcAuthProvider {
  home: PathBuf,
}

impl NetrcAuthProvider {
  pub fn new(home: impl Into<PathBuf>) -> Self {
    Self { home: home.into() }
  }

  /// Use the current user's home directory.
  pub fn from_home() -> Result<Self> {
    Ok(Self::new(home_dir()?))
  }
}

impl AuthProvider for NetrcAuthProvider {
  fn auth_context(&self) -> Result<AuthContext> {
    let base_url = resolve_jira_base_url()?;
    let creds = find_jira_credentials(&self.home, &base_url).context("Failed to get credentials")?;
    debug!("Resolved Jira credentials for {} as {}", base_url, creds.username);

    Ok(AuthContext::new(
      &base_url,
      JiraAuth {
        username: creds.username,
        api_token: creds.password,
      },
    ))
  }
}
