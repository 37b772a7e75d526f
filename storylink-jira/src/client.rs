use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};

use crate::auth::{AuthContext, AuthProvider, StaticAuthProvider};
use crate::consts::DEFAULT_MAX_PAGES;
use crate::error::{JiraError, Result};

/// Represents a Jira API client
///
/// Requests block the calling thread. The client keeps no per-call state, so
/// independent operations may be issued from separate threads.
pub struct JiraClient<P> {
  pub(crate) client: Client,
  pub(crate) provider: P,
  pub(crate) max_pages: usize,
}

impl<P: AuthProvider> JiraClient<P> {
  /// Create a new Jira client
  pub fn new(provider: P) -> Self {
    Self {
      client: Client::new(),
      provider,
      max_pages: DEFAULT_MAX_PAGES,
    }
  }

  /// Cap the number of requests a single paginated enumeration may make.
  pub fn with_max_pages(mut self, max_pages: usize) -> Self {
    self.max_pages = max_pages.max(1);
    self
  }

  /// Test the Jira connection by fetching the current user
  #[instrument(skip(self), level = "debug")]
  pub fn check_connection(&self) -> Result<bool> {
    let ctx = self.auth_context()?;
    let url = format!("{}/rest/api/3/myself", ctx.base_url);

    Ok(self.get(&ctx, &url)?.status().is_success())
  }

  pub(crate) fn auth_context(&self) -> Result<AuthContext> {
    Ok(self.provider.auth_context()?)
  }

  pub(crate) fn get(&self, ctx: &AuthContext, url: &str) -> Result<Response> {
    trace!("GET {url}");

    let response = self
      .client
      .get(url)
      .headers(ctx.headers.clone())
      .basic_auth(&ctx.credentials.username, Some(&ctx.credentials.api_token))
      .send()?;

    debug!("Jira API response status: {}", response.status());
    Ok(response)
  }

  pub(crate) fn post<T: Serialize + ?Sized>(&self, ctx: &AuthContext, url: &str, body: &T) -> Result<Response> {
    trace!("POST {url}");

    let response = self
      .client
      .post(url)
      .headers(ctx.headers.clone())
      .basic_auth(&ctx.credentials.username, Some(&ctx.credentials.api_token))
      .json(body)
      .send()?;

    debug!("Jira API response status: {}", response.status());
    Ok(response)
  }

  /// GET `url` and decode the body, whatever the status.
  pub(crate) fn get_json(&self, ctx: &AuthContext, url: &str) -> Result<Value> {
    let response = self.get(ctx, url)?;
    let status = response.status();
    if !status.is_success() {
      warn!("Jira answered HTTP {status} for {url}; passing the body through");
    }

    let text = response.text()?;
    serde_json::from_str(&text).map_err(|e| JiraError::decode(url, e))
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> JiraClient<StaticAuthProvider> {
  JiraClient::new(StaticAuthProvider::new(base_url, username, api_token))
}
