//! # Jira Issue Link Endpoints

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::auth::AuthProvider;
use crate::client::JiraClient;
use crate::error::{JiraError, Result};
use crate::models::{IssueLinkRequest, IssueLinkType, LinkOutcome};

impl<P: AuthProvider> JiraClient<P> {
  /// Link `link_from` (the child, outward issue) to `link_to` (the parent,
  /// inward issue) with the named link type, e.g. `Relates` or `Blocks`.
  ///
  /// Keys and link type are sent as given. A non-success status is reported
  /// as [`LinkOutcome::NotCreated`], not as an error.
  #[instrument(skip(self), level = "debug")]
  pub fn create_issue_link(&self, link_from: &str, link_to: &str, link_type: &str) -> Result<LinkOutcome> {
    info!("Linking {} to {} as {}", link_from, link_to, link_type);

    let ctx = self.auth_context()?;
    let url = format!("{}/rest/api/3/issueLink", ctx.base_url);
    let payload = IssueLinkRequest::new(link_from, link_to, link_type);

    let response = self.post(&ctx, &url, &payload)?;
    let status = response.status();

    if status.is_success() {
      Ok(LinkOutcome::Created {
        link_from: link_from.to_string(),
        link_to: link_to.to_string(),
        link_type: link_type.to_string(),
      })
    } else {
      warn!("Jira rejected link {} -> {}: HTTP {}", link_from, link_to, status);
      Ok(LinkOutcome::NotCreated { status })
    }
  }

  /// List the link types configured on the site, for use with
  /// [`JiraClient::create_issue_link`].
  #[instrument(skip(self), level = "debug")]
  pub fn get_issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
    info!("Fetching issue link types");

    let ctx = self.auth_context()?;
    let url = format!("{}/rest/api/3/issueLinkType", ctx.base_url);
    let mut body = self.get_json(&ctx, &url)?;

    match body.get_mut("issueLinkTypes").map(Value::take) {
      Some(types) => serde_json::from_value(types).map_err(|e| JiraError::decode(&url, e)),
      None => Ok(Vec::new()),
    }
  }
}
