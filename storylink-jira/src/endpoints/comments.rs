//! # Jira Comment Endpoints

use tracing::{info, instrument, warn};

use crate::auth::AuthProvider;
use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{ApiResponse, CommentRequest};

impl<P: AuthProvider> JiraClient<P> {
  /// Post a plain-text comment to an issue.
  ///
  /// The text becomes a single paragraph; newlines and markup are not
  /// interpreted. The response is returned uninterpreted so callers can check
  /// [`ApiResponse::is_success`] and read the created comment with
  /// [`ApiResponse::json`].
  #[instrument(skip(self, comment), level = "debug")]
  pub fn add_comment(&self, issue_key: &str, comment: &str) -> Result<ApiResponse> {
    info!("Adding comment to {}", issue_key);

    let ctx = self.auth_context()?;
    let url = format!("{}/rest/api/3/issue/{}/comment", ctx.base_url, issue_key);
    let payload = CommentRequest::plain_text(comment);

    let response = self.post(&ctx, &url, &payload)?;
    let status = response.status();
    if !status.is_success() {
      warn!("Jira did not accept the comment on {}: HTTP {}", issue_key, status);
    }

    Ok(ApiResponse {
      url,
      status,
      body: response.text()?,
    })
  }
}
