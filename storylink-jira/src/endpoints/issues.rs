//! # Jira Issue Endpoints

use serde_json::Value;
use tracing::{info, instrument};

use crate::auth::AuthProvider;
use crate::client::JiraClient;
use crate::error::Result;

impl<P: AuthProvider> JiraClient<P> {
  /// Get a Jira issue by key.
  ///
  /// The decoded body is returned as-is, including Jira's error payload when
  /// the issue does not exist or is not visible. Callers inspect it.
  ///
  /// # Errors
  ///
  /// Fails when credentials cannot be resolved, the request cannot be sent,
  /// or the body is not JSON.
  #[instrument(skip(self), level = "debug")]
  pub fn get_issue(&self, issue_key: &str) -> Result<Value> {
    info!("Fetching issue {}", issue_key);

    let ctx = self.auth_context()?;
    let url = format!("{}/rest/api/3/issue/{}", ctx.base_url, issue_key);
    self.get_json(&ctx, &url)
  }
}

#[cfg(test)]
mod tests {
  use storylink_test_utils::run_blocking;
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::error::JiraError;

  #[tokio::test]
  async fn test_get_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "id": "10000",
        "key": "D1-1",
        "fields": {
            "summary": "Test issue",
            "status": {
                "name": "In Progress",
                "statusCategory": { "id": 4, "key": "indeterminate" }
            },
            "assignee": null,
            "customfield_10011": [1, 2.5, true]
        }
    });

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/D1-1"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(&body))
      .mount(&mock_server)
      .await;

    let base_url = mock_server.uri();
    let issue = run_blocking(move || create_jira_client(&base_url, "test_user", "test_token").get_issue("D1-1")).await??;
    assert_eq!(issue, body);

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found_passes_body_through() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "errorMessages": ["Issue does not exist or you do not have permission to see it."],
        "errors": {}
    });

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/NONEXISTENT-123"))
      .respond_with(ResponseTemplate::new(404).set_body_json(&body))
      .mount(&mock_server)
      .await;

    let base_url = mock_server.uri();
    let issue =
      run_blocking(move || create_jira_client(&base_url, "test_user", "test_token").get_issue("NONEXISTENT-123"))
        .await??;
    assert_eq!(issue, body);

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_invalid_json() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/D1-1"))
      .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
      .mount(&mock_server)
      .await;

    let base_url = mock_server.uri();
    let result = run_blocking(move || create_jira_client(&base_url, "test_user", "test_token").get_issue("D1-1")).await?;
    assert!(matches!(result, Err(JiraError::Decode { .. })));

    Ok(())
  }
}
