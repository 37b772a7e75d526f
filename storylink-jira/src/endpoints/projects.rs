//! # Jira Project Endpoints

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::auth::AuthProvider;
use crate::client::JiraClient;
use crate::error::{JiraError, Result};

impl<P: AuthProvider> JiraClient<P> {
  /// Get one project by key or id, returning the decoded body verbatim.
  #[instrument(skip(self), level = "debug")]
  pub fn get_project(&self, project_id: &str) -> Result<Value> {
    info!("Fetching project {}", project_id);

    let ctx = self.auth_context()?;
    let url = format!("{}/rest/api/3/project/{}", ctx.base_url, project_id);
    self.get_json(&ctx, &url)
  }

  /// List every project on the site, archived ones included.
  ///
  /// Follows each page's `nextPage` URL until it is absent or `null`, keeping
  /// the `values` of every page in order.
  ///
  /// # Errors
  ///
  /// Besides request and decode failures, returns
  /// [`JiraError::PaginationLimit`] once the client's page cap is reached.
  #[instrument(skip(self), level = "debug")]
  pub fn get_all_projects(&self) -> Result<Vec<Value>> {
    info!("Listing all projects");

    let ctx = self.auth_context()?;
    let mut projects = Vec::new();
    let mut next_url = Some(format!("{}/rest/api/3/project/search", ctx.base_url));
    let mut pages = 0;

    while let Some(url) = next_url {
      if pages == self.max_pages {
        return Err(JiraError::PaginationLimit { url, pages });
      }

      let mut page = self.get_json(&ctx, &url)?;
      pages += 1;

      if let Some(Value::Array(values)) = page.get_mut("values").map(Value::take) {
        debug!("Page {} returned {} projects", pages, values.len());
        projects.extend(values);
      }
      next_url = page.get("nextPage").and_then(Value::as_str).map(str::to_string);
    }

    info!("Found {} projects across {} pages", projects.len(), pages);
    Ok(projects)
  }
}
