//! # Jira Agile Epic Endpoints

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::auth::AuthProvider;
use crate::client::JiraClient;
use crate::consts::EPIC_PAGE_SIZE;
use crate::error::{JiraError, Result};
use crate::models::StorySummary;

impl<P: AuthProvider> JiraClient<P> {
  /// Collect every story under an epic, keyed by issue key.
  ///
  /// Pages of [`EPIC_PAGE_SIZE`] are requested at increasing offsets until
  /// the number of distinct keys collected reaches the `total` the server
  /// reports (a missing `total` counts as zero). Each story is reduced to a
  /// [`StorySummary`]; any missing field along the way becomes `None`.
  /// Stories listed without a key are left out of the map but still count
  /// toward `total`.
  ///
  /// # Errors
  ///
  /// Besides request and decode failures:
  /// - [`JiraError::PaginationStalled`] when a page adds no new keys while the
  ///   collected count is still short of `total` (for example when the server
  ///   repeats a page).
  /// - [`JiraError::PaginationLimit`] once the client's page cap is reached.
  #[instrument(skip(self), level = "debug")]
  pub fn get_stories_in_epic(&self, epic_key: &str) -> Result<BTreeMap<String, StorySummary>> {
    info!("Listing stories in epic {}", epic_key);

    let ctx = self.auth_context()?;
    let mut stories = BTreeMap::new();
    let mut unkeyed = 0;
    let mut start_at = 0;
    let mut pages = 0;

    loop {
      let url = format!(
        "{}/rest/agile/1.0/epic/{}/issue?maxResults={}&startAt={}",
        ctx.base_url, epic_key, EPIC_PAGE_SIZE, start_at
      );
      if pages == self.max_pages {
        return Err(JiraError::PaginationLimit { url, pages });
      }

      let page = self.get_json(&ctx, &url)?;
      pages += 1;

      let total = page.get("total").and_then(Value::as_u64).unwrap_or(0) as usize;
      let collected_before = stories.len() + unkeyed;

      for issue in page.get("issues").and_then(Value::as_array).into_iter().flatten() {
        let Some(key) = issue.get("key").and_then(Value::as_str) else {
          warn!("Skipping story without a key in epic {}", epic_key);
          unkeyed += 1;
          continue;
        };
        if stories.insert(key.to_string(), StorySummary::from_issue(issue)).is_some() {
          warn!("Story {} appeared twice in epic {}", key, epic_key);
        }
      }

      let collected = stories.len() + unkeyed;
      debug!(
        "Page {} at offset {}: {} of {} stories collected",
        pages, start_at, collected, total
      );

      if collected >= total {
        break;
      }
      if collected == collected_before {
        return Err(JiraError::PaginationStalled {
          epic: epic_key.to_string(),
          collected,
          total,
        });
      }
      start_at += EPIC_PAGE_SIZE;
    }

    info!("Found {} stories in epic {}", stories.len(), epic_key);
    Ok(stories)
  }
}
