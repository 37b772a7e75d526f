//! Error type shared by every client operation.
//!
//! HTTP error statuses are not errors here: fetchers hand back whatever JSON
//! Jira sent, and the link and comment operations report the status in their
//! return value. A [`JiraError`] means no usable answer was obtained at all.

use thiserror::Error;

/// Errors that can occur when talking to Jira.
#[derive(Debug, Error)]
pub enum JiraError {
  /// The auth provider could not supply credentials or a base URL.
  #[error(transparent)]
  Auth(#[from] anyhow::Error),

  /// The request could not be sent or its body could not be read.
  #[error("Request to Jira failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The response body was not valid JSON.
  #[error("Failed to decode JSON response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  /// A paginated enumeration kept receiving continuation pages.
  #[error("Gave up on {url} after {pages} pages; the server keeps reporting more results")]
  PaginationLimit { url: String, pages: usize },

  /// An epic page added no new stories before the reported total was reached.
  #[error("Listing stories of {epic} stalled at {collected} of {total} reported issues")]
  PaginationStalled {
    epic: String,
    collected: usize,
    total: usize,
  },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, JiraError>;

impl JiraError {
  pub(crate) fn decode(url: &str, source: serde_json::Error) -> Self {
    Self::Decode {
      url: url.to_string(),
      source,
    }
  }
}
