//! # Jira People Endpoints

use tracing::{debug, instrument};

use crate::auth::AuthProvider;
use crate::client::JiraClient;
use crate::error::Result;
use crate::models::IssuePeople;

impl<P: AuthProvider> JiraClient<P> {
  /// Fetch an issue and pull out the names and emails of its assignee and
  /// reporter. Missing people or fields become "No Name listed" /
  /// "No Email listed".
  #[instrument(skip(self), level = "debug")]
  pub fn get_issue_people(&self, issue_key: &str) -> Result<IssuePeople> {
    let issue = self.get_issue(issue_key)?;
    let people = IssuePeople::from_issue(issue_key, &issue);

    debug!(
      "{}: assignee {}, reporter {}",
      issue_key, people.assignee.name, people.reporter.name
    );
    Ok(people)
  }
}
