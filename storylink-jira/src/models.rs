//! Jira data models
//!
//! Request payloads are typed. Responses stay `serde_json::Value` until they are
//! projected, because Jira omits or nulls fields freely and the projections
//! must never fail on a missing one.

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{NO_EMAIL_LISTED, NO_LINK_CREATED, NO_NAME_LISTED};
use crate::error::{JiraError, Result};

/// Jira authentication credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Reference to an issue by key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueRef {
  pub key: String,
}

/// Reference to a link type by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkTypeRef {
  pub name: String,
}

/// Body of `POST /rest/api/3/issueLink`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkRequest {
  pub outward_issue: IssueRef,
  pub inward_issue: IssueRef,
  #[serde(rename = "type")]
  pub link_type: LinkTypeRef,
}

impl IssueLinkRequest {
  /// `link_from` becomes the outward issue, `link_to` the inward one.
  pub fn new(link_from: &str, link_to: &str, link_type: &str) -> Self {
    Self {
      outward_issue: IssueRef {
        key: link_from.to_string(),
      },
      inward_issue: IssueRef {
        key: link_to.to_string(),
      },
      link_type: LinkTypeRef {
        name: link_type.to_string(),
      },
    }
  }
}

/// Result of a link request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
  Created {
    link_from: String,
    link_to: String,
    link_type: String,
  },
  NotCreated {
    status: StatusCode,
  },
}

impl LinkOutcome {
  pub const fn is_created(&self) -> bool {
    matches!(self, Self::Created { .. })
  }
}

impl fmt::Display for LinkOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Created {
        link_from,
        link_to,
        link_type,
      } => write!(f, "{link_from} now {link_type} {link_to}"),
      Self::NotCreated { .. } => f.write_str(NO_LINK_CREATED),
    }
  }
}

/// A link type as listed by `GET /rest/api/3/issueLinkType`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IssueLinkType {
  pub id: String,
  pub name: String,
  pub inward: String,
  pub outward: String,
}

/// Atlassian Document Format node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdfNode {
  #[serde(rename = "type")]
  pub node_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content: Option<Vec<AdfNode>>,
}

/// Top-level Atlassian Document Format document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdfDocument {
  #[serde(rename = "type")]
  pub doc_type: String,
  pub version: u32,
  pub content: Vec<AdfNode>,
}

impl AdfDocument {
  /// One paragraph holding `text` verbatim; newlines are not split.
  pub fn plain_text(text: &str) -> Self {
    let text_node = AdfNode {
      node_type: "text".to_string(),
      text: Some(text.to_string()),
      content: None,
    };
    let paragraph = AdfNode {
      node_type: "paragraph".to_string(),
      text: None,
      content: Some(vec![text_node]),
    };

    Self {
      doc_type: "doc".to_string(),
      version: 1,
      content: vec![paragraph],
    }
  }
}

/// Body of `POST /rest/api/3/issue/{key}/comment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
  pub body: AdfDocument,
}

impl CommentRequest {
  pub fn plain_text(comment: &str) -> Self {
    Self {
      body: AdfDocument::plain_text(comment),
    }
  }
}

/// A response handed back without interpretation.
#[derive(Debug, Clone)]
pub struct ApiResponse {
  pub url: String,
  pub status: StatusCode,
  pub body: String,
}

impl ApiResponse {
  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  /// Decode the body as JSON.
  pub fn json(&self) -> Result<Value> {
    serde_json::from_str(&self.body).map_err(|e| JiraError::decode(&self.url, e))
  }
}

/// Display name and email of someone attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
  pub name: String,
  pub email: String,
}

impl Person {
  /// Read `displayName`/`emailAddress` from a user object, which may be
  /// missing or `null`.
  pub fn from_user(user: Option<&Value>) -> Self {
    let field = |name: &str| user.and_then(|u| u.get(name)).and_then(Value::as_str);

    Self {
      name: field("displayName").unwrap_or(NO_NAME_LISTED).to_string(),
      email: field("emailAddress").unwrap_or(NO_EMAIL_LISTED).to_string(),
    }
  }
}

/// Assignee and reporter of one issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssuePeople {
  pub assignee: Person,
  pub reporter: Person,
  pub issue_key: String,
}

impl IssuePeople {
  pub fn from_issue(issue_key: &str, issue: &Value) -> Self {
    let fields = issue.get("fields");

    Self {
      assignee: Person::from_user(fields.and_then(|f| f.get("assignee"))),
      reporter: Person::from_user(fields.and_then(|f| f.get("reporter"))),
      issue_key: issue_key.to_string(),
    }
  }
}

/// Reduced view of a story listed under an epic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorySummary {
  pub status_name: Option<String>,
  pub status_category: Option<String>,
  pub project_key: Option<String>,
  pub project_name: Option<String>,
  pub priority_name: Option<String>,
}

impl StorySummary {
  pub fn from_issue(issue: &Value) -> Self {
    let at = |pointer: &str| issue.pointer(pointer).and_then(Value::as_str).map(str::to_string);

    Self {
      status_name: at("/fields/status/name"),
      status_category: at("/fields/status/statusCategory/key"),
      project_key: at("/fields/project/key"),
      project_name: at("/fields/project/name"),
      priority_name: at("/fields/priority/name"),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_link_request_serialization() {
    let request = IssueLinkRequest::new("D1-7", "D1-23", "Relates");

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "outwardIssue": { "key": "D1-7" },
        "inwardIssue": { "key": "D1-23" },
        "type": { "name": "Relates" }
      })
    );
  }

  #[test]
  fn test_link_outcome_display() {
    let created = LinkOutcome::Created {
      link_from: "D1-7".to_string(),
      link_to: "D1-23".to_string(),
      link_type: "Relates".to_string(),
    };
    assert_eq!(created.to_string(), "D1-7 now Relates D1-23");
    assert!(created.is_created());

    let rejected = LinkOutcome::NotCreated {
      status: StatusCode::BAD_REQUEST,
    };
    assert_eq!(rejected.to_string(), "No link created");
    assert!(!rejected.is_created());
  }

  #[test]
  fn test_comment_request_shape() {
    let request = CommentRequest::plain_text("I made it");

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "body": {
          "type": "doc",
          "version": 1,
          "content": [
            { "type": "paragraph", "content": [ { "text": "I made it", "type": "text" } ] }
          ]
        }
      })
    );
  }

  #[test]
  fn test_comment_keeps_newlines_in_one_text_node() {
    let request = CommentRequest::plain_text("line one\nline two");

    let paragraph = &request.body.content[0];
    let nodes = paragraph.content.as_ref().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].text.as_deref(), Some("line one\nline two"));
  }

  #[test]
  fn test_people_from_sparse_issues() {
    let only_assignee = json!({
      "fields": {
        "assignee": { "displayName": "Ada", "emailAddress": "ada@example.com" },
        "reporter": null
      }
    });

    let people = IssuePeople::from_issue("D1-5", &only_assignee);
    assert_eq!(people.issue_key, "D1-5");
    assert_eq!(people.assignee.name, "Ada");
    assert_eq!(people.assignee.email, "ada@example.com");
    assert_eq!(people.reporter.name, NO_NAME_LISTED);
    assert_eq!(people.reporter.email, NO_EMAIL_LISTED);

    let no_fields = IssuePeople::from_issue("D1-6", &json!({ "errorMessages": ["nope"] }));
    assert_eq!(no_fields.assignee.name, NO_NAME_LISTED);
    assert_eq!(no_fields.reporter.email, NO_EMAIL_LISTED);
  }

  #[test]
  fn test_person_defaults_each_field_independently() {
    let user = json!({ "displayName": "Grace" });

    let person = Person::from_user(Some(&user));
    assert_eq!(person.name, "Grace");
    assert_eq!(person.email, NO_EMAIL_LISTED);
  }

  #[test]
  fn test_story_summary_projection() {
    let issue = json!({
      "key": "D1-8",
      "fields": {
        "status": { "name": "In Progress", "statusCategory": { "key": "indeterminate" } },
        "project": { "key": "D1", "name": "Demo" },
        "priority": null
      }
    });

    let summary = StorySummary::from_issue(&issue);
    assert_eq!(summary.status_name.as_deref(), Some("In Progress"));
    assert_eq!(summary.status_category.as_deref(), Some("indeterminate"));
    assert_eq!(summary.project_key.as_deref(), Some("D1"));
    assert_eq!(summary.project_name.as_deref(), Some("Demo"));
    assert_eq!(summary.priority_name, None);

    assert_eq!(StorySummary::from_issue(&json!({ "key": "D1-9" })), StorySummary::default());
  }

  #[test]
  fn test_api_response_json() {
    let response = ApiResponse {
      url: "https://example.com".to_string(),
      status: StatusCode::CREATED,
      body: r#"{"id":"10001"}"#.to_string(),
    };
    assert!(response.is_success());
    assert_eq!(response.json().unwrap()["id"], "10001");

    let broken = ApiResponse {
      body: "<html>".to_string(),
      ..response
    };
    assert!(matches!(broken.json(), Err(JiraError::Decode { .. })));
  }
}
