//! # Jira API Client
//!
//! Blocking client for the Jira REST v3 and Agile v1.0 APIs covering the
//! handful of operations needed to inspect epics and their stories: fetching
//! issues and projects, enumerating projects and the stories of an epic,
//! linking issues, extracting the people on an issue, and posting comments.
//!
//! Credentials and the site URL are supplied per call by an [`AuthProvider`].

pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client and auth seam
pub use auth::{AuthContext, AuthProvider, NetrcAuthProvider, StaticAuthProvider};
pub use client::{JiraClient, create_jira_client};
pub use error::{JiraError, Result};
// Re-export models
pub use models::{
  ApiResponse, CommentRequest, IssueLinkRequest, IssueLinkType, IssuePeople, JiraAuth, LinkOutcome, Person,
  StorySummary,
};
