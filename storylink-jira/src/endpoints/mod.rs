//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: issues, projects, links,
//! people, epics and comments.

pub mod comments;
pub mod epics;
pub mod issues;
pub mod links;
pub mod people;
pub mod projects;
