//! # Storylink Core Library
//!
//! Configuration and credential discovery shared by the Jira client and the
//! command-line front end: where the Jira site lives and which credentials to
//! present to it.

pub mod creds;
pub mod url;

pub use creds::Credentials;
pub use url::{ENV_JIRA_HOST, ensure_url_scheme, resolve_jira_base_url};
