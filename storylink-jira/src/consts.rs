//! Constants for the storylink-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("storylink/", env!("CARGO_PKG_VERSION"));

/// Page size requested from the Agile epic-issue listing.
pub const EPIC_PAGE_SIZE: usize = 50;

/// Upper bound on requests made by one paginated enumeration.
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Reported for a person whose display name is missing.
pub const NO_NAME_LISTED: &str = "No Name listed";

/// Reported for a person whose email address is missing.
pub const NO_EMAIL_LISTED: &str = "No Email listed";

/// Rendering of a link request Jira did not accept.
pub const NO_LINK_CREATED: &str = "No link created";
