//! Constants for the weekplan-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issue fields requested from the search endpoint
pub const SEARCH_FIELDS: &str = "summary,priority,aggregatetimespent";

/// JQL search on Jira Server and Data Center
pub const SEARCH_PATH: &str = "/rest/api/2/search";

/// JQL search on Jira Cloud, which answers the v2 path with 404 or 410
pub const CLOUD_SEARCH_PATH: &str = "/rest/api/3/search/jql";
