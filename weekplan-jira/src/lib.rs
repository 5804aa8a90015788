//! # Jira API Client
//!
//! Jira REST API v2 integration for weekplan: issue search for the weekly plan
//! and a credential check against the current user.

pub mod auth;
mod client;
mod consts;
mod endpoints;
pub mod models;
mod source;

// Re-export the client
pub use auth::create_jira_client_from_credentials;
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{JiraAuth, JiraIssue, JiraIssueFields, JiraPriority, JiraSearchResults, JiraUser};
