//! Authentication helpers for the Jira client.
//!
//! Turns credentials loaded by `weekplan-core` into an authenticated client.

use anyhow::{Context, Result};
use weekplan_core::Credentials;

use crate::{JiraClient, create_jira_client};

/// Creates an authenticated Jira client from loaded credentials.
pub fn create_jira_client_from_credentials(credentials: &Credentials) -> Result<JiraClient> {
  create_jira_client(&credentials.server, &credentials.user, &credentials.token)
    .context("Failed to create Jira client")
}
