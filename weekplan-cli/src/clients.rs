//! # Client Creation
//!
//! Centralized construction of the collaborators a command needs: Jira
//! credentials and client, and the SMTP mailer. Failures are mapped onto the
//! pipeline's error categories here so every command reports them the same
//! way.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tokio::runtime::Runtime;
use weekplan_core::{CredentialError, Credentials, WeekplanError, report_subject};
use weekplan_jira::{JiraClient, create_jira_client_from_credentials};
use weekplan_mail::{MailerConfig, SmtpMailer};

/// Load Jira credentials from the environment
pub fn load_credentials() -> Result<Credentials, WeekplanError> {
  Ok(Credentials::from_env()?)
}

/// Load SMTP settings from the environment
pub fn load_mailer_config() -> Result<MailerConfig, WeekplanError> {
  MailerConfig::from_env().map_err(|err| WeekplanError::from(CredentialError::Mail(err.to_string())))
}

/// Create a mailer whose subject carries `run_date`
pub fn create_mailer(config: MailerConfig, run_date: NaiveDate) -> Result<SmtpMailer, WeekplanError> {
  SmtpMailer::new(config, report_subject(run_date))
    .map_err(|err| WeekplanError::from(CredentialError::Mail(err.to_string())))
}

/// Creates a tokio runtime and an authenticated Jira client
///
/// This is a convenience function for CLI commands that need both a runtime
/// and a Jira client. Neither step talks to Jira, so failures here stay
/// uncategorized and exit with code 1.
pub fn create_jira_runtime_and_client(credentials: &Credentials) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_credentials(credentials)?;
  Ok((rt, client))
}
