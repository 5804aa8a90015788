use anyhow::{Context, Result};
use reqwest::StatusCode;

use crate::client::{JiraClient, error_for_status};
use crate::models::JiraUser;

impl JiraClient {
  /// Fetch the user the credentials belong to
  pub async fn current_user(&self) -> Result<JiraUser> {
    let response = self
      .get("/rest/api/2/myself")
      .send()
      .await
      .context("Failed to connect to Jira")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraUser>()
        .await
        .context("Failed to parse Jira user"),
      _ => Err(error_for_status(response).await),
    }
  }
}
