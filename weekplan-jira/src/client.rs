use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::consts::USER_AGENT;
use crate::models::{JiraAuth, JiraErrorResponse};

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    })
  }

  /// Base URL the client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
    let url = format!("{}{}", self.base_url, path);
    debug!("GET {url}");
    self
      .client
      .get(url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
  }
}

/// Turn a non-success response into an error, mapping the statuses every
/// endpoint treats the same way
pub(crate) async fn error_for_status(response: Response) -> anyhow::Error {
  let status = response.status();
  match status {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
      anyhow::anyhow!("Authentication failed. Please check your Jira credentials.")
    }
    StatusCode::BAD_REQUEST => {
      let body = response.json::<JiraErrorResponse>().await.unwrap_or_default();
      anyhow::anyhow!("Invalid JQL query: {}", body.error_messages.join("; "))
    }
    _ => anyhow::anyhow!(
      "Unexpected error: HTTP {} - {}",
      status,
      response.text().await.unwrap_or_default()
    ),
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
