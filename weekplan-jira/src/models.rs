use serde::Deserialize;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// One page of a JQL search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResults {
  #[serde(default)]
  pub start_at: u32,
  #[serde(default)]
  pub max_results: u32,
  #[serde(default)]
  pub total: u32,
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
}

/// The issue fields requested by the search
#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: String,
  pub priority: Option<JiraPriority>,
  /// Time logged on the issue and its sub-tasks, in seconds
  pub aggregatetimespent: Option<i64>,
}

/// Represents a Jira issue priority
#[derive(Debug, Deserialize)]
pub struct JiraPriority {
  pub id: Option<String>,
  pub name: String,
}

/// The authenticated user, as returned by `/myself`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  pub account_id: Option<String>,
  pub name: Option<String>,
  pub display_name: String,
  pub email_address: Option<String>,
}

/// Error payload Jira sends with 4xx responses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JiraErrorResponse {
  #[serde(default)]
  pub error_messages: Vec<String>,
}
