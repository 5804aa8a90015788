//! Plugs the Jira client into the weekly plan pipeline.

use anyhow::Result;
use weekplan_core::url::issue_permalink;
use weekplan_core::{Issue, IssueSource};

use crate::client::JiraClient;
use crate::models::JiraIssue;

impl JiraIssue {
  /// Read-only view of this issue; `base_url` is used for the permalink
  pub fn into_issue(self, base_url: &str) -> Issue {
    Issue {
      permalink: issue_permalink(base_url, &self.key),
      key: self.key,
      summary: self.fields.summary,
      priority: self.fields.priority.map(|priority| priority.name),
      time_spent: self.fields.aggregatetimespent,
    }
  }
}

impl IssueSource for JiraClient {
  async fn fetch_issues(&self, jql: &str, max_results: u32) -> Result<Vec<Issue>> {
    let results = self.search_issues(jql, max_results).await?;
    Ok(
      results
        .issues
        .into_iter()
        .map(|issue| issue.into_issue(&self.base_url))
        .collect(),
    )
  }
}
