//! Read-only view of a tracker issue and the source that produces them.

use std::future::Future;

use anyhow::Result;

/// The parts of a Jira issue the weekly plan looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
  pub key: String,
  pub summary: String,
  /// Priority name, e.g. `Highest`; `None` when the issue has no priority
  pub priority: Option<String>,
  /// Aggregated time spent in seconds, as reported by the tracker
  pub time_spent: Option<i64>,
  pub permalink: String,
}

/// Anything that can run an issue query for the current user
pub trait IssueSource {
  /// Run `jql` and return at most `max_results` issues in tracker order
  fn fetch_issues(&self, jql: &str, max_results: u32) -> impl Future<Output = Result<Vec<Issue>>> + Send;
}
