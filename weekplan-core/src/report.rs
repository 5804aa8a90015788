//! # Report Builder
//!
//! Picks the issues worth planning for this week and renders them as a
//! Markdown document: a dated title followed by a pipe table.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::consts::{DATE_FORMAT, PLANNED_PRIORITIES, REPORT_TITLE, SUMMARY_MAX_CHARS};
use crate::error::RenderError;
use crate::issue::Issue;

/// One row of the weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct WeeklyTask {
  #[tabled(rename = "Key")]
  pub key: String,
  #[tabled(rename = "Summary")]
  pub summary: String,
  #[tabled(rename = "Priority")]
  pub priority: String,
  #[tabled(rename = "Estimate")]
  pub estimate: String,
  #[tabled(rename = "Link")]
  pub link: String,
}

impl WeeklyTask {
  /// Project an issue onto a report row
  pub fn from_issue(issue: &Issue) -> Result<Self, RenderError> {
    let seconds = issue.time_spent.unwrap_or_default();
    if seconds < 0 {
      return Err(RenderError::NegativeTimeSpent {
        key: issue.key.clone(),
        seconds,
      });
    }

    Ok(Self {
      key: issue.key.clone(),
      summary: truncate_chars(&issue.summary, SUMMARY_MAX_CHARS),
      priority: issue.priority.clone().unwrap_or_default(),
      estimate: format_estimate(seconds),
      link: issue.permalink.clone(),
    })
  }
}

/// Whether an issue belongs in the weekly plan: top priority with logged time
pub fn is_planned(issue: &Issue) -> bool {
  let top_priority = issue
    .priority
    .as_deref()
    .is_some_and(|name| PLANNED_PRIORITIES.contains(&name));
  let has_time = issue.time_spent.is_some_and(|seconds| seconds != 0);
  top_priority && has_time
}

/// Whole hours, rounded down
pub fn format_estimate(seconds: i64) -> String {
  format!("{}h", seconds.div_euclid(3600))
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
  text.chars().take(max_chars).collect()
}

/// Filter and project issues, keeping the tracker's order
pub fn select_weekly_tasks(issues: &[Issue]) -> Result<Vec<WeeklyTask>, RenderError> {
  issues
    .iter()
    .filter(|issue| is_planned(issue))
    .map(WeeklyTask::from_issue)
    .collect()
}

/// Render rows as the Markdown report dated `date`
pub fn render_report(tasks: &[WeeklyTask], date: NaiveDate) -> String {
  let table = Table::new(tasks).with(Style::markdown()).to_string();
  format!("# {REPORT_TITLE} {}\n\n{table}", date.format(DATE_FORMAT))
}

/// Select, project and render in one go
pub fn build_report(issues: &[Issue], date: NaiveDate) -> Result<(Vec<WeeklyTask>, String), RenderError> {
  let tasks = select_weekly_tasks(issues)?;
  let report = render_report(&tasks, date);
  Ok((tasks, report))
}
