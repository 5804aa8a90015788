//! # Weekly Plan Pipeline
//!
//! Fetch → select → render → write → send → clean up, in that order and
//! nothing else. Each step maps its failure onto one [`WeekplanError`]
//! variant; there are no retries.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::delivery::{MailSender, ReportFile, compose_mail_body, report_file_name};
use crate::error::WeekplanError;
use crate::issue::{Issue, IssueSource};
use crate::report::build_report;

/// Settings for a full send run
#[derive(Debug, Clone)]
pub struct SendOptions {
  pub jql: String,
  pub max_results: u32,
  /// Directory the attachment is written to
  pub output_dir: PathBuf,
  /// Leave the attachment on disk after sending
  pub keep_file: bool,
  /// Date shown in the report and used for the file's week number
  pub run_date: NaiveDate,
}

/// Summary of a successful send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
  /// Number of issues fetched from the tracker
  pub fetched: usize,
  /// Number of rows in the report
  pub planned: usize,
  pub file_name: String,
  /// Location of the attachment when it was kept
  pub kept_file: Option<PathBuf>,
}

async fn fetch<S: IssueSource>(source: &S, jql: &str, max_results: u32) -> Result<Vec<Issue>, WeekplanError> {
  let issues = source
    .fetch_issues(jql, max_results)
    .await
    .map_err(WeekplanError::Fetch)?;
  debug!("Fetched {} issues", issues.len());
  Ok(issues)
}

/// Render the report without writing or sending anything
#[instrument(skip(source))]
pub async fn preview_weekly_report<S: IssueSource>(
  source: &S,
  jql: &str,
  max_results: u32,
  run_date: NaiveDate,
) -> Result<String, WeekplanError> {
  let issues = fetch(source, jql, max_results).await?;
  let (_, report) = build_report(&issues, run_date)?;
  Ok(report)
}

/// Build the weekly plan and mail it with the report attached.
///
/// The attachment is removed once the send returns, whether it succeeded or
/// not, unless `keep_file` is set.
#[instrument(skip(source, mailer), fields(run_date = %options.run_date))]
pub async fn send_weekly_report<S, M>(source: &S, mailer: &M, options: &SendOptions) -> Result<Delivered, WeekplanError>
where
  S: IssueSource,
  M: MailSender,
{
  let issues = fetch(source, &options.jql, options.max_results).await?;
  let (tasks, report) = build_report(&issues, options.run_date)?;
  info!("Planned {} of {} issues", tasks.len(), issues.len());

  let file = ReportFile::create(&options.output_dir, options.run_date, &report)?;
  let body = compose_mail_body(&report);

  mailer
    .send_mail(&body, &[file.path().to_path_buf()])
    .await
    .map_err(WeekplanError::Delivery)?;
  info!("Report mailed with attachment {}", file.path().display());

  let kept_file = if options.keep_file {
    Some(file.keep())
  } else {
    file.remove()?;
    None
  };

  Ok(Delivered {
    fetched: issues.len(),
    planned: tasks.len(),
    file_name: report_file_name(options.run_date),
    kept_file,
  })
}
