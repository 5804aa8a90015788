//! # Delivery
//!
//! The report travels twice: inline in the mail body and as a Markdown
//! attachment. The attachment lives on disk only for the duration of the send.

use std::fs::{self, File};
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::consts::{DATE_FORMAT, MAIL_GREETING, REPORT_TITLE};
use crate::error::WeekplanError;

/// Anything that can deliver a message with file attachments
pub trait MailSender {
  /// Send `text` with the given files attached
  fn send_mail(&self, text: &str, attachments: &[PathBuf]) -> impl Future<Output = Result<()>> + Send;
}

/// `zadania_tydz_<ISO week>.md`
pub fn report_file_name(date: NaiveDate) -> String {
  format!("zadania_tydz_{}.md", date.iso_week().week())
}

/// Mail body: greeting line, blank line, report
pub fn compose_mail_body(report: &str) -> String {
  format!("{MAIL_GREETING}\n\n{report}")
}

/// Mail subject for the run date
pub fn report_subject(date: NaiveDate) -> String {
  format!("{REPORT_TITLE} {}", date.format(DATE_FORMAT))
}

/// The report written to disk for attaching.
///
/// The file is removed when the guard is dropped unless [`ReportFile::keep`]
/// was called, so an aborted send does not leave it behind.
#[derive(Debug)]
pub struct ReportFile {
  path: PathBuf,
  armed: bool,
}

impl ReportFile {
  /// Write `contents` as UTF-8 to the week-numbered file inside `dir`
  pub fn create(dir: &Path, date: NaiveDate, contents: &str) -> Result<Self, WeekplanError> {
    let path = dir.join(report_file_name(date));
    let mut file = File::create(&path).map_err(|err| WeekplanError::io(&path, err))?;
    let guard = Self { path, armed: true };
    file
      .write_all(contents.as_bytes())
      .and_then(|()| file.flush())
      .map_err(|err| WeekplanError::io(&guard.path, err))?;
    debug!("Wrote report to {}", guard.path.display());
    Ok(guard)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Leave the file on disk and return its path
  pub fn keep(mut self) -> PathBuf {
    self.armed = false;
    std::mem::take(&mut self.path)
  }

  /// Delete the file now, reporting failures
  pub fn remove(mut self) -> Result<(), WeekplanError> {
    self.armed = false;
    fs::remove_file(&self.path).map_err(|err| WeekplanError::io(&self.path, err))?;
    debug!("Removed report file {}", self.path.display());
    Ok(())
  }
}

impl Drop for ReportFile {
  fn drop(&mut self) {
    if self.armed
      && let Err(err) = fs::remove_file(&self.path)
    {
      warn!("Failed to remove report file {}: {err}", self.path.display());
    }
  }
}
