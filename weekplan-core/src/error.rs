//! # Pipeline Errors
//!
//! The closed set of failures a weekly plan run can end in. Every variant maps
//! to its own process exit code so scripts and schedulers can tell a missing
//! token apart from an SMTP outage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading credentials and other settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
  #[error("Jira credentials missing: set {}", .0.join(", "))]
  Missing(Vec<&'static str>),
  #[error("invalid Jira server '{value}': {reason}")]
  InvalidServer { value: String, reason: String },
  #[error("invalid mail settings: {0}")]
  Mail(String),
}

/// Errors raised while turning issues into report rows
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
  #[error("issue {key} reports negative time spent ({seconds}s)")]
  NegativeTimeSpent { key: String, seconds: i64 },
}

/// Top-level error of a weekly plan run
#[derive(Debug, Error)]
pub enum WeekplanError {
  #[error(transparent)]
  Credential(#[from] CredentialError),

  #[error("failed to fetch issues from Jira: {0:#}")]
  Fetch(anyhow::Error),

  #[error(transparent)]
  Render(#[from] RenderError),

  #[error("report file {}: {source}", .path.display())]
  Io { path: PathBuf, source: io::Error },

  #[error("failed to deliver report: {0:#}")]
  Delivery(anyhow::Error),
}

impl WeekplanError {
  /// Process exit code for this failure
  pub const fn exit_code(&self) -> u8 {
    match self {
      Self::Credential(_) => 2,
      Self::Fetch(_) => 3,
      Self::Render(_) => 4,
      Self::Io { .. } => 5,
      Self::Delivery(_) => 6,
    }
  }

  /// Short name of the failure category, used in log fields and messages
  pub const fn category(&self) -> &'static str {
    match self {
      Self::Credential(_) => "configuration",
      Self::Fetch(_) => "fetch",
      Self::Render(_) => "render",
      Self::Io { .. } => "file",
      Self::Delivery(_) => "delivery",
    }
  }

  pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
