//! Email delivery of the weekly plan.
//!
//! A thin layer over [lettre](https://lettre.rs): settings come from the
//! environment, and [`SmtpMailer`] implements the pipeline's `MailSender`.
//!
//! # Environment Variables
//!
//! The [`MailerConfig::from_env`] method reads:
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `SMTP_HOST` | Yes | SMTP server hostname |
//! | `SMTP_PORT` | No | Port (default: 587) |
//! | `SMTP_USER` | No | Username for authentication |
//! | `SMTP_PASSWORD` | No | Password for authentication |
//! | `SMTP_FROM` | Yes | Sender address |
//! | `SMTP_TLS` | No | `starttls` (default), `tls`, or `none` |
//! | `MAIL_TO` | No | Comma-separated recipients (default: `SMTP_FROM`) |

mod config;
mod mailer;
mod message;

use std::path::PathBuf;

pub use config::{MailerConfig, TlsMode};
pub use mailer::SmtpMailer;
pub use message::build_message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
  #[error("missing required config: {0}")]
  MissingConfig(&'static str),

  #[error("invalid value for {name}: {value}")]
  InvalidConfig { name: &'static str, value: String },

  #[error("invalid email address: {0}")]
  InvalidAddress(String),

  #[error("failed to read attachment {}: {source}", .path.display())]
  Attachment { path: PathBuf, source: std::io::Error },

  #[error("failed to build message: {0}")]
  Build(String),

  #[error("SMTP error: {0}")]
  Smtp(String),
}
