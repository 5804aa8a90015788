use std::path::PathBuf;

use anyhow::Result;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, info};
use weekplan_core::MailSender;

use crate::config::{MailerConfig, TlsMode};
use crate::message::build_message;
use crate::MailError;

/// Sends the weekly plan over SMTP
pub struct SmtpMailer {
  transport: AsyncSmtpTransport<Tokio1Executor>,
  from: Mailbox,
  to: Vec<Mailbox>,
  subject: String,
}

impl SmtpMailer {
  /// Build a mailer that sends every message with `subject`.
  ///
  /// No connection is opened until the first send.
  pub fn new(config: MailerConfig, subject: impl Into<String>) -> Result<Self, MailError> {
    let builder = match config.tls {
      TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        .map_err(|err| MailError::Smtp(err.to_string()))?,
      TlsMode::Tls => {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host).map_err(|err| MailError::Smtp(err.to_string()))?
      }
      TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str()),
    };

    let builder = match (config.username, config.password) {
      (Some(username), Some(password)) => builder.credentials(Credentials::new(username, password)),
      _ => builder,
    };

    Ok(Self {
      transport: builder.port(config.port).build(),
      from: config.from,
      to: config.to,
      subject: subject.into(),
    })
  }

  /// Recipients of every message
  pub fn recipients(&self) -> &[Mailbox] {
    &self.to
  }

  /// Open a connection and check the server answers
  pub async fn test_connection(&self) -> Result<bool, MailError> {
    self
      .transport
      .test_connection()
      .await
      .map_err(|err| MailError::Smtp(err.to_string()))
  }
}

impl MailSender for SmtpMailer {
  async fn send_mail(&self, text: &str, attachments: &[PathBuf]) -> Result<()> {
    let message = build_message(&self.from, &self.to, &self.subject, text, attachments)?;
    debug!("Sending message with {} attachment(s)", attachments.len());

    let response = self
      .transport
      .send(message)
      .await
      .map_err(|err| MailError::Smtp(err.to_string()))?;
    info!("SMTP server accepted message: {}", response.code());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(tls: TlsMode) -> MailerConfig {
    MailerConfig {
      host: "smtp.example.com".to_string(),
      port: 2525,
      username: Some("planner".to_string()),
      password: Some("secret".to_string()),
      from: "planner@example.com".parse().unwrap(),
      to: vec!["me@example.com".parse().unwrap()],
      tls,
    }
  }

  #[tokio::test]
  async fn test_mailer_builds_for_every_tls_mode() {
    for tls in [TlsMode::StartTls, TlsMode::Tls, TlsMode::None] {
      let mailer = SmtpMailer::new(config(tls), "Plan na tydzień 19.10.2026").unwrap();
      assert_eq!(mailer.recipients().len(), 1);
      assert_eq!(mailer.subject, "Plan na tydzień 19.10.2026");
    }
  }

  #[tokio::test]
  async fn test_send_fails_cleanly_without_server() {
    let mut config = config(TlsMode::None);
    config.host = "127.0.0.1".to_string();
    config.port = 1;
    let mailer = SmtpMailer::new(config, "Subject").unwrap();

    let result = mailer.send_mail("Body", &[]).await;
    assert!(result.unwrap_err().to_string().contains("SMTP error"));
  }
}
