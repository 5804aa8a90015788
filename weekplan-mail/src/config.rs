use std::env;

use lettre::message::Mailbox;
use tracing::debug;

use crate::MailError;

pub const ENV_SMTP_HOST: &str = "SMTP_HOST";
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";
pub const ENV_SMTP_USER: &str = "SMTP_USER";
pub const ENV_SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub const ENV_SMTP_FROM: &str = "SMTP_FROM";
pub const ENV_SMTP_TLS: &str = "SMTP_TLS";
pub const ENV_MAIL_TO: &str = "MAIL_TO";

const DEFAULT_SMTP_PORT: u16 = 587;

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
  /// Plain connection upgraded with STARTTLS
  #[default]
  StartTls,
  /// TLS from the first byte (SMTPS)
  Tls,
  /// No encryption, for local relays and test servers
  None,
}

impl TlsMode {
  fn parse(value: &str) -> Result<Self, MailError> {
    match value.trim().to_ascii_lowercase().as_str() {
      "starttls" => Ok(Self::StartTls),
      "tls" | "smtps" => Ok(Self::Tls),
      "none" | "plain" => Ok(Self::None),
      _ => Err(MailError::InvalidConfig {
        name: ENV_SMTP_TLS,
        value: value.to_string(),
      }),
    }
  }
}

/// SMTP settings for delivering the weekly plan
#[derive(Debug, Clone)]
pub struct MailerConfig {
  pub host: String,
  pub port: u16,
  pub username: Option<String>,
  pub password: Option<String>,
  pub from: Mailbox,
  pub to: Vec<Mailbox>,
  pub tls: TlsMode,
}

impl MailerConfig {
  /// Read the settings from the process environment
  pub fn from_env() -> Result<Self, MailError> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Read the settings through an arbitrary variable lookup
  pub fn from_lookup<F>(lookup: F) -> Result<Self, MailError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |name: &str| {
      lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    };

    let host = get(ENV_SMTP_HOST).ok_or(MailError::MissingConfig(ENV_SMTP_HOST))?;
    let port = match get(ENV_SMTP_PORT) {
      Some(port) => port.parse::<u16>().ok().ok_or(MailError::InvalidConfig {
        name: ENV_SMTP_PORT,
        value: port.clone(),
      })?,
      None => DEFAULT_SMTP_PORT,
    };
    let tls = match get(ENV_SMTP_TLS) {
      Some(tls) => TlsMode::parse(&tls)?,
      None => TlsMode::default(),
    };

    let from = get(ENV_SMTP_FROM).ok_or(MailError::MissingConfig(ENV_SMTP_FROM))?;
    let from = parse_mailbox(&from)?;
    let to = match get(ENV_MAIL_TO) {
      Some(recipients) => parse_recipients(&recipients)?,
      None => vec![from.clone()],
    };

    // SMTP_USER and SMTP_PASSWORD come as a pair
    let (username, password) = match (get(ENV_SMTP_USER), get(ENV_SMTP_PASSWORD)) {
      (Some(_), None) => return Err(MailError::MissingConfig(ENV_SMTP_PASSWORD)),
      (None, Some(_)) => return Err(MailError::MissingConfig(ENV_SMTP_USER)),
      pair => pair,
    };

    let config = Self {
      host,
      port,
      username,
      password,
      from,
      to,
      tls,
    };
    debug!(host = %config.host, port = config.port, tls = ?config.tls, "Loaded SMTP settings");
    Ok(config)
  }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
  address
    .parse::<Mailbox>()
    .map_err(|err| MailError::InvalidAddress(format!("{address}: {err}")))
}

fn parse_recipients(list: &str) -> Result<Vec<Mailbox>, MailError> {
  let recipients = list
    .split(',')
    .map(str::trim)
    .filter(|address| !address.is_empty())
    .map(parse_mailbox)
    .collect::<Result<Vec<_>, _>>()?;

  if recipients.is_empty() {
    return Err(MailError::MissingConfig(ENV_MAIL_TO));
  }
  Ok(recipients)
}
