//! # Credential Loading
//!
//! Reads the Jira server, user and API token from the environment. A `.env`
//! file in the working directory may seed the environment first. Its values
//! replace variables that are already set, since login shells always export
//! `USER`.

use std::env;
use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::consts::{ENV_SERVER, ENV_TOKEN, ENV_USER};
use crate::error::CredentialError;
use crate::url::ensure_url_scheme;

/// Jira connection settings for one run
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  /// Base URL of the Jira server, scheme included, no trailing slash
  pub server: String,
  pub user: String,
  pub token: String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("server", &self.server)
      .field("user", &self.user)
      .field("token", &"<redacted>")
      .finish()
  }
}

impl Credentials {
  /// Load credentials from the process environment
  pub fn from_env() -> Result<Self, CredentialError> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Load credentials through an arbitrary variable lookup.
  ///
  /// Every variable is required and must contain something other than
  /// whitespace. All missing variables are reported at once.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut missing = Vec::new();
    let mut required = |name: &'static str| {
      let value = lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
      if value.is_none() {
        missing.push(name);
      }
      value
    };

    let server = required(ENV_SERVER);
    let user = required(ENV_USER);
    let token = required(ENV_TOKEN);

    let (Some(server), Some(user), Some(token)) = (server, user, token) else {
      return Err(CredentialError::Missing(missing));
    };

    let server = ensure_url_scheme(&server).map_err(|err| CredentialError::InvalidServer {
      value: server.clone(),
      reason: format!("{err:#}"),
    })?;

    debug!(server = %server, user = %user, "Loaded Jira credentials");
    Ok(Self { server, user, token })
  }
}

/// Load a `.env` file from the working directory (or a parent) if present,
/// overriding variables that are already set.
///
/// Returns the path of the loaded file.
pub fn load_dotenv() -> Option<PathBuf> {
  match dotenvy::dotenv_override() {
    Ok(path) => {
      debug!("Loaded environment from {}", path.display());
      Some(path)
    }
    Err(err) if err.not_found() => None,
    Err(err) => {
      tracing::warn!("Ignoring unreadable .env file: {err}");
      None
    }
  }
}
