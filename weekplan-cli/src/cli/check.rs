//! # Check Command
//!
//! Verifies the configured services answer before a scheduled `send` relies
//! on them.

use anyhow::{Result, anyhow};
use chrono::Local;
use clap::Args;
use tracing::debug;
use weekplan_core::{WeekplanError, print_success, print_warning};

use crate::clients;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Only check the Jira credentials
  #[arg(long)]
  pub skip_mail: bool,
}

pub(super) fn handle_check_command(args: CheckArgs) -> Result<()> {
  let credentials = clients::load_credentials()?;
  let (rt, jira) = clients::create_jira_runtime_and_client(&credentials)?;

  let user = rt.block_on(jira.current_user()).map_err(WeekplanError::Fetch)?;
  print_success(&format!(
    "Jira at {} accepts the credentials of {}",
    credentials.server, user.display_name
  ));

  if args.skip_mail {
    print_warning("Skipping SMTP check");
    return Ok(());
  }

  let config = clients::load_mailer_config()?;
  let host = format!("{}:{}", config.host, config.port);
  let mailer = clients::create_mailer(config, Local::now().date_naive())?;
  debug!("Testing SMTP connection to {host}");

  match rt.block_on(mailer.test_connection()) {
    Ok(true) => {
      print_success(&format!("SMTP server {host} is reachable"));
      Ok(())
    }
    Ok(false) => Err(WeekplanError::Delivery(anyhow!("SMTP server {host} did not accept the connection")).into()),
    Err(err) => Err(WeekplanError::Delivery(err.into()).into()),
  }
}
