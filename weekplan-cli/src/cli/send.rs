//! # Send Command
//!
//! Runs the full pipeline: fetch, render, attach, mail, clean up.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use weekplan_core::consts::SENT_MESSAGE;
use weekplan_core::{SendOptions, print_info, print_success, send_weekly_report};

use super::QueryArgs;
use crate::clients;

/// Arguments for the send command
#[derive(Args, Debug)]
pub struct SendArgs {
  #[command(flatten)]
  pub query: QueryArgs,

  /// Directory the report attachment is written to
  #[arg(long, default_value = ".")]
  pub output_dir: PathBuf,

  /// Keep the report file after sending
  #[arg(long)]
  pub keep_file: bool,
}

pub(super) fn handle_send_command(args: SendArgs) -> Result<()> {
  let run_date = args.query.run_date();

  // Validate all settings before talking to any server
  let credentials = clients::load_credentials()?;
  let mailer = clients::create_mailer(clients::load_mailer_config()?, run_date)?;
  let (rt, jira) = clients::create_jira_runtime_and_client(&credentials)?;

  let options = SendOptions {
    jql: args.query.jql,
    max_results: args.query.max_results,
    output_dir: args.output_dir,
    keep_file: args.keep_file,
    run_date,
  };

  let delivered = rt.block_on(send_weekly_report(&jira, &mailer, &options))?;

  print_success(SENT_MESSAGE);
  print_info(&format!(
    "{} of {} issues planned, attached as {}",
    delivered.planned, delivered.fetched, delivered.file_name
  ));
  if let Some(path) = delivered.kept_file {
    print_info(&format!("Report kept at {}", path.display()));
  }

  Ok(())
}
