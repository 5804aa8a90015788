//! # Preview Command

use anyhow::Result;
use clap::Args;
use weekplan_core::output::print_document;
use weekplan_core::preview_weekly_report;

use super::QueryArgs;
use crate::clients;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
  #[command(flatten)]
  pub query: QueryArgs,
}

pub(super) fn handle_preview_command(args: PreviewArgs) -> Result<()> {
  let credentials = clients::load_credentials()?;
  let (rt, jira) = clients::create_jira_runtime_and_client(&credentials)?;

  let report = rt.block_on(preview_weekly_report(
    &jira,
    &args.query.jql,
    args.query.max_results,
    args.query.run_date(),
  ))?;

  print_document(&report);
  Ok(())
}
