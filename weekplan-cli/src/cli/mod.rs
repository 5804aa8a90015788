//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for weekplan: sending the
//! weekly plan, previewing it, and checking the configured services.

mod check;
mod preview;
mod send;

use std::process::ExitCode;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use weekplan_core::consts::{DEFAULT_JQL, DEFAULT_MAX_RESULTS};
use weekplan_core::{ColorMode, WeekplanError, load_dotenv, print_error};

/// Top-level CLI command for weekplan
#[derive(Parser)]
#[command(name = "weekplan")]
#[command(display_name = "📋 Weekplan")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Mail yourself a weekly plan of your high-priority Jira issues")]
#[command(
  long_about = "Weekplan collects the Jira issues assigned to you in open sprints, keeps the\n\
        Highest and High priority ones with logged time, and mails them to you as a\n\
        Markdown table.\n\n\
        Jira credentials are read from SERVER, USER and TOKEN; SMTP settings from\n\
        SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASSWORD, SMTP_FROM, SMTP_TLS and MAIL_TO.\n\
        A .env file in the working directory is loaded first if present."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for weekplan
#[derive(Subcommand)]
pub enum Commands {
  /// Build the weekly plan and mail it
  #[command(long_about = "Build the weekly plan and mail it to yourself.\n\n\
            The report is written to zadania_tydz_<ISO week>.md, attached to the mail\n\
            and removed again once the mail has been handed to the SMTP server.")]
  Send(send::SendArgs),

  /// Print the weekly plan without sending it
  #[command(long_about = "Render the weekly plan as Markdown and print it to stdout.\n\n\
            Only the Jira credentials are needed; no file is written and no mail is sent.")]
  Preview(preview::PreviewArgs),

  /// Verify Jira credentials and SMTP connectivity
  #[command(long_about = "Check that the Jira credentials are accepted and that the SMTP server\n\
            answers, without fetching issues or sending anything.")]
  Check(check::CheckArgs),
}

/// Options shared by every command that queries Jira for issues
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
  /// JQL query selecting the candidate issues
  #[arg(long, default_value = DEFAULT_JQL)]
  pub jql: String,

  /// Maximum number of issues fetched
  #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
  pub max_results: u32,

  /// Date shown in the report, YYYY-MM-DD (defaults to today)
  #[arg(long)]
  pub date: Option<NaiveDate>,
}

impl QueryArgs {
  /// Date of this run
  pub fn run_date(&self) -> NaiveDate {
    self.date.unwrap_or_else(|| Local::now().date_naive())
  }
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  if let Some(path) = load_dotenv() {
    debug!("Using environment file {}", path.display());
  }

  match cli.command {
    Commands::Send(args) => send::handle_send_command(args),
    Commands::Preview(args) => preview::handle_preview_command(args),
    Commands::Check(args) => check::handle_check_command(args),
  }
}

/// Exit status for a failed run: the category code, or 1 for anything uncategorized
pub fn failure_exit_code(err: &anyhow::Error) -> u8 {
  err.downcast_ref::<WeekplanError>().map_or(1, WeekplanError::exit_code)
}

/// Print a failed run and pick its exit code
pub fn report_failure(err: &anyhow::Error) -> ExitCode {
  match err.downcast_ref::<WeekplanError>() {
    Some(failure) => {
      debug!(category = failure.category(), "Run failed: {failure:?}");
      print_error(&format!("Something went wrong ({}): {failure}", failure.category()));
    }
    None => {
      debug!("Run failed: {err:?}");
      print_error(&format!("Something went wrong: {err:#}"));
    }
  }
  ExitCode::from(failure_exit_code(err))
}
