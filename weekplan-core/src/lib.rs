//! # Weekplan Core Library
//!
//! Issue selection, Markdown report rendering and the delivery pipeline for
//! the weekly plan. Talking to Jira and sending mail are left to collaborator
//! crates, which plug in through [`IssueSource`] and [`MailSender`].

pub mod config;
pub mod consts;
pub mod delivery;
pub mod error;
pub mod issue;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod url;

// Re-export main types for the CLI and collaborator crates
pub use config::{Credentials, load_dotenv};
pub use delivery::{MailSender, ReportFile, compose_mail_body, report_file_name, report_subject};
pub use error::{CredentialError, RenderError, WeekplanError};
pub use issue::{Issue, IssueSource};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use pipeline::{Delivered, SendOptions, preview_weekly_report, send_weekly_report};
pub use report::{WeeklyTask, build_report, render_report, select_weekly_tasks};
