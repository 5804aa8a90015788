//! Constants shared by the weekplan crates.

/// Environment variable holding the Jira server URL
pub const ENV_SERVER: &str = "SERVER";

/// Environment variable holding the Jira user name
pub const ENV_USER: &str = "USER";

/// Environment variable holding the Jira API token
pub const ENV_TOKEN: &str = "TOKEN";

/// Issues assigned to the current user in any open sprint, most urgent first
pub const DEFAULT_JQL: &str = "assignee = currentUser() AND Sprint in openSprints() ORDER BY priority DESC";

/// Upper bound on the number of issues fetched per run
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Priority names that make an issue part of the weekly plan
pub const PLANNED_PRIORITIES: [&str; 2] = ["Highest", "High"];

/// Maximum number of characters of an issue summary kept in the report
pub const SUMMARY_MAX_CHARS: usize = 80;

/// Title of the report, followed by the run date
pub const REPORT_TITLE: &str = "Plan na tydzień";

/// First line of the mail body, above the report
pub const MAIL_GREETING: &str = "📋 Oto Twój plan zadań na tydzień!";

/// Printed once the report has been mailed
pub const SENT_MESSAGE: &str = "Lista zadań wysłana mailem!";

/// Date format used in the report header and mail subject
pub const DATE_FORMAT: &str = "%d.%m.%Y";
