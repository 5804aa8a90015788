//! Jira server URL normalization.
//!
//! `SERVER` is usually copied from the browser address bar, so it may or may
//! not carry a scheme or a trailing slash. Everything downstream expects a bare
//! base URL such as `https://company.atlassian.net`.

use anyhow::{Context, Result};
use url::Url;

fn has_http_scheme(input: &str) -> bool {
  let lowered = input.to_ascii_lowercase();
  lowered.starts_with("http://") || lowered.starts_with("https://")
}

/// Ensure a server address has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Trailing slashes
/// are dropped so paths can be appended with `format!("{base}/rest/...")`.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim().trim_end_matches('/');
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Server cannot be empty"));
  }

  let candidate = if has_http_scheme(trimmed) {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse URL: '{input}'"))?;
  if url.host_str().is_none_or(str::is_empty) {
    return Err(anyhow::anyhow!("URL '{input}' has no host"));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Stable link to a single issue
pub fn issue_permalink(base_url: &str, key: &str) -> String {
  format!("{}/browse/{}", base_url.trim_end_matches('/'), key)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ensure_url_scheme_with_https() {
    let result = ensure_url_scheme("https://company.atlassian.net").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_ensure_url_scheme_with_http() {
    let result = ensure_url_scheme("http://jira.example.com").unwrap();
    assert_eq!(result, "http://jira.example.com");
  }

  #[test]
  fn test_ensure_url_scheme_without_scheme() {
    let result = ensure_url_scheme("company.atlassian.net").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_ensure_url_scheme_trailing_slash() {
    let result = ensure_url_scheme("https://company.atlassian.net/").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_ensure_url_scheme_with_context_path() {
    let result = ensure_url_scheme("jira.example.com/jira/").unwrap();
    assert_eq!(result, "https://jira.example.com/jira");
  }

  #[test]
  fn test_ensure_url_scheme_with_port() {
    let result = ensure_url_scheme("http://127.0.0.1:8080").unwrap();
    assert_eq!(result, "http://127.0.0.1:8080");
  }

  #[test]
  fn test_ensure_url_scheme_case_sensitivity() {
    let result = ensure_url_scheme("HTTPS://Jira.Example.com").unwrap();
    assert_eq!(result, "https://jira.example.com");
  }

  #[test]
  fn test_ensure_url_scheme_empty_string() {
    let result = ensure_url_scheme("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Server cannot be empty"));
  }

  #[test]
  fn test_issue_permalink() {
    assert_eq!(
      issue_permalink("https://company.atlassian.net", "A-1"),
      "https://company.atlassian.net/browse/A-1"
    );
    assert_eq!(
      issue_permalink("https://company.atlassian.net/", "A-1"),
      "https://company.atlassian.net/browse/A-1"
    );
  }
}
