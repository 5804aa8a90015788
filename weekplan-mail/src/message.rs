use std::fs;
use std::path::{Path, PathBuf};

use lettre::Message;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};

use crate::MailError;

const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

fn attachment_part(path: &Path) -> Result<SinglePart, MailError> {
  let content = fs::read(path).map_err(|source| MailError::Attachment {
    path: path.to_path_buf(),
    source,
  })?;
  let filename = path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| "attachment".to_string());
  let content_type = ContentType::parse(MARKDOWN_CONTENT_TYPE).map_err(|err| MailError::Build(err.to_string()))?;

  Ok(Attachment::new(filename).body(content, content_type))
}

/// Build a plain-text message with every file in `attachments` attached
pub fn build_message(
  from: &Mailbox,
  to: &[Mailbox],
  subject: &str,
  text: &str,
  attachments: &[PathBuf],
) -> Result<Message, MailError> {
  let mut builder = Message::builder().from(from.clone()).subject(subject);
  for recipient in to {
    builder = builder.to(recipient.clone());
  }

  let mut body = MultiPart::mixed().singlepart(SinglePart::plain(text.to_string()));
  for path in attachments {
    body = body.singlepart(attachment_part(path)?);
  }

  builder.multipart(body).map_err(|err| MailError::Build(err.to_string()))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  fn mailbox(address: &str) -> Mailbox {
    address.parse().unwrap()
  }

  #[test]
  fn test_message_with_report_attachment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zadania_tydz_43.md");
    fs::write(&path, "# Plan na tydzień 19.10.2026\n").unwrap();

    let message = build_message(
      &mailbox("planner@example.com"),
      &[mailbox("me@example.com"), mailbox("lead@example.com")],
      "Plan na tydzień 19.10.2026",
      "Oto Twój plan zadań na tydzień!",
      &[path],
    )
    .unwrap();

    let envelope = message.envelope();
    assert_eq!(envelope.to().len(), 2);
    assert_eq!(
      envelope.from().map(ToString::to_string).as_deref(),
      Some("planner@example.com")
    );

    let formatted = String::from_utf8_lossy(&message.formatted()).into_owned();
    assert!(formatted.contains("zadania_tydz_43.md"));
    assert!(formatted.contains("text/markdown"));
    assert!(formatted.contains("multipart/mixed"));
  }

  #[test]
  fn test_message_without_attachments() {
    let message = build_message(
      &mailbox("planner@example.com"),
      &[mailbox("me@example.com")],
      "Subject",
      "Body",
      &[],
    )
    .unwrap();

    let formatted = String::from_utf8_lossy(&message.formatted()).into_owned();
    assert!(formatted.contains("Body"));
  }

  #[test]
  fn test_missing_attachment_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("zadania_tydz_1.md");

    let err = build_message(
      &mailbox("planner@example.com"),
      &[mailbox("me@example.com")],
      "Subject",
      "Body",
      &[missing],
    )
    .unwrap_err();

    assert!(matches!(err, MailError::Attachment { .. }));
    assert!(err.to_string().contains("zadania_tydz_1.md"));
  }
}
