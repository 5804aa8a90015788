//! Temporary output directories for report files

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A per-test directory the report file is written into
pub struct WorkdirGuard {
  temp_dir: TempDir,
}

impl Default for WorkdirGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl WorkdirGuard {
  /// Create a new empty directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    Self { temp_dir }
  }

  /// Path of the directory
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Write a file relative to the directory, e.g. a `.env` file
  pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
    let path = self.temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
  }

  /// Names of all files currently in the directory, sorted
  pub fn file_names(&self) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(self.temp_dir.path())
      .expect("Failed to read temporary directory")
      .filter_map(|entry| entry.ok())
      .map(|entry| entry.file_name().to_string_lossy().into_owned())
      .collect();
    names.sort();
    names
  }
}
