/*!
 * Common test utilities for the langlist test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A response in the shape returned when a display language was requested
pub const NAMED_RESPONSE: &str = r#"{
  "languages": [
    {"language": "en", "name": "English"},
    {"language": "fr", "name": "French"},
    {"language": "zh-TW", "name": "Chinese (Traditional)"}
  ]
}"#;

/// A response where some entries are unreadable
pub const MIXED_RESPONSE: &str = r#"{
  "languages": [
    {"language": "de"},
    {"bogus": true},
    "ja",
    {"language": "it"},
    {"language": ""}
  ]
}"#;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Route library log output through env_logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
