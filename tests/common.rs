//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing page content files into temporary
//! directories used across multiple test files.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty temporary workspace directory.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_workspace() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes content file into workspace, creating parent directories as needed.
///
/// # Arguments
///
/// * `root`: Workspace directory
/// * `path`: File path relative to `root`
/// * `content`: File contents
///
/// # Returns
///
/// Absolute path of the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
