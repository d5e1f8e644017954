//! # ScreenFlow Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by both generation pipelines: the
//! journey-map source and the definitions module are read whole into strings,
//! and the generated definitions module and flow document are written whole,
//! overwriting any previous version. Every wrapper attaches the offending
//! path to its error so a failed run names the file that broke it.
//!
//! ## Architecture
//!
//! - **`read_file_to_string`**: `fs::read_to_string` plus error context.
//! - **`write_string_to_file`**: ensures the parent directory exists, then
//!   overwrites the target via `fs::write`. A crash mid-write can leave a
//!   partially written file; recovery is out of scope for this tool.
//! - **`ensure_dir_exists`**: `mkdir -p` semantics, erroring when the path
//!   exists but is not a directory.
//!
use crate::core::error::{Result, ScreenflowError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating it and any
/// missing parents when needed.
///
/// ## Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ScreenflowError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string, naming the file in the
/// error when reading fails.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, overwriting any existing content. The
/// parent directory is created first when missing, so generated outputs can
/// land in not-yet-existing `docs/` or `src/bot/` trees.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("docs/generated");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing_dir = base_dir.path().join("existing");
        fs::create_dir(&existing_dir)?;
        ensure_dir_exists(&existing_dir)?;
        assert!(existing_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_write_creates_parents_and_read_round_trips() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("docs/SCREEN_FLOW.md");
        let content = "# Telegram Bot Screen Flow";
        write_string_to_file(&file_path, content)?;
        assert!(file_path.exists());
        assert_eq!(read_file_to_string(&file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_write_overwrites_existing() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("defs.ts");
        write_string_to_file(&file_path, "old")?;
        write_string_to_file(&file_path, "new")?;
        assert_eq!(read_file_to_string(&file_path)?, "new");
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nonexistent.jsx");
        let result = read_file_to_string(&file_path);
        assert!(result.is_err());
        Ok(())
    }
}
