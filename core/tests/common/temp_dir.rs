// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;
use tokio::fs;

/// Temporary directories used for testing.
///
/// Automatically cleans up all created directories when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// Base directory, parent of everything else.
    pub base: PathBuf,
    /// State directory holding the appointment slot.
    pub state_dir: PathBuf,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?.keep();
        let state_dir = base.join("state");
        fs::create_dir_all(&state_dir).await?;
        Ok(Self { base, state_dir })
    }

    /// Path of the appointment slot file.
    #[must_use]
    pub fn appointments_file(&self) -> PathBuf {
        self.state_dir.join("appointments.json")
    }

    /// Writes a file directly under the base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub async fn write_file(
        &self,
        name: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.base.join(name);
        fs::write(&path, content).await?;
        Ok(path)
    }
}

/// Sets up temporary directories for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}

impl Drop for TempDirs {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.base) {
            tracing::warn!(path = %self.base.display(), err = %e, "failed to clean up temp directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_dirs_creates_directories() {
        let dirs = TempDirs::new().await.unwrap();
        assert!(dirs.state_dir.is_dir());
        assert_eq!(dirs.state_dir.parent(), Some(dirs.base.as_path()));
        assert!(!dirs.appointments_file().exists());
    }

    #[tokio::test]
    async fn temp_dirs_write_file() {
        let dirs = TempDirs::new().await.unwrap();
        let path = dirs.write_file("catalog.json", "{}").await.unwrap();
        assert!(path.starts_with(&dirs.base));
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn temp_dirs_cleanup_on_drop() {
        let base = {
            let dirs = TempDirs::new().await.unwrap();
            dirs.base.clone()
        };
        assert!(!base.exists());
    }
}
