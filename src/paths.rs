//! Where a run reads and writes its files.

use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = "data";
pub const LAST_UPDATED_FILE: &str = "last_updated.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    /// Holds the README that gets the summary.
    pub repo_root: PathBuf,
    pub data_dir: PathBuf,
}

impl Paths {
    pub fn from_repo_root(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            data_dir: repo_root.join(DATA_DIR_NAME),
        }
    }

    /// Resolved against the crate's own directory rather than the working directory, so the
    /// updater behaves the same wherever it is started from.
    pub fn from_manifest_dir() -> Self {
        Self::from_repo_root(Path::new(env!("CARGO_MANIFEST_DIR")))
    }

    pub fn last_updated_path(&self) -> PathBuf {
        self.data_dir.join(LAST_UPDATED_FILE)
    }
}
