//! Errors raised while laying out a repository skeleton.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A filesystem failure during bootstrapping.
///
/// Both variants keep the underlying OS error so its message reaches the
/// caller unchanged.
#[derive(Error, Debug)]
pub enum RepoError {
    /// A directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A file could not be written.
    #[error("failed to write file {}: {source}", path.display())]
    WriteFile {
        /// File that was being written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl RepoError {
    /// Returns the path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            RepoError::CreateDir { path, .. } | RepoError::WriteFile { path, .. } => path,
        }
    }
}

/// Result type alias using RepoError.
pub type RepoResult<T> = std::result::Result<T, RepoError>;
