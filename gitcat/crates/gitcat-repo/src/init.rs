//! Repository skeleton creation.
//!
//! Lays out the minimal on-disk structure of a fresh repository: the fixed
//! subdirectory set, a canonical `config` file and a `HEAD` that points at
//! the default branch.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RepoError, RepoResult};

/// Branch `HEAD` points at when no other is requested.
pub const DEFAULT_BRANCH: &str = "master";

/// Subdirectories created under the repository directory, relative to it.
pub const SUBDIRECTORIES: [&str; 6] = [
    "hooks",
    "info",
    "objects/info",
    "objects/pack",
    "refs/head",
    "refs/tags",
];

/// Contents of the `config` file written into a new repository.
pub const DEFAULT_CONFIG: &str = "\
[core]
\trepositoryformatversion = 0
\tfilemode = false
\tbare = false
\tsymlinks = false
\tignorecase = true
";

/// Options for [`init_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Branch `HEAD` refers to. `None` or an empty name means [`DEFAULT_BRANCH`].
    pub default_branch: Option<String>,
}

impl InitOptions {
    /// Options with the given default branch.
    pub fn with_default_branch(branch: impl Into<String>) -> Self {
        Self {
            default_branch: Some(branch.into()),
        }
    }

    /// The branch name that will be written to `HEAD`.
    pub fn branch(&self) -> &str {
        match self.default_branch.as_deref() {
            Some(branch) if !branch.is_empty() => branch,
            _ => DEFAULT_BRANCH,
        }
    }
}

/// Initializes a repository in `dir` with default options.
pub fn init(dir: impl AsRef<Path>) -> RepoResult<()> {
    init_with_options(dir, &InitOptions::default())
}

/// Initializes a repository in `dir`.
///
/// The directory is created when missing. Existing entries are left alone,
/// and `config` and `HEAD` are overwritten. Any filesystem failure, such as
/// `dir` naming a regular file, is returned with the OS error attached.
///
/// # Example
///
/// ```no_run
/// use gitcat_repo::{init_with_options, InitOptions};
///
/// init_with_options(".git", &InitOptions::with_default_branch("main"))?;
/// # Ok::<(), gitcat_repo::RepoError>(())
/// ```
pub fn init_with_options(dir: impl AsRef<Path>, options: &InitOptions) -> RepoResult<()> {
    let dir = dir.as_ref();
    let branch = options.branch();
    debug!(dir = %dir.display(), branch, "initializing repository");

    create_structure(dir)?;
    write_file(&dir.join("config"), DEFAULT_CONFIG)?;
    write_file(&dir.join("HEAD"), &head_contents(branch))?;

    debug!(dir = %dir.display(), "initialized empty repository");
    Ok(())
}

/// Text of a `HEAD` file referring to `branch`. There is no trailing newline.
pub fn head_contents(branch: &str) -> String {
    format!("ref: refs/heads/{}", branch)
}

fn create_structure(dir: &Path) -> RepoResult<()> {
    for subdir in SUBDIRECTORIES {
        let path = subdir.split('/').fold(dir.to_path_buf(), |acc, part| acc.join(part));
        fs::create_dir_all(&path).map_err(|source| RepoError::CreateDir {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "created directory");
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> RepoResult<()> {
    fs::write(path, contents).map_err(|source| RepoError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}
