//! gitcat-repo - Repository skeleton bootstrapper
//!
//! Creates the directories and files a new repository starts with. Nothing
//! here parses configuration; the `config` it writes is plain text that
//! `gitcat-lex` can tokenize.
//!
//! # Layout
//!
//! ```text
//! <dir>/
//! ├── HEAD            ref: refs/heads/<branch>
//! ├── config          [core] defaults
//! ├── hooks/
//! ├── info/
//! ├── objects/{info,pack}/
//! └── refs/{head,tags}/
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod init;

pub use error::{RepoError, RepoResult};
pub use init::{
    head_contents, init, init_with_options, InitOptions, DEFAULT_BRANCH, DEFAULT_CONFIG,
    SUBDIRECTORIES,
};
