//! Init command implementation.
//!
//! Creates an empty repository skeleton: the fixed directory set, a default
//! `config` and a `HEAD` pointing at the initial branch.

use std::path::PathBuf;
use std::time::Instant;

use gitcat_repo::InitOptions;
use tracing::debug;

use crate::commands::common::output_messages;
use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;

/// Directory initialized when none is given.
pub const DEFAULT_REPO_DIR: &str = ".git";

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Directory to initialize; [`DEFAULT_REPO_DIR`] when `None`.
    pub path: Option<PathBuf>,
    /// Branch `HEAD` refers to.
    pub initial_branch: Option<String>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let target_path = self.target_path();
        let options = InitOptions {
            default_branch: self.args.initial_branch.clone(),
        };

        gitcat_repo::init_with_options(&target_path, &options)?;

        println!("{} {}", output_messages::INITIALIZED_REPO, target_path.display());
        if self.args.verbose {
            eprintln!(
                "HEAD -> refs/heads/{} ({:.2}s)",
                options.branch(),
                start_time.elapsed().as_secs_f64()
            );
        }

        Ok(())
    }

    fn target_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPO_DIR))
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<()> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Create an empty repository"
    }

    fn help() -> &'static str {
        "Creates the repository directory structure, a default config file \
         and a HEAD that points at the initial branch. Existing files in the \
         target directory are kept."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    debug!(command = InitCommand::name(), "running command");
    InitCommand::new(args).execute()
}
