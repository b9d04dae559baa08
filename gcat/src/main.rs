//! gcat - command-line front end for gitcat.
//!
//! `gcat init` lays out an empty repository and `gcat lex` dumps the tokens
//! of a git-style configuration file. Argument parsing uses clap; each
//! subcommand is dispatched to its handler in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    init::{run_init, InitArgs, InitCommand},
    lex::{run_lex, LexArgs, LexCommand},
    traits::CommandDescription,
};
use config::Config;
use error::{GcatError, Result};

/// gcat - repository bootstrapper and configuration lexer
#[derive(Parser, Debug)]
#[command(name = "gcat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Repository bootstrapper and configuration lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GCAT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GCAT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GCAT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gcat CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = InitCommand::description(), long_about = InitCommand::help())]
    Init(InitCli),

    #[command(about = LexCommand::description(), long_about = LexCommand::help())]
    Lex(LexCli),
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCli {
    /// Directory to initialize (default: .git)
    dir: Option<PathBuf>,

    /// Branch HEAD points at (default: from config, then master)
    #[arg(short = 'b', long)]
    initial_branch: Option<String>,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCli {
    /// Configuration file to read, or `-` for standard input
    file: Option<PathBuf>,

    /// Output format (default: from config, then text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Main entry point for the gcat CLI.
///
/// Errors are printed as `error: <message>` and turn into a failing exit
/// status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout only carries command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GcatError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Init(args) => execute_init(args, verbose, config),
        Commands::Lex(args) => execute_lex(args, config),
    }
}

/// Execute the init command.
fn execute_init(args: InitCli, verbose: bool, config: Config) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        path: args.dir,
        initial_branch: args.initial_branch.or(config.init.default_branch),
    };
    run_init(init_args)
}

/// Execute the lex command.
fn execute_lex(args: LexCli, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        input: args.file,
        format: resolve_format(args.format, &config)?,
    };
    run_lex(lex_args)
}

/// Picks the output format: command line first, then config, then text.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match config.lex.format.as_deref() {
        Some(name) => name.parse(),
        None => Ok(OutputFormat::default()),
    }
}
