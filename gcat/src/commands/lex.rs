//! Lex command implementation.
//!
//! Reads configuration text from a file or stdin and prints the token
//! stream the lexer produces.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use gitcat_lex::{Token, TokenStream};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{error_messages, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{GcatError, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// File to read; `None` or `-` reads standard input.
    pub input: Option<PathBuf>,
    /// How tokens are printed.
    pub format: OutputFormat,
}

/// One token as it appears in JSON output.
#[derive(Debug, Serialize, PartialEq)]
struct TokenRecord<'a> {
    line: u32,
    column: u32,
    kind: &'static str,
    value: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let position = token.position();
        Self {
            line: position.line,
            column: position.column,
            kind: token.kind().as_str(),
            value: token.value(),
        }
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Execute the command, writing to standard output.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Execute the command, writing tokens to `out`.
    pub fn run_with(&self, out: &mut impl Write) -> Result<()> {
        let source = self.read_source()?;
        let tokens = gitcat_lex::lex(&source)?;
        debug!(tokens = tokens.len(), format = %self.args.format, "lexed input");
        write_tokens(out, &tokens, self.args.format)
    }

    fn read_source(&self) -> Result<String> {
        match self.args.input.as_deref() {
            None => read_stdin(),
            Some(path) if path == Path::new(STDIN_PATH) => read_stdin(),
            Some(path) => read_file(path),
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GcatError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(GcatError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Writes `tokens` to `out` in the requested format.
pub fn write_tokens(out: &mut impl Write, tokens: &TokenStream, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

impl Command for LexCommand {
    type Args = LexArgs;
    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<()> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl CommandDescription for LexCommand {
    fn description() -> &'static str {
        "Print the tokens of a configuration file"
    }

    fn help() -> &'static str {
        "Tokenizes a git-style configuration file (or standard input) and \
         prints one token per line, or a JSON array with --format json. \
         Malformed input is reported with its line and column."
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<()> {
    debug!(command = LexCommand::name(), "running command");
    LexCommand::new(args).execute()
}
