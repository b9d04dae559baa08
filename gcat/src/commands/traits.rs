//! Command traits for the gcat CLI.
//!
//! Every subcommand implements these so construction, execution and help
//! text look the same across commands.

use crate::error::Result;

/// Standard command trait that all gcat commands implement.
///
/// Commands write their results to stdout themselves, so execution only
/// reports success or failure.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Human-readable descriptions for a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Longer help text explaining usage.
    fn help() -> &'static str;
}
