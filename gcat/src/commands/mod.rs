//! Command modules for the gcat CLI.
//!
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod init;
pub mod lex;
