//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and statement dispatch
//! - `section` - Section headers and quoted subsections
//! - `comment` - Comment text
//! - `key` - Variable names
//! - `value` - Variable values and their escape sequences

mod comment;
mod core;
mod key;
mod section;
mod value;

pub use core::Lexer;
