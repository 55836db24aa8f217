//! CLI module for polyrun - command-line interface and the interactive
//! command reader.

pub mod commands;
pub mod repl;

pub use commands::Cli;
