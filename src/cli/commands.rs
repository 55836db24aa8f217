//! CLI command definitions using clap.
//!
//! With no subcommand polyrun starts the interactive command reader;
//! `run` executes a script of commands from a file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// polyrun - models which programs can run through interpreter and translator chains
#[derive(Parser, Debug)]
#[command(name = "polyrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a script of commands from a file, one per line
    Run {
        /// Path to the command script
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (interactive mode)
        let cli = Cli::try_parse_from(["polyrun"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["polyrun", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["polyrun", "-c", "/path/to/polyrun.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/polyrun.yml")));
    }

    #[test]
    fn test_run_command() {
        let cli = Cli::try_parse_from(["polyrun", "run", "session.txt"]).unwrap();
        match cli.command {
            Some(Commands::Run { file }) => {
                assert_eq!(file, PathBuf::from("session.txt"));
            }
            _ => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_run_requires_file() {
        assert!(Cli::try_parse_from(["polyrun", "run"]).is_err());
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["polyrun", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
