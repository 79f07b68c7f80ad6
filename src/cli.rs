//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Phone number inspection for call-platform hooks
#[derive(Parser)]
#[command(
    name = "phonenumber-hooks",
    version,
    about = "Phone number inspection for call-platform hooks",
    long_about = "Formats, classifies and validates phone numbers on demand, \
                  or for every call through hooks declared in the configuration file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run actions against a number: <action(s)> <number> [argument(s)]
    Lookup {
        /// Comma separated actions, the number, and optional key=value overrides
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Process a call event from stdin and print the resulting variables
    Session,
    /// List recognized action names
    Actions,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_collects_words() {
        let cli = Cli::parse_from([
            "phonenumber-hooks",
            "lookup",
            "format,get_number_type",
            "+442076792000",
            "format=NATIONAL",
        ]);
        match cli.command {
            Commands::Lookup { words } => {
                assert_eq!(words, ["format,get_number_type", "+442076792000", "format=NATIONAL"]);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["phonenumber-hooks", "check", "--config", "/tmp/x.toml", "-q"]);
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert!(cli.quiet);
    }
}
