//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Local environment setup for the open enzyme design workflow.
#[derive(Debug, Parser)]
#[command(name = "enzyme-bootstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the workflow checkout (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter to use (default: python3 or python on PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// No output except errors
    #[arg(long, global = true, conflicts_with_all = ["verbose", "quiet"])]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check and install dependencies, then scaffold the workspace (default)
    Setup(SetupArgs),

    /// Report runtime, resources and dependencies without changing anything
    Check(CheckArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Report missing packages instead of installing them
    #[arg(long)]
    pub skip_install: bool,
}

/// Arguments for the `check` command. It takes only the global flags.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_has_no_command() {
        let cli = Cli::parse_from(["enzyme-bootstrap"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.python.is_none());
    }

    #[test]
    fn setup_skip_install() {
        let cli = Cli::parse_from(["enzyme-bootstrap", "setup", "--skip-install"]);
        match cli.command {
            Some(Commands::Setup(args)) => assert!(args.skip_install),
            other => panic!("Expected Setup command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "enzyme-bootstrap",
            "check",
            "--python",
            "/opt/python/bin/python3",
            "--project",
            "/work",
            "--quiet",
        ]);
        assert!(matches!(cli.command, Some(Commands::Check(_))));
        assert_eq!(cli.python, Some(PathBuf::from("/opt/python/bin/python3")));
        assert_eq!(cli.project, Some(PathBuf::from("/work")));
        assert!(cli.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["enzyme-bootstrap", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn silent_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["enzyme-bootstrap", "--silent", "--quiet"]).is_err());
        let cli = Cli::parse_from(["enzyme-bootstrap", "check", "--silent"]);
        assert!(cli.silent);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
