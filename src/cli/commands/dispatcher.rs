//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::bootstrap::BootstrapOutcome;
use crate::cli::args::{Cli, Commands, SetupArgs};
use crate::error::Result;
use crate::runtime::PythonInterpreter;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

impl From<&BootstrapOutcome> for CommandResult {
    fn from(outcome: &BootstrapOutcome) -> Self {
        if outcome.success {
            Self::success()
        } else {
            Self::failure(outcome.exit_code())
        }
    }
}

/// Anchor a relative `--python` path to the current directory.
///
/// Bare names such as `python3.12` are left alone for PATH lookup.
fn resolve_python_arg(path: &Path) -> PathBuf {
    if path.components().count() > 1 && path.is_relative() {
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.to_path_buf()
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    python: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            python: None,
        }
    }

    /// Use a specific interpreter instead of searching PATH.
    pub fn with_python(mut self, python: Option<PathBuf>) -> Self {
        self.python = python;
        self
    }

    fn interpreter(&self) -> PythonInterpreter {
        let interpreter = match &self.python {
            Some(path) => PythonInterpreter::new(resolve_python_arg(path)),
            None => PythonInterpreter::discover(),
        };
        if self.project_root.is_dir() {
            interpreter.with_workdir(&self.project_root)
        } else {
            interpreter
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Setup(args)) => {
                let cmd = super::setup::SetupCommand::new(
                    &self.project_root,
                    self.interpreter(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Check(_)) => {
                let cmd = super::check::CheckCommand::new(&self.project_root, self.interpreter());
                cmd.execute(ui)
            }
            None => {
                // Default to setup with default args
                let cmd = super::setup::SetupCommand::new(
                    &self.project_root,
                    self.interpreter(),
                    SetupArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
