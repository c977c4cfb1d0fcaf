//! Setup command implementation.
//!
//! `enzyme-bootstrap setup` (also the default with no subcommand) runs the
//! full bootstrap: runtime check, resource report, dependency audit and
//! install, then workspace scaffolding.

use std::path::{Path, PathBuf};

use crate::bootstrap::{Bootstrapper, Mode};
use crate::cli::args::SetupArgs;
use crate::error::Result;
use crate::resources::SystemProbe;
use crate::runtime::PythonInterpreter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    interpreter: PythonInterpreter,
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, interpreter: PythonInterpreter, args: SetupArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            interpreter,
            args,
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = SystemProbe;
        let mode = Mode::Setup {
            install: !self.args.skip_install,
        };

        let outcome = Bootstrapper::new(&self.interpreter, &probe, &self.project_root)
            .with_mode(mode)
            .run(ui);

        tracing::debug!(
            "Setup finished at stage {} (success: {})",
            outcome.stage,
            outcome.success
        );
        Ok(CommandResult::from(&outcome))
    }
}
