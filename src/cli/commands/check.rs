//! Check command implementation.
//!
//! `enzyme-bootstrap check` reports the runtime, machine resources and
//! package status. It never installs anything and never writes to the
//! workspace.

use std::path::{Path, PathBuf};

use crate::bootstrap::{Bootstrapper, Mode};
use crate::error::Result;
use crate::resources::SystemProbe;
use crate::runtime::PythonInterpreter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    interpreter: PythonInterpreter,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, interpreter: PythonInterpreter) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            interpreter,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = SystemProbe;
        let outcome = Bootstrapper::new(&self.interpreter, &probe, &self.project_root)
            .with_mode(Mode::Check)
            .run(ui);
        Ok(CommandResult::from(&outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn check_without_python_fails() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(
            temp.path(),
            PythonInterpreter::new("this-python-does-not-exist-12345"),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Python is required but not found!"));
    }
}
