//! Mock interpreter for testing.
//!
//! `MockInterpreter` implements [`Interpreter`] without spawning anything
//! and records the calls made against it.
//!
//! # Example
//!
//! ```
//! use enzyme_bootstrap::runtime::{Interpreter, MockInterpreter};
//!
//! let python = MockInterpreter::new("3.11.4").with_missing(&["Bio"]);
//! assert!(python.can_import("numpy"));
//! assert!(!python.can_import("Bio"));
//! assert_eq!(python.import_probes(), vec!["numpy", "Bio"]);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

use super::{Interpreter, RuntimeVersion};

/// Mock interpreter implementation for testing.
#[derive(Debug, Default)]
pub struct MockInterpreter {
    executable: PathBuf,
    version: Option<String>,
    missing: HashSet<String>,
    install_fails: bool,
    probes: RefCell<Vec<String>>,
    installs: RefCell<Vec<Vec<String>>>,
}

impl MockInterpreter {
    /// A working interpreter reporting `version` with every module importable.
    pub fn new(version: &str) -> Self {
        Self {
            executable: PathBuf::from("python3"),
            version: Some(version.to_string()),
            ..Default::default()
        }
    }

    /// An interpreter whose version query fails.
    pub fn absent() -> Self {
        Self {
            executable: PathBuf::from("python3"),
            ..Default::default()
        }
    }

    /// Mark modules as not importable.
    pub fn with_missing(mut self, modules: &[&str]) -> Self {
        self.missing.extend(modules.iter().map(|m| m.to_string()));
        self
    }

    /// Make every install call fail.
    pub fn failing_install(mut self) -> Self {
        self.install_fails = true;
        self
    }

    /// Modules probed, in call order.
    pub fn import_probes(&self) -> Vec<String> {
        self.probes.borrow().clone()
    }

    /// Package lists passed to `install`, one entry per call.
    pub fn installs(&self) -> Vec<Vec<String>> {
        self.installs.borrow().clone()
    }
}

impl Interpreter for MockInterpreter {
    fn executable(&self) -> &Path {
        &self.executable
    }

    fn version(&self) -> Result<RuntimeVersion> {
        match &self.version {
            Some(v) => Ok(RuntimeVersion {
                executable: self.executable.clone(),
                raw: format!("Python {}", v),
                version: v.clone(),
            }),
            None => Err(BootstrapError::RuntimeNotFound {
                message: "mock interpreter is absent".to_string(),
            }),
        }
    }

    fn can_import(&self, module: &str) -> bool {
        self.probes.borrow_mut().push(module.to_string());
        self.version.is_some() && !self.missing.contains(module)
    }

    fn install(&self, packages: &[&str]) -> Result<()> {
        self.installs
            .borrow_mut()
            .push(packages.iter().map(|p| p.to_string()).collect());

        if self.install_fails {
            return Err(BootstrapError::InstallFailed {
                packages: packages.join(", "),
                code: Some(1),
            });
        }

        Ok(())
    }
}
