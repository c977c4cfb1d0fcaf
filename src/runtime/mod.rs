//! Python runtime detection and invocation.
//!
//! The bootstrapper talks to the runtime only through the [`Interpreter`]
//! trait, so its control flow can be exercised without a real Python.
//!
//! # Modules
//!
//! - [`locate`] - Finding `python3`/`python` on PATH
//! - [`mock`] - [`MockInterpreter`] for tests
//! - [`python`] - [`PythonInterpreter`], the process-backed implementation
//! - [`version`] - Version string extraction

pub mod locate;
pub mod mock;
pub mod python;
pub mod version;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use locate::{locate_python, resolve_tool_path};
pub use mock::MockInterpreter;
pub use python::PythonInterpreter;
pub use version::extract_version;

/// A successfully queried runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersion {
    /// Executable that answered the version query.
    pub executable: PathBuf,
    /// Trimmed version line, e.g. `Python 3.11.4`.
    pub raw: String,
    /// Dotted version, e.g. `3.11.4`.
    pub version: String,
}

/// Operations the bootstrapper needs from a language runtime.
pub trait Interpreter {
    /// Executable used for every invocation.
    fn executable(&self) -> &Path;

    /// Query the runtime version.
    ///
    /// Fails when the runtime cannot be spawned, exits non-zero, or prints
    /// no recognizable version.
    fn version(&self) -> Result<RuntimeVersion>;

    /// Whether `module` can be imported.
    fn can_import(&self, module: &str) -> bool;

    /// Install `packages` with a single installer invocation.
    fn install(&self, packages: &[&str]) -> Result<()>;
}
