//! enzyme-bootstrap - local environment setup for the open enzyme design workflow.
//!
//! The tool checks that a Python interpreter is available, reports whether
//! the machine has enough memory and disk for local structure prediction,
//! installs the workflow's Python packages, and scaffolds the working
//! directories the rest of the workflow expects.
//!
//! # Modules
//!
//! - [`bootstrap`] - The staged setup run
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`packages`] - Required packages and the import audit
//! - [`resources`] - Memory and disk probes with their thresholds
//! - [`runtime`] - Python interpreter discovery, probing and installs
//! - [`shell`] - Process execution and platform helpers
//! - [`ui`] - Spinners, themes and terminal output
//! - [`workspace`] - Directory scaffolding and the example input copy
//!
//! # Example
//!
//! ```
//! use enzyme_bootstrap::bootstrap::{Bootstrapper, Mode};
//! use enzyme_bootstrap::resources::FixedProbe;
//! use enzyme_bootstrap::runtime::MockInterpreter;
//! use enzyme_bootstrap::ui::MockUI;
//!
//! let python = MockInterpreter::new("3.11.4").with_missing(&["tqdm"]);
//! let probe = FixedProbe::default();
//! let mut ui = MockUI::new();
//!
//! let outcome = Bootstrapper::new(&python, &probe, std::path::Path::new("."))
//!     .with_mode(Mode::Check)
//!     .run(&mut ui);
//!
//! assert!(!outcome.success);
//! assert_eq!(outcome.missing, vec!["tqdm"]);
//! ```

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod packages;
pub mod resources;
pub mod runtime;
pub mod shell;
pub mod ui;
pub mod workspace;

pub use error::{BootstrapError, Result};
