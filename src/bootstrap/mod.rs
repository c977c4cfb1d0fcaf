//! The environment bootstrapper.
//!
//! A run is a straight line through [`Stage`]s:
//!
//! ```text
//! RuntimeCheck → ResourceReport → DependencyAudit → (DependencyInstall)? → Scaffold → Done
//! ```
//!
//! A missing runtime stops the run before anything else happens, and a
//! failed install stops it before the workspace is touched. Every other
//! stage reports what it found and moves on. Failures never escape as
//! errors: they become UI output and a failed [`BootstrapOutcome`].

pub mod stage;

use std::path::{Path, PathBuf};

use crate::packages::{
    audit_packages, Package, PackageStatus, FALLBACK_INSTALL_COMMAND, REQUIRED_PACKAGES,
};
use crate::resources::{disk_verdict, format_gib, memory_verdict, ResourceProbe, Verdict};
use crate::runtime::{Interpreter, RuntimeVersion};
use crate::shell::display_command;
use crate::ui::UserInterface;
use crate::workspace::{ExampleCopy, ScaffoldReport, Scaffolder, EXAMPLE_SOURCE, EXAMPLE_TARGET};

pub use stage::Stage;

/// Banner shown at the top of every run.
pub const WORKFLOW_TITLE: &str = "Next-Gen Open Enzyme Design Workflow";

/// Printed when no usable Python is found.
pub const PYTHON_INSTALL_STEPS: &[&str] = &[
    "Download Python from: https://www.python.org/downloads/",
    "Install with 'Add to PATH' option checked",
    "Restart your terminal/PowerShell",
    "Run this script again",
];

/// Printed after a successful setup.
pub const NEXT_STEPS: &[&str] = &[
    "Install AlphaFold (see docs/AlphaFold_setup.md)",
    "Install Rosetta (see docs/Rosetta_setup.md)",
    "Run test: python scripts/run_alphafold.py designs/PETase_S238F.fasta",
];

/// What a run is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full setup. With `install: false`, missing packages are only reported.
    Setup { install: bool },
    /// Report only: no installs, no filesystem changes.
    Check,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Setup { install: true }
    }
}

/// Result of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOutcome {
    /// Whether the run succeeded.
    pub success: bool,
    /// Last stage reached. For a failed run, the stage that failed.
    pub stage: Stage,
    /// The runtime, if the runtime check passed.
    pub runtime: Option<RuntimeVersion>,
    /// Packages the audit found missing.
    pub missing: Vec<&'static str>,
    /// Whether the installer ran and succeeded.
    pub installed: bool,
    /// What scaffolding did, if it ran.
    pub scaffold: Option<ScaffoldReport>,
}

impl BootstrapOutcome {
    fn new() -> Self {
        Self {
            success: false,
            stage: Stage::RuntimeCheck,
            runtime: None,
            missing: Vec::new(),
            installed: false,
            scaffold: None,
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}

/// Drives a bootstrap run against a workspace root.
pub struct Bootstrapper<'a> {
    interpreter: &'a dyn Interpreter,
    probe: &'a dyn ResourceProbe,
    root: PathBuf,
    packages: &'a [Package],
    mode: Mode,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper for the workspace at `root`.
    pub fn new(
        interpreter: &'a dyn Interpreter,
        probe: &'a dyn ResourceProbe,
        root: &Path,
    ) -> Self {
        Self {
            interpreter,
            probe,
            root: root.to_path_buf(),
            packages: REQUIRED_PACKAGES,
            mode: Mode::default(),
        }
    }

    /// Set what the run is allowed to do.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Audit a different package list.
    pub fn with_packages(mut self, packages: &'a [Package]) -> Self {
        self.packages = packages;
        self
    }

    /// Run every stage in order.
    pub fn run(&self, ui: &mut dyn UserInterface) -> BootstrapOutcome {
        let mut outcome = BootstrapOutcome::new();

        ui.show_header(WORKFLOW_TITLE);
        ui.message(match self.mode {
            Mode::Setup { .. } => "Local Test Environment Setup",
            Mode::Check => "Environment Check",
        });

        self.enter(&mut outcome, Stage::RuntimeCheck);
        match self.check_runtime(ui) {
            Some(runtime) => outcome.runtime = Some(runtime),
            None => return outcome,
        }

        self.enter(&mut outcome, Stage::ResourceReport);
        self.report_resources(ui);

        self.enter(&mut outcome, Stage::DependencyAudit);
        outcome.missing = self.audit(ui);

        if self.mode == Mode::Check {
            return self.finish_check(ui, outcome);
        }

        if outcome.missing.is_empty() {
            ui.success("All dependencies are installed!");
        } else if self.mode == (Mode::Setup { install: false }) {
            self.report_skipped_install(ui, &outcome.missing);
        } else {
            self.enter(&mut outcome, Stage::DependencyInstall);
            if !self.install(ui, &outcome.missing) {
                return outcome;
            }
            outcome.installed = true;
        }

        self.enter(&mut outcome, Stage::Scaffold);
        match self.scaffold(ui) {
            Some(report) => outcome.scaffold = Some(report),
            None => return outcome,
        }

        self.enter(&mut outcome, Stage::Done);
        outcome.success = true;
        ui.success("Setup complete!");
        ui.show_steps("Next Steps:", NEXT_STEPS);
        outcome
    }

    fn enter(&self, outcome: &mut BootstrapOutcome, stage: Stage) {
        tracing::debug!("Entering stage {}", stage);
        outcome.stage = stage;
    }

    fn check_runtime(&self, ui: &mut dyn UserInterface) -> Option<RuntimeVersion> {
        ui.show_section("Checking Python installation...");

        match self.interpreter.version() {
            Ok(runtime) => {
                tracing::info!(
                    "Python {} at {}",
                    runtime.version,
                    runtime.executable.display()
                );
                ui.success(&format!("Python found: {}", runtime.raw));
                ui.detail(&format!("Interpreter: {}", runtime.executable.display()));
                Some(runtime)
            }
            Err(e) => {
                tracing::warn!("Runtime check failed: {}", e);
                ui.error(&format!("Python not found or not accessible: {}", e));
                ui.error("Python is required but not found!");
                ui.show_steps("Installation Instructions:", PYTHON_INSTALL_STEPS);
                None
            }
        }
    }

    fn report_resources(&self, ui: &mut dyn UserInterface) {
        ui.show_section("Checking system resources...");

        match self.probe.memory() {
            Ok(memory) => {
                let line = match memory.available {
                    Some(available) => format!(
                        "RAM: {} GB total, {} GB available",
                        format_gib(memory.total),
                        format_gib(available)
                    ),
                    None => format!("RAM: {} GB total", format_gib(memory.total)),
                };
                ui.message(&line);
                match memory_verdict(memory.total) {
                    Verdict::Sufficient => ui.success("Sufficient RAM for local AlphaFold"),
                    Verdict::Limited => ui.warning("Limited RAM - consider using ColabFold"),
                }
            }
            Err(e) => {
                tracing::debug!("Memory query failed: {}", e);
                ui.warning("Cannot check memory");
                ui.detail(&e.to_string());
            }
        }

        match self.probe.disk_free(&self.root) {
            Ok(free) => {
                ui.message(&format!("Disk: {} GB available", format_gib(free)));
                match disk_verdict(free) {
                    Verdict::Sufficient => ui.success("Sufficient disk space"),
                    Verdict::Limited => {
                        ui.warning("Limited disk space - AlphaFold models can be large")
                    }
                }
            }
            Err(e) => {
                tracing::debug!("Disk query failed: {}", e);
                ui.warning("Cannot check disk space");
                ui.detail(&e.to_string());
            }
        }
    }

    fn audit(&self, ui: &mut dyn UserInterface) -> Vec<&'static str> {
        ui.show_section("Checking dependencies...");

        let report = audit_packages(self.interpreter, self.packages, |package| {
            let mut spinner = ui.start_spinner(package.name);
            move |status: PackageStatus| {
                if status.present {
                    spinner.finish_success(status.package.name);
                } else {
                    spinner.finish_error(&format!("{} - MISSING", status.package.name));
                }
            }
        });

        let missing = report.missing();
        tracing::info!(
            "{} of {} packages missing",
            missing.len(),
            self.packages.len()
        );
        missing
    }

    fn install(&self, ui: &mut dyn UserInterface, missing: &[&str]) -> bool {
        ui.show_section(&format!(
            "Installing missing packages: {}",
            missing.join(", ")
        ));

        match self.interpreter.install(missing) {
            Ok(()) => {
                ui.success("Dependencies installed successfully!");
                true
            }
            Err(e) => {
                tracing::warn!("Install failed: {}", e);
                ui.error(&format!("Failed to install dependencies: {}", e));
                ui.error("Failed to install dependencies!");
                ui.show_hint(&format!("Try running: {}", FALLBACK_INSTALL_COMMAND));
                false
            }
        }
    }

    fn report_skipped_install(&self, ui: &mut dyn UserInterface, missing: &[&str]) {
        ui.warning(&format!(
            "Skipping installation of missing packages: {}",
            missing.join(", ")
        ));
        ui.show_hint(&format!("Install them with: {}", self.install_command(missing)));
    }

    fn install_command(&self, missing: &[&str]) -> String {
        let mut args = vec!["-m", "pip", "install"];
        args.extend_from_slice(missing);
        display_command(self.interpreter.executable().as_os_str(), &args)
    }

    fn scaffold(&self, ui: &mut dyn UserInterface) -> Option<ScaffoldReport> {
        ui.show_section("Setting up test environment...");

        let report = match Scaffolder::new(&self.root).run() {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("Scaffolding failed: {}", e);
                ui.error(&format!("Failed to set up test environment: {}", e));
                return None;
            }
        };

        for dir in &report.created {
            ui.success(&format!("Created directory: {}", dir.display()));
        }
        for dir in &report.existing {
            ui.success(&format!("Directory exists: {}", dir.display()));
        }

        match report.example {
            ExampleCopy::Copied => {
                ui.success(&format!("Copied example file: {}", EXAMPLE_TARGET));
            }
            ExampleCopy::TargetExists => {
                ui.detail(&format!("Keeping existing {}", EXAMPLE_TARGET));
            }
            ExampleCopy::SourceMissing => {
                ui.detail(&format!("No example file at {}", EXAMPLE_SOURCE));
            }
        }

        ui.success("Test environment ready!");
        Some(report)
    }

    fn finish_check(
        &self,
        ui: &mut dyn UserInterface,
        mut outcome: BootstrapOutcome,
    ) -> BootstrapOutcome {
        if outcome.missing.is_empty() {
            self.enter(&mut outcome, Stage::Done);
            outcome.success = true;
            ui.success("Environment ready!");
        } else {
            ui.error(&format!(
                "{} missing package(s): {}",
                outcome.missing.len(),
                outcome.missing.join(", ")
            ));
            ui.show_hint("Run `enzyme-bootstrap setup` to install them");
        }
        outcome
    }
}
