//! Required Python packages and the dependency audit.
//!
//! "Installed" means "importable": the audit never looks at versions.

pub mod audit;

pub use audit::{audit_packages, AuditReport, PackageStatus};

/// A package the workflow depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    /// Distribution name passed to the installer.
    pub name: &'static str,
    /// Module name used for the import probe.
    pub module: &'static str,
}

impl Package {
    /// A package whose import name equals its distribution name.
    pub const fn same(name: &'static str) -> Self {
        Self { name, module: name }
    }

    /// A package imported under a different name.
    pub const fn aliased(name: &'static str, module: &'static str) -> Self {
        Self { name, module }
    }
}

/// Packages checked on every run, in reporting order.
pub const REQUIRED_PACKAGES: &[Package] = &[
    Package::same("numpy"),
    Package::same("scipy"),
    Package::same("pandas"),
    Package::same("matplotlib"),
    Package::same("seaborn"),
    Package::aliased("biopython", "Bio"),
    Package::aliased("pyyaml", "yaml"),
    Package::same("requests"),
    Package::same("tqdm"),
];

/// Suggested command when automatic installation fails.
pub const FALLBACK_INSTALL_COMMAND: &str = "pip install -r requirements.txt";
