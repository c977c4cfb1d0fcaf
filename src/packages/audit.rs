//! Dependency audit.

use crate::runtime::Interpreter;

use super::Package;

/// Outcome of probing one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageStatus {
    /// The package probed.
    pub package: Package,
    /// Whether its module imported.
    pub present: bool,
}

/// Result of auditing a package list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Every package probed, in list order.
    pub statuses: Vec<PackageStatus>,
}

impl AuditReport {
    /// Distribution names of missing packages, in list order.
    pub fn missing(&self) -> Vec<&'static str> {
        self.statuses
            .iter()
            .filter(|s| !s.present)
            .map(|s| s.package.name)
            .collect()
    }
}

/// Probe every package in `packages`.
///
/// A failed import is recorded and the audit moves on; it never stops
/// early. `on_start` runs right before each probe and returns the callback
/// that receives that probe's result, so progress output can span the
/// import spawn.
pub fn audit_packages<S, D>(
    interpreter: &dyn Interpreter,
    packages: &[Package],
    mut on_start: S,
) -> AuditReport
where
    S: FnMut(&Package) -> D,
    D: FnOnce(PackageStatus),
{
    let mut report = AuditReport::default();
    for package in packages {
        let on_done = on_start(package);
        let present = interpreter.can_import(package.module);
        tracing::debug!(
            "Import probe {} ({}): {}",
            package.name,
            package.module,
            if present { "present" } else { "missing" }
        );
        let status = PackageStatus {
            package: *package,
            present,
        };
        on_done(status);
        report.statuses.push(status);
    }
    report
}
