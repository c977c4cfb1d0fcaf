//! Bootstrap stages.

use std::fmt;

/// The stages a run passes through, in order.
///
/// Only `RuntimeCheck` and `DependencyInstall` can end a run early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    RuntimeCheck,
    ResourceReport,
    DependencyAudit,
    DependencyInstall,
    Scaffold,
    Done,
}

impl Stage {
    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::RuntimeCheck => "runtime-check",
            Self::ResourceReport => "resource-report",
            Self::DependencyAudit => "dependency-audit",
            Self::DependencyInstall => "dependency-install",
            Self::Scaffold => "scaffold",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
