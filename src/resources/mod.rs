//! Advisory memory and disk checks.
//!
//! Nothing is gated on these numbers. The thresholds only decide which
//! hint the user sees: a local AlphaFold run wants 16 GiB of RAM and its
//! model parameters want around 50 GiB of disk.

pub mod disk;
pub mod memory;

use std::path::Path;

use crate::error::{BootstrapError, Result};

pub use disk::free_space;
pub use memory::{parse_meminfo, system_memory};

/// Bytes in one GiB.
pub const GIB: u64 = 1024 * 1024 * 1024;

/// Total memory at or above which local AlphaFold is considered viable.
pub const MIN_MEMORY_BYTES: u64 = 16 * GIB;

/// Free disk space at or above which model downloads are considered safe.
pub const MIN_DISK_BYTES: u64 = 50 * GIB;

/// Memory figures in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total: u64,
    pub available: Option<u64>,
}

/// Whether a resource meets its advisory threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Sufficient,
    Limited,
}

/// Verdict for a machine with `total` bytes of memory.
pub fn memory_verdict(total: u64) -> Verdict {
    if total >= MIN_MEMORY_BYTES {
        Verdict::Sufficient
    } else {
        Verdict::Limited
    }
}

/// Verdict for `free` bytes of disk.
pub fn disk_verdict(free: u64) -> Verdict {
    if free >= MIN_DISK_BYTES {
        Verdict::Sufficient
    } else {
        Verdict::Limited
    }
}

/// Format a byte count as GiB with one decimal, e.g. `15.6`.
pub fn format_gib(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / GIB as f64)
}

/// Source of memory and disk figures.
pub trait ResourceProbe {
    /// Total and available memory.
    fn memory(&self) -> Result<MemoryInfo>;

    /// Free disk space on the filesystem holding `path`.
    fn disk_free(&self, path: &Path) -> Result<u64>;
}

/// Probe backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl ResourceProbe for SystemProbe {
    fn memory(&self) -> Result<MemoryInfo> {
        system_memory()
    }

    fn disk_free(&self, path: &Path) -> Result<u64> {
        free_space(path)
    }
}

/// Probe returning fixed figures; `None` makes the query fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedProbe {
    pub memory: Option<MemoryInfo>,
    pub disk_free: Option<u64>,
}

impl ResourceProbe for FixedProbe {
    fn memory(&self) -> Result<MemoryInfo> {
        self.memory.ok_or_else(|| BootstrapError::ResourceUnavailable {
            resource: "memory".to_string(),
            message: "not provided".to_string(),
        })
    }

    fn disk_free(&self, _path: &Path) -> Result<u64> {
        self.disk_free
            .ok_or_else(|| BootstrapError::ResourceUnavailable {
                resource: "disk space".to_string(),
                message: "not provided".to_string(),
            })
    }
}
