//! System memory queries.

use crate::error::{BootstrapError, Result};

use super::MemoryInfo;

/// Query total and available memory for this machine.
#[cfg(target_os = "linux")]
pub fn system_memory() -> Result<MemoryInfo> {
    let text = std::fs::read_to_string("/proc/meminfo").map_err(|e| {
        BootstrapError::ResourceUnavailable {
            resource: "memory".to_string(),
            message: e.to_string(),
        }
    })?;
    parse_meminfo(&text).ok_or_else(|| BootstrapError::ResourceUnavailable {
        resource: "memory".to_string(),
        message: "MemTotal missing from /proc/meminfo".to_string(),
    })
}

/// Query total memory for this machine. macOS has no cheap "available" figure.
#[cfg(target_os = "macos")]
pub fn system_memory() -> Result<MemoryInfo> {
    let mut total: u64 = 0;
    let mut len = std::mem::size_of::<u64>();
    // SAFETY: hw.memsize is a u64 and `len` describes exactly that buffer
    let rc = unsafe {
        libc::sysctlbyname(
            c"hw.memsize".as_ptr(),
            (&mut total as *mut u64).cast::<libc::c_void>(),
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(BootstrapError::ResourceUnavailable {
            resource: "memory".to_string(),
            message: std::io::Error::last_os_error().to_string(),
        });
    }
    Ok(MemoryInfo {
        total,
        available: None,
    })
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn system_memory() -> Result<MemoryInfo> {
    Err(BootstrapError::ResourceUnavailable {
        resource: "memory".to_string(),
        message: "unsupported platform".to_string(),
    })
}

/// Parse the contents of `/proc/meminfo`.
///
/// Values are reported in kB. Kernels older than 3.14 lack `MemAvailable`,
/// in which case `MemFree` stands in.
pub fn parse_meminfo(text: &str) -> Option<MemoryInfo> {
    let mut total = None;
    let mut available = None;
    let mut free = None;

    for line in text.lines() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(kib) = value.parse::<u64>() else {
            continue;
        };
        match key {
            "MemTotal:" => total = Some(kib * 1024),
            "MemAvailable:" => available = Some(kib * 1024),
            "MemFree:" => free = Some(kib * 1024),
            _ => {}
        }
    }

    total.map(|total| MemoryInfo {
        total,
        available: available.or(free),
    })
}
