//! Free disk space queries.

use std::path::Path;

use crate::error::{BootstrapError, Result};

/// Bytes available to the current user on the filesystem holding `path`.
///
/// A path that does not exist yet is measured at its closest existing
/// ancestor, which is where it will be created.
pub fn free_space(path: &Path) -> Result<u64> {
    fs2::available_space(nearest_existing(path)).map_err(|e| BootstrapError::ResourceUnavailable {
        resource: "disk space".to_string(),
        message: format!("{}: {}", path.display(), e),
    })
}

fn nearest_existing(path: &Path) -> &Path {
    path.ancestors().find(|p| p.is_dir()).unwrap_or(path)
}
