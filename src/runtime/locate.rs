//! Interpreter discovery on PATH.

use std::path::{Path, PathBuf};

use crate::shell::executable_name;

/// Interpreter names tried in order.
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does not shell
/// out to `which`, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Find a Python interpreter among `path_entries`.
///
/// Tries `python3` first so that systems where `python` is still Python 2
/// pick the right one.
pub fn locate_python(path_entries: &[PathBuf]) -> Option<PathBuf> {
    PYTHON_CANDIDATES
        .iter()
        .find_map(|stem| resolve_tool_path(&executable_name(stem), path_entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn resolve_tool_path_none_for_empty_path() {
        assert!(resolve_tool_path("python3", &[]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_finds_executable() {
        let temp = TempDir::new().unwrap();
        let expected = make_executable(temp.path(), "python3");
        let found = resolve_tool_path("python3", &[temp.path().to_path_buf()]);
        assert_eq!(found, Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("python3"), "not runnable").unwrap();
        assert!(resolve_tool_path("python3", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn locate_python_prefers_python3() {
        let temp = TempDir::new().unwrap();
        make_executable(temp.path(), "python");
        let expected = make_executable(temp.path(), "python3");
        assert_eq!(locate_python(&[temp.path().to_path_buf()]), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn locate_python_falls_back_to_python() {
        let temp = TempDir::new().unwrap();
        let expected = make_executable(temp.path(), "python");
        assert_eq!(locate_python(&[temp.path().to_path_buf()]), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn locate_python_respects_path_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = make_executable(first.path(), "python3");
        make_executable(second.path(), "python3");
        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(locate_python(&entries), Some(expected));
    }
}
