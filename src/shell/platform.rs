//! Platform and environment detection.

use std::path::PathBuf;

/// Check if running in a CI environment.
///
/// Used in `main()` to pick the non-interactive UI, which prints plain
/// lines instead of spinners. Checks common CI environment variables:
/// `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Name of an executable on this platform (`python` → `python.exe` on Windows).
pub fn executable_name(stem: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", stem)
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executable_name_matches_platform() {
        let name = executable_name("python3");
        if cfg!(windows) {
            assert_eq!(name, "python3.exe");
        } else {
            assert_eq!(name, "python3");
        }
    }

    #[test]
    fn parse_system_path_returns_entries() {
        // PATH is set in every test harness we run under
        assert!(!parse_system_path().is_empty());
    }
}
