//! Version string parsing.

use std::sync::LazyLock;

use regex::Regex;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").expect("version regex is valid"));

/// Extract a dotted version from interpreter output.
///
/// Accepts `Python 3.11.4`, `Python 3.13.0rc1` and bare `3.12`.
pub fn extract_version(output: &str) -> Option<String> {
    RE_VERSION
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
