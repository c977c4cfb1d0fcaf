//! Python interpreter backed by real process spawns.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};
use crate::shell::{display_command, execute, parse_system_path, CommandOptions};

use super::locate::{locate_python, PYTHON_CANDIDATES};
use super::version::extract_version;
use super::{Interpreter, RuntimeVersion};

/// A Python interpreter invoked through its executable.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    executable: PathBuf,
    workdir: Option<PathBuf>,
}

impl PythonInterpreter {
    /// Use a specific interpreter executable.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            workdir: None,
        }
    }

    /// Discover an interpreter on the system PATH.
    ///
    /// Falls back to the bare `python3` name when nothing is found so that
    /// the runtime check fails with a spawn error rather than here.
    pub fn discover() -> Self {
        match locate_python(&parse_system_path()) {
            Some(path) => {
                tracing::debug!("Found Python at {}", path.display());
                Self::new(path)
            }
            None => {
                tracing::debug!("No Python interpreter found on PATH");
                Self::new(PYTHON_CANDIDATES[0])
            }
        }
    }

    /// Run the installer from `dir`.
    ///
    /// Version and import probes always run from the caller's directory, so
    /// a workspace that does not exist yet cannot break them.
    pub fn with_workdir(mut self, dir: &Path) -> Self {
        self.workdir = Some(dir.to_path_buf());
        self
    }

    /// Directory the installer runs from, if set.
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    fn install_options(&self) -> CommandOptions {
        match &self.workdir {
            Some(dir) => CommandOptions::inherited().in_dir(dir),
            None => CommandOptions::inherited(),
        }
    }
}

impl Interpreter for PythonInterpreter {
    fn executable(&self) -> &Path {
        &self.executable
    }

    fn version(&self) -> Result<RuntimeVersion> {
        let program = self.executable.as_os_str();
        let result = execute(program, &["--version"], &CommandOptions::captured())
            .map_err(|e| BootstrapError::RuntimeNotFound {
                message: e.to_string(),
            })?;

        if !result.success {
            return Err(BootstrapError::RuntimeNotFound {
                message: format!(
                    "{} exited with code {:?}",
                    display_command(program, &["--version"]),
                    result.exit_code
                ),
            });
        }

        // Python 2 wrote its banner to stderr
        let raw = if result.stdout.trim().is_empty() {
            result.stderr.trim().to_string()
        } else {
            result.stdout.trim().to_string()
        };

        let version = extract_version(&raw)
            .ok_or_else(|| BootstrapError::RuntimeVersionUnparsable { output: raw.clone() })?;

        Ok(RuntimeVersion {
            executable: self.executable.clone(),
            raw,
            version,
        })
    }

    fn can_import(&self, module: &str) -> bool {
        let statement = format!("import {}", module);
        let args = [OsStr::new("-c"), OsStr::new(&statement)];
        execute(self.executable.as_os_str(), &args, &CommandOptions::captured())
        .map(|r| r.success)
        .unwrap_or(false)
    }

    fn install(&self, packages: &[&str]) -> Result<()> {
        let mut args = vec!["-m", "pip", "install"];
        args.extend_from_slice(packages);

        let program = self.executable.as_os_str();
        tracing::info!("Running {}", display_command(program, &args));

        let result = execute(program, &args, &self.install_options())?;
        if result.success {
            Ok(())
        } else {
            Err(BootstrapError::InstallFailed {
                packages: packages.join(", "),
                code: result.exit_code,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_interpreter_reports_runtime_not_found() {
        let python = PythonInterpreter::new("this-python-does-not-exist-12345");
        match python.version() {
            Err(BootstrapError::RuntimeNotFound { message }) => {
                assert!(message.contains("this-python-does-not-exist-12345 --version"));
                #[cfg(unix)]
                assert!(message.contains("No such file or directory"), "{message}");
            }
            other => panic!("expected RuntimeNotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_interpreter_cannot_import() {
        let python = PythonInterpreter::new("this-python-does-not-exist-12345");
        assert!(!python.can_import("numpy"));
    }

    #[test]
    fn missing_interpreter_install_is_error() {
        let python = PythonInterpreter::new("this-python-does-not-exist-12345");
        assert!(matches!(
            python.install(&["numpy"]),
            Err(BootstrapError::SpawnFailed { .. })
        ));
    }

    #[cfg(unix)]
    mod with_fake_python {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_python(dir: &Path, body: &str) -> PathBuf {
            let path = dir.join("python3");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn version_parses_stdout() {
            let temp = TempDir::new().unwrap();
            let exe = fake_python(temp.path(), "echo 'Python 3.11.4'");
            let version = PythonInterpreter::new(&exe).version().unwrap();
            assert_eq!(version.version, "3.11.4");
            assert_eq!(version.raw, "Python 3.11.4");
            assert_eq!(version.executable, exe);
        }

        #[test]
        fn version_falls_back_to_stderr() {
            let temp = TempDir::new().unwrap();
            let exe = fake_python(temp.path(), "echo 'Python 2.7.18' >&2");
            let version = PythonInterpreter::new(&exe).version().unwrap();
            assert_eq!(version.version, "2.7.18");
        }

        #[test]
        fn version_non_zero_exit_is_not_found() {
            let temp = TempDir::new().unwrap();
            let exe = fake_python(temp.path(), "exit 3");
            assert!(matches!(
                PythonInterpreter::new(&exe).version(),
                Err(BootstrapError::RuntimeNotFound { .. })
            ));
        }

        #[test]
        fn version_without_number_is_unparsable() {
            let temp = TempDir::new().unwrap();
            let exe = fake_python(temp.path(), "echo 'hello'");
            assert!(matches!(
                PythonInterpreter::new(&exe).version(),
                Err(BootstrapError::RuntimeVersionUnparsable { .. })
            ));
        }

        #[test]
        fn can_import_follows_exit_code() {
            let temp = TempDir::new().unwrap();
            let exe = fake_python(
                temp.path(),
                r#"case "$2" in "import numpy") exit 0 ;; *) exit 1 ;; esac"#,
            );
            let python = PythonInterpreter::new(&exe);
            assert!(python.can_import("numpy"));
            assert!(!python.can_import("scipy"));
        }

        #[test]
        fn install_passes_all_packages_in_one_call() {
            let temp = TempDir::new().unwrap();
            let log = temp.path().join("calls.log");
            let exe = fake_python(temp.path(), &format!("echo \"$@\" >> {}", log.display()));
            PythonInterpreter::new(&exe)
                .install(&["numpy", "scipy"])
                .unwrap();
            let calls = fs::read_to_string(&log).unwrap();
            assert_eq!(calls.trim(), "-m pip install numpy scipy");
        }

        #[test]
        fn install_failure_reports_packages() {
            let temp = TempDir::new().unwrap();
            let exe = fake_python(temp.path(), "exit 1");
            let err = PythonInterpreter::new(&exe)
                .install(&["numpy", "tqdm"])
                .unwrap_err();
            match err {
                BootstrapError::InstallFailed { packages, code } => {
                    assert_eq!(packages, "numpy, tqdm");
                    assert_eq!(code, Some(1));
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn workdir_is_used_for_install() {
            let temp = TempDir::new().unwrap();
            let work = TempDir::new().unwrap();
            let exe = fake_python(temp.path(), "pwd > cwd.txt");
            PythonInterpreter::new(&exe)
                .with_workdir(work.path())
                .install(&["numpy"])
                .unwrap();
            assert!(work.path().join("cwd.txt").exists());
        }

        #[test]
        fn probes_ignore_missing_workdir() {
            let temp = TempDir::new().unwrap();
            let exe = fake_python(temp.path(), "echo 'Python 3.12.1'");
            let python = PythonInterpreter::new(&exe)
                .with_workdir(&temp.path().join("not-created-yet"));
            assert_eq!(python.version().unwrap().version, "3.12.1");
            assert!(python.can_import("numpy"));
        }
    }
}
