//! Workspace scaffolding.
//!
//! Creates the working directories the design workflow writes into and
//! seeds `designs/` with the PETase example sequence. Running it again is
//! harmless: existing directories are kept and the example is never
//! overwritten.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::error::{BootstrapError, Result};

/// Directories ensured under the workspace root, in creation order.
pub const WORKSPACE_DIRS: &[&str] = &["designs", "models", "design_notes", "viz"];

/// Example sequence shipped with the workflow, relative to the root.
pub const EXAMPLE_SOURCE: &str = "examples/PETase_S238F_example.fasta";

/// Where the example is copied to, relative to the root.
pub const EXAMPLE_TARGET: &str = "designs/PETase_S238F.fasta";

/// What happened to the example file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleCopy {
    /// Source copied to the target.
    Copied,
    /// Target already present; left untouched.
    TargetExists,
    /// No source to copy from.
    SourceMissing,
}

/// Result of scaffolding a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Directories that did not exist before.
    pub created: Vec<PathBuf>,
    /// Directories that were already there.
    pub existing: Vec<PathBuf>,
    /// Outcome of the example copy.
    pub example: ExampleCopy,
}

/// Lays out the expected directory structure under a root.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    /// Scaffold under `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Absolute path of the example source.
    pub fn example_source(&self) -> PathBuf {
        self.root.join(EXAMPLE_SOURCE)
    }

    /// Absolute path of the example target.
    pub fn example_target(&self) -> PathBuf {
        self.root.join(EXAMPLE_TARGET)
    }

    /// Create the directories, then copy the example if appropriate.
    pub fn run(&self) -> Result<ScaffoldReport> {
        let mut created = Vec::new();
        let mut existing = Vec::new();

        for dir in WORKSPACE_DIRS {
            let path = self.root.join(dir);
            if path.is_dir() {
                existing.push(PathBuf::from(dir));
                continue;
            }
            fs::create_dir_all(&path).map_err(|source| BootstrapError::Scaffold {
                path: path.clone(),
                source,
            })?;
            tracing::debug!("Created {}", path.display());
            created.push(PathBuf::from(dir));
        }

        let example = self.copy_example()?;

        Ok(ScaffoldReport {
            created,
            existing,
            example,
        })
    }

    fn copy_example(&self) -> Result<ExampleCopy> {
        let source = self.example_source();
        let target = self.example_target();

        if !source.exists() {
            tracing::debug!("No example at {}", source.display());
            return Ok(ExampleCopy::SourceMissing);
        }
        if target.exists() {
            tracing::debug!("Keeping existing {}", target.display());
            return Ok(ExampleCopy::TargetExists);
        }

        copy_with_metadata(&source, &target).map_err(|source| BootstrapError::Scaffold {
            path: target.clone(),
            source,
        })?;
        Ok(ExampleCopy::Copied)
    }
}

/// Copy `from` to `to`, keeping permissions and access/modification times.
pub fn copy_with_metadata(from: &Path, to: &Path) -> io::Result<()> {
    // fs::copy carries permission bits but not timestamps
    fs::copy(from, to)?;

    let meta = fs::metadata(from)?;
    filetime::set_file_times(
        to,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn write_example(root: &Path, content: &str) {
        fs::create_dir_all(root.join("examples")).unwrap();
        fs::write(root.join(EXAMPLE_SOURCE), content).unwrap();
    }

    #[test]
    fn creates_all_directories() {
        let temp = TempDir::new().unwrap();
        let report = Scaffolder::new(temp.path()).run().unwrap();

        for dir in WORKSPACE_DIRS {
            assert!(temp.path().join(dir).is_dir(), "{dir} missing");
        }
        assert_eq!(report.created.len(), WORKSPACE_DIRS.len());
        assert!(report.existing.is_empty());
    }

    #[test]
    fn existing_directories_are_not_an_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("models")).unwrap();
        fs::write(temp.path().join("models/keep.txt"), "data").unwrap();

        let report = Scaffolder::new(temp.path()).run().unwrap();

        assert_eq!(report.existing, vec![PathBuf::from("models")]);
        assert_eq!(report.created.len(), WORKSPACE_DIRS.len() - 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("models/keep.txt")).unwrap(),
            "data"
        );
    }

    #[test]
    fn second_run_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(temp.path());
        scaffolder.run().unwrap();
        let report = scaffolder.run().unwrap();
        assert!(report.created.is_empty());
        assert_eq!(report.existing.len(), WORKSPACE_DIRS.len());
    }

    #[test]
    fn copies_example_when_target_absent() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path(), ">PETase_S238F\nMNFPRASRLMQAAVLGGLMAVSAAATA\n");

        let report = Scaffolder::new(temp.path()).run().unwrap();

        assert_eq!(report.example, ExampleCopy::Copied);
        assert_eq!(
            fs::read_to_string(temp.path().join(EXAMPLE_TARGET)).unwrap(),
            ">PETase_S238F\nMNFPRASRLMQAAVLGGLMAVSAAATA\n"
        );
    }

    #[test]
    fn missing_source_is_reported_not_failed() {
        let temp = TempDir::new().unwrap();
        let report = Scaffolder::new(temp.path()).run().unwrap();
        assert_eq!(report.example, ExampleCopy::SourceMissing);
        assert!(!temp.path().join(EXAMPLE_TARGET).exists());
    }

    #[test]
    fn existing_target_is_never_overwritten() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path(), "new content");
        fs::create_dir_all(temp.path().join("designs")).unwrap();
        fs::write(temp.path().join(EXAMPLE_TARGET), "edited by user").unwrap();

        let report = Scaffolder::new(temp.path()).run().unwrap();

        assert_eq!(report.example, ExampleCopy::TargetExists);
        assert_eq!(
            fs::read_to_string(temp.path().join(EXAMPLE_TARGET)).unwrap(),
            "edited by user"
        );
    }

    #[test]
    fn rerun_keeps_target_timestamp() {
        let temp = TempDir::new().unwrap();
        write_example(temp.path(), ">seq\nMK\n");
        let scaffolder = Scaffolder::new(temp.path());
        scaffolder.run().unwrap();
        let before = fs::metadata(scaffolder.example_target())
            .unwrap()
            .modified()
            .unwrap();

        fs::write(scaffolder.example_source(), ">seq\nMKV\n").unwrap();
        scaffolder.run().unwrap();

        let after = fs::metadata(scaffolder.example_target())
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(before, after);
        assert_eq!(
            fs::read_to_string(scaffolder.example_target()).unwrap(),
            ">seq\nMK\n"
        );
    }

    #[test]
    fn copy_preserves_modification_time() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.fasta");
        let to = temp.path().join("to.fasta");
        fs::write(&from, ">seq\n").unwrap();

        let past = SystemTime::now() - Duration::from_secs(86_400);
        filetime::set_file_mtime(&from, FileTime::from_system_time(past)).unwrap();

        copy_with_metadata(&from, &to).unwrap();

        let src = FileTime::from_last_modification_time(&fs::metadata(&from).unwrap());
        let dst = FileTime::from_last_modification_time(&fs::metadata(&to).unwrap());
        assert_eq!(src, dst);
        assert_eq!(dst, FileTime::from_system_time(past));
    }

    #[cfg(unix)]
    #[test]
    fn copy_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.fasta");
        let to = temp.path().join("to.fasta");
        fs::write(&from, ">seq\n").unwrap();
        fs::set_permissions(&from, fs::Permissions::from_mode(0o440)).unwrap();

        copy_with_metadata(&from, &to).unwrap();

        let mode = fs::metadata(&to).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o440);
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_root_is_a_scaffold_error() {
        use std::os::unix::fs::PermissionsExt;

        // root ignores permission bits
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("locked");
        fs::create_dir(&root).unwrap();
        fs::set_permissions(&root, fs::Permissions::from_mode(0o555)).unwrap();

        let result = Scaffolder::new(&root).run();

        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result, Err(BootstrapError::Scaffold { .. })));
    }
}
