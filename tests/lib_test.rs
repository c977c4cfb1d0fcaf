//! Library integration tests.

use enzyme_bootstrap::BootstrapError;

#[test]
fn error_types_are_public() {
    let err = BootstrapError::RuntimeNotFound {
        message: "no python3 on PATH".into(),
    };
    assert!(err.to_string().contains("no python3 on PATH"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> enzyme_bootstrap::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use enzyme_bootstrap::cli::{Cli, Commands};

    let cli = Cli::parse_from(["enzyme-bootstrap", "setup", "--skip-install"]);
    if let Some(Commands::Setup(args)) = cli.command {
        assert!(args.skip_install);
    } else {
        panic!("Expected Setup command");
    }
}

#[test]
fn bootstrap_runs_against_mocks() {
    use enzyme_bootstrap::bootstrap::{Bootstrapper, Stage};
    use enzyme_bootstrap::resources::{FixedProbe, MemoryInfo, GIB};
    use enzyme_bootstrap::runtime::MockInterpreter;
    use enzyme_bootstrap::ui::MockUI;

    let temp = tempfile::TempDir::new().unwrap();
    let python = MockInterpreter::new("3.12.1");
    let probe = FixedProbe {
        memory: Some(MemoryInfo {
            total: 8 * GIB,
            available: None,
        }),
        disk_free: Some(10 * GIB),
    };
    let mut ui = MockUI::new();

    let outcome = Bootstrapper::new(&python, &probe, temp.path()).run(&mut ui);

    assert!(outcome.success);
    assert_eq!(outcome.stage, Stage::Done);
    assert!(ui.has_warning("Limited RAM - consider using ColabFold"));
    assert!(ui.has_warning("Limited disk space - AlphaFold models can be large"));
    assert!(temp.path().join("viz").is_dir());
}

#[test]
fn required_packages_cover_workflow() {
    use enzyme_bootstrap::packages::REQUIRED_PACKAGES;

    let names: Vec<_> = REQUIRED_PACKAGES.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        [
            "numpy",
            "scipy",
            "pandas",
            "matplotlib",
            "seaborn",
            "biopython",
            "pyyaml",
            "requests",
            "tqdm"
        ]
    );
}
