//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal conditions (no runtime, failed install) are variants the
//!   bootstrapper turns into remediation output and a failing exit code
//! - Advisory conditions (resource queries) are reported as warnings
//! - No error escapes `main`; all of them end up as a console line

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The interpreter could not be spawned or exited non-zero.
    #[error("Python runtime not available: {message}")]
    RuntimeNotFound { message: String },

    /// The interpreter ran but printed something that is not a version.
    #[error("Could not parse Python version from output: {output}")]
    RuntimeVersionUnparsable { output: String },

    /// A process could not be started.
    #[error("Failed to run {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package installer exited non-zero.
    #[error("Failed to install {packages}: installer exited with code {code:?}")]
    InstallFailed { packages: String, code: Option<i32> },

    /// A memory or disk query is not supported or failed.
    #[error("Cannot query {resource}: {message}")]
    ResourceUnavailable { resource: String, message: String },

    /// Creating a workspace directory or copying the example failed.
    #[error("Failed to prepare {path}: {source}")]
    Scaffold {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
