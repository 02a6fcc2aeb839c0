// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for linkconf operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with linkconf Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during linkconf operations.
///
/// Namespace assembly itself is total and infallible; these cover the
/// fallible edges around it (loading configs, writing output).
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Generation config not found at specified path
    #[error("linkconf.yaml not found at {0:?}")]
    #[diagnostic(
        code(linkconf::not_found_at_path),
        help("Create a config with 'linkconf init' or specify a path with -f")
    )]
    NotFoundAtPath(PathBuf),

    /// Invalid YAML in config file
    #[error("Invalid linkconf.yaml file: {error}")]
    #[diagnostic(
        code(linkconf::invalid_yaml),
        help("Check YAML syntax and ensure 'api: linkconf/v0' is present")
    )]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(linkconf::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write rendered output
    #[error("Failed to write output: {path:?}")]
    #[diagnostic(code(linkconf::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(linkconf::validation_failed))]
    ValidationFailed(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(linkconf::io_error))]
    Io(#[from] std::io::Error),
}
