//! Error types and handling for bldr-saucer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Embedded bundle lookups
//! - [`fs`]: File system errors while materializing sources
//! - [`manifest`]: Vendoring manifest errors
//! - [`toolchain`]: Native toolchain and binary location errors

#[macro_use]
mod macros;

pub mod bundle;
pub mod fs;
pub mod manifest;
pub mod toolchain;

pub use bundle::{invalid_pattern, not_found, not_utf8};
pub use fs::{hash_mismatch, io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use manifest::{invalid as manifest_invalid, parse_failed as manifest_parse_failed};
pub use toolchain::{binary_not_found, command_failed, platform_not_supported, tool_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bldr-saucer operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SaucerError {
    // Bundle errors
    #[error("'{path}' is not in the embedded source bundle")]
    #[diagnostic(
        code(bldr_saucer::bundle::not_found),
        help("Run 'bldr-saucer-src list' to see the embedded paths")
    )]
    NotFound { path: String },

    #[error("'{path}' is not valid UTF-8: {reason}")]
    #[diagnostic(code(bldr_saucer::bundle::not_utf8))]
    NotUtf8 { path: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(bldr_saucer::bundle::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(bldr_saucer::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(bldr_saucer::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Hash mismatch for '{path}': expected {expected}, got {actual}")]
    #[diagnostic(
        code(bldr_saucer::fs::hash_mismatch),
        help("The file was modified while it was being written. Run the extraction again")
    )]
    HashMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(bldr_saucer::fs::io_error))]
    IoError { message: String },

    // Manifest errors
    #[error("Failed to parse vendoring manifest: {path}: {reason}")]
    #[diagnostic(code(bldr_saucer::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid vendoring manifest: {message}")]
    #[diagnostic(code(bldr_saucer::manifest::invalid))]
    ManifestInvalid { message: String },

    // Toolchain errors
    #[error("{tool} is required but not found")]
    #[diagnostic(
        code(bldr_saucer::toolchain::tool_not_found),
        help("Install {tool} and make sure it is on PATH")
    )]
    ToolNotFound { tool: String },

    #[error("Command '{command}' failed: {status}")]
    #[diagnostic(code(bldr_saucer::toolchain::command_failed))]
    CommandFailed { command: String, status: String },

    #[error("bldr-saucer binary not found for platform {platform}")]
    #[diagnostic(
        code(bldr_saucer::toolchain::binary_not_found),
        help("Try running with BLDR_SAUCER_FROM_SOURCE=true to build from source")
    )]
    BinaryNotFound { platform: String },

    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(bldr_saucer::toolchain::platform_not_supported),
        help("Supported platforms: darwin-arm64, darwin-x64, linux-x64, linux-arm64, win32-x64")
    )]
    PlatformNotSupported { platform: String },
}

impl From<std::io::Error> for SaucerError {
    fn from(err: std::io::Error) -> Self {
        SaucerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SaucerError {
    fn from(err: serde_yaml::Error) -> Self {
        SaucerError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SaucerError {
    fn from(err: serde_json::Error) -> Self {
        SaucerError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SaucerError>;
