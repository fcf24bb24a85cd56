//! Defines application-specific error types.
//!
//! Every failure in a listing run is terminal: usage errors are reported before
//! the filesystem is touched, target errors before the pipeline starts, and
//! metadata errors abort the run without producing a partial listing.

use std::path::Path;
use thiserror::Error;

/// Errors produced by `dirls`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Usage Errors ---
    /// A dash-prefixed argument is not one of the recognized flags.
    #[error("invalid option -- '{option}'")]
    Usage {
        /// The offending token, e.g. `-Z`.
        option: String,
    },

    /// More than one non-flag argument was given.
    #[error("unexpected argument '{argument}': only one directory may be listed")]
    UnexpectedArgument {
        /// The surplus argument.
        argument: String,
    },

    // --- Target Errors ---
    /// The target directory cannot be enumerated.
    #[error("cannot access '{path}': {source}")]
    Target {
        /// The target path as given or resolved.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The target exists but is not a directory.
    #[error("cannot list '{path}': Not a directory")]
    NotADirectory {
        /// The target path.
        path: String,
    },

    // --- Metadata Errors ---
    /// A per-entry metadata query failed after enumeration succeeded.
    #[error("cannot read metadata of '{path}': {source}")]
    Metadata {
        /// The entry path that could not be queried.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Output Errors ---
    /// Writing the finished listing failed.
    #[error("I/O error writing listing: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error is an argument problem rather than a runtime one.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. } | Error::UnexpectedArgument { .. })
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Metadata` with path context.
pub fn metadata_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Metadata {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::Target` with path context.
pub fn target_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Target {
        path: path.as_ref().display().to_string(),
        source,
    }
}
