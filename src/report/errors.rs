//! report::errors
//!
//! Error types for the report pipeline.
//!
//! # Design
//!
//! Every error here is unrecoverable at the point of detection: it
//! propagates straight to the process boundary, which reports it and exits
//! non-zero. There is no retry policy and no partial output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from assembling a distribution identity report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The os-release source could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path of the metadata source
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The `ID` value matched none of the supported families.
    #[error("unsupported distribution '{0}' (supported: centos, fedora, rhel)")]
    UnsupportedFamily(String),

    /// A required key was absent from the os-release data.
    #[error("key '{0}' not found in os-release data")]
    MissingKey(&'static str),

    /// A value lacked expected substructure (a parenthetical).
    #[error("no parenthetical found in '{0}'")]
    Format(String),

    /// The release is not a whole number the words conversion supports.
    #[error("release '{0}' is not a whole number in the range 0-99")]
    Range(String),
}
