//! report::metadata
//!
//! Reading and key lookup for the os-release metadata source.
//!
//! # Design
//!
//! The source is read once per invocation into an ordered sequence of
//! trimmed non-empty lines, each expected to be `KEY=VALUE` or
//! `KEY="VALUE"`. Lookup scans in order and the first matching key wins.
//! This module is the only accessor for raw metadata - derivers never parse
//! lines themselves.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ReportError;

/// Well-known path of the os-release metadata source.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Environment variable overriding the metadata source path.
///
/// This is the testability seam: integration tests point it at a fixture
/// file instead of the host's real os-release.
pub const OS_RELEASE_ENV: &str = "DISTID_OS_RELEASE";

/// Resolve the metadata source path, honoring the environment override.
pub fn source_path() -> PathBuf {
    std::env::var_os(OS_RELEASE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(OS_RELEASE_PATH))
}

/// An immutable snapshot of the os-release metadata lines.
#[derive(Debug, Clone)]
pub struct OsMetadata {
    lines: Vec<String>,
}

impl OsMetadata {
    /// Load the metadata source from `path`.
    ///
    /// Fails with [`ReportError::Io`] if the source cannot be opened or
    /// read. The file handle is closed before this returns; no resource
    /// outlives the load.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }

    /// Parse metadata from raw file contents.
    ///
    /// Lines are trimmed and empty lines discarded; order is preserved.
    pub fn parse(contents: &str) -> Self {
        let lines = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { lines }
    }

    /// Look up the value for `key`.
    ///
    /// Scans for the first line beginning with `KEY=`, strips the prefix,
    /// and strips one matching pair of surrounding single or double quotes
    /// from the remainder. Returns `None` if no line matches - callers can
    /// distinguish an absent key from an empty value.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        for line in &self.lines {
            if let Some(rest) = line.strip_prefix(key) {
                if let Some(value) = rest.strip_prefix('=') {
                    return Some(strip_quotes(value));
                }
            }
        }
        None
    }

    /// Look up the value for `key`, failing if it is absent.
    pub fn require(&self, key: &'static str) -> Result<&str, ReportError> {
        self.lookup(key).ok_or(ReportError::MissingKey(key))
    }
}

/// Strip one matching pair of surrounding single or double quotes.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}
