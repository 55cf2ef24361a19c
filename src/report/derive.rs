//! report::derive
//!
//! Family-specific derivation of the five reportable fields.
//!
//! # Design
//!
//! [`FieldDeriver`] is a trait whose default methods implement the shared
//! derivations; the three family types override only what differs:
//!
//! - [`CentOsDeriver`] appends the words-spelled release as a parenthetical
//!   to version and description, and uses it (spaces removed) as codename.
//! - [`FedoraDeriver`] replaces the existing parenthetical of version and
//!   description with the words-spelled release, and uses it (spaces
//!   removed) as codename.
//! - [`RhelDeriver`] uses the shared defaults unchanged.
//!
//! Each deriver owns an immutable [`OsMetadata`] snapshot; every derivation
//! is a pure function of that snapshot and is recomputed on each access.

use super::errors::ReportError;
use super::metadata::OsMetadata;
use super::words;

/// The five derived strings, in the order they are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub version: String,
    pub identifier: String,
    pub description: String,
    pub release: String,
    pub codename: String,
}

/// Per-family derivation of the reportable fields.
///
/// Default method bodies hold the behavior shared by all families; variants
/// override per the family rules described in the module docs.
pub trait FieldDeriver: std::fmt::Debug {
    /// The metadata snapshot this deriver was constructed from.
    fn metadata(&self) -> &OsMetadata;

    /// The reported version, from the raw `VERSION` value.
    fn version(&self) -> Result<String, ReportError> {
        Ok(self.metadata().require("VERSION")?.to_string())
    }

    /// The distributor ID, from `NAME` with a trailing "Linux" token
    /// removed and all whitespace stripped.
    ///
    /// The removal strips trailing characters drawn from the letter set of
    /// "Linux" rather than matching the whole word, so a name ending in a
    /// subset of those letters (e.g. "ux") is also truncated. This matches
    /// the legacy behavior and is preserved deliberately.
    fn identifier(&self) -> Result<String, ReportError> {
        let name = self.metadata().require("NAME")?;
        let stripped = name
            .trim_end_matches(&['L', 'i', 'n', 'u', 'x'][..])
            .trim();
        Ok(remove_whitespace(stripped))
    }

    /// The reported description, from the raw `PRETTY_NAME` value.
    fn description(&self) -> Result<String, ReportError> {
        Ok(self.metadata().require("PRETTY_NAME")?.to_string())
    }

    /// The reported release, the raw `VERSION_ID` value verbatim.
    fn release(&self) -> Result<String, ReportError> {
        Ok(self.metadata().require("VERSION_ID")?.to_string())
    }

    /// The codename, extracted from `VERSION`'s parenthetical with
    /// whitespace removed.
    fn codename(&self) -> Result<String, ReportError> {
        let version = self.metadata().require("VERSION")?;
        Ok(remove_whitespace(parenthetical(version)?))
    }

    /// Derive all five fields from the snapshot.
    fn derive_all(&self) -> Result<FieldSet, ReportError> {
        Ok(FieldSet {
            version: self.version()?,
            identifier: self.identifier()?,
            description: self.description()?,
            release: self.release()?,
            codename: self.codename()?,
        })
    }
}

/// Spell the numeric `VERSION_ID` release in English words.
///
/// Used by the CentOS and Fedora derivers. A `VERSION_ID` that is not a
/// whole number in `[0, 99]` (e.g. RHEL-style "9.4") is a
/// [`ReportError::Range`].
fn release_words(metadata: &OsMetadata) -> Result<String, ReportError> {
    let raw = metadata.require("VERSION_ID")?;
    let number: u32 = raw
        .parse()
        .map_err(|_| ReportError::Range(raw.to_string()))?;
    words::spell(number)
}

/// Extract the content of the first `(...)` pair in `value`.
///
/// Empty parentheses count as malformed, matching the legacy extraction.
fn parenthetical(value: &str) -> Result<&str, ReportError> {
    let (open, close) = paren_pair(value)?;
    let inner = &value[open + 1..close];
    if inner.is_empty() {
        return Err(ReportError::Format(value.to_string()));
    }
    Ok(inner)
}

/// Replace the content of the first `(...)` pair in `value` with
/// `replacement`, keeping everything outside the pair.
fn replace_parenthetical(value: &str, replacement: &str) -> Result<String, ReportError> {
    let (open, close) = paren_pair(value)?;
    Ok(format!(
        "{}{}{}",
        &value[..=open],
        replacement,
        &value[close..]
    ))
}

/// Locate the first `(` and the `)` following it.
fn paren_pair(value: &str) -> Result<(usize, usize), ReportError> {
    let open = value
        .find('(')
        .ok_or_else(|| ReportError::Format(value.to_string()))?;
    let close = value[open + 1..]
        .find(')')
        .map(|offset| open + 1 + offset)
        .ok_or_else(|| ReportError::Format(value.to_string()))?;
    Ok((open, close))
}

fn remove_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Deriver for CentOS: version and description gain a words parenthetical.
#[derive(Debug)]
pub struct CentOsDeriver {
    metadata: OsMetadata,
}

impl CentOsDeriver {
    pub fn new(metadata: OsMetadata) -> Self {
        Self { metadata }
    }
}

impl FieldDeriver for CentOsDeriver {
    fn metadata(&self) -> &OsMetadata {
        &self.metadata
    }

    fn version(&self) -> Result<String, ReportError> {
        Ok(format!(
            "{} ({})",
            self.metadata.require("VERSION")?,
            release_words(&self.metadata)?
        ))
    }

    fn description(&self) -> Result<String, ReportError> {
        Ok(format!(
            "{} ({})",
            self.metadata.require("PRETTY_NAME")?,
            release_words(&self.metadata)?
        ))
    }

    fn codename(&self) -> Result<String, ReportError> {
        Ok(remove_whitespace(&release_words(&self.metadata)?))
    }
}

/// Deriver for Fedora: the existing parentheticals of version and
/// description are replaced with the words-spelled release, so the output
/// does not depend on the edition (workstation, server) installed.
#[derive(Debug)]
pub struct FedoraDeriver {
    metadata: OsMetadata,
}

impl FedoraDeriver {
    pub fn new(metadata: OsMetadata) -> Self {
        Self { metadata }
    }
}

impl FieldDeriver for FedoraDeriver {
    fn metadata(&self) -> &OsMetadata {
        &self.metadata
    }

    fn version(&self) -> Result<String, ReportError> {
        let version = self.metadata.require("VERSION")?;
        replace_parenthetical(version, &release_words(&self.metadata)?)
    }

    fn description(&self) -> Result<String, ReportError> {
        let description = self.metadata.require("PRETTY_NAME")?;
        replace_parenthetical(description, &release_words(&self.metadata)?)
    }

    fn codename(&self) -> Result<String, ReportError> {
        Ok(remove_whitespace(&release_words(&self.metadata)?))
    }
}

/// Deriver for RHEL: the shared defaults apply unchanged.
#[derive(Debug)]
pub struct RhelDeriver {
    metadata: OsMetadata,
}

impl RhelDeriver {
    pub fn new(metadata: OsMetadata) -> Self {
        Self { metadata }
    }
}

impl FieldDeriver for RhelDeriver {
    fn metadata(&self) -> &OsMetadata {
        &self.metadata
    }
}
