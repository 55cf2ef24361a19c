//! report::family
//!
//! Distribution family resolution.
//!
//! # Design
//!
//! This module is the single dispatch point for family selection. The
//! os-release `ID` value is mapped via an exact-match table to one of the
//! three supported derivers; anything else fails closed with
//! [`ReportError::UnsupportedFamily`]. No other module inspects `ID`.

use super::derive::{CentOsDeriver, FedoraDeriver, FieldDeriver, RhelDeriver};
use super::errors::ReportError;
use super::metadata::OsMetadata;

/// The supported distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyKind {
    CentOs,
    Fedora,
    Rhel,
}

impl FamilyKind {
    /// Map an os-release `ID` value to a family, exact match only.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "centos" => Some(FamilyKind::CentOs),
            "fedora" => Some(FamilyKind::Fedora),
            "rhel" => Some(FamilyKind::Rhel),
            _ => None,
        }
    }

    /// The os-release `ID` value this family matches.
    pub fn id(&self) -> &'static str {
        match self {
            FamilyKind::CentOs => "centos",
            FamilyKind::Fedora => "fedora",
            FamilyKind::Rhel => "rhel",
        }
    }
}

/// Resolve the family from the metadata and construct its deriver.
///
/// The deriver takes ownership of the metadata snapshot. Fails with
/// [`ReportError::UnsupportedFamily`] for an unrecognized `ID` and
/// [`ReportError::MissingKey`] when no `ID` line exists at all.
pub fn resolve(metadata: OsMetadata) -> Result<Box<dyn FieldDeriver>, ReportError> {
    let id = metadata.require("ID")?.to_string();
    match FamilyKind::from_id(&id) {
        Some(FamilyKind::CentOs) => Ok(Box::new(CentOsDeriver::new(metadata))),
        Some(FamilyKind::Fedora) => Ok(Box::new(FedoraDeriver::new(metadata))),
        Some(FamilyKind::Rhel) => Ok(Box::new(RhelDeriver::new(metadata))),
        None => Err(ReportError::UnsupportedFamily(id)),
    }
}
