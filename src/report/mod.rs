//! report
//!
//! Core pipeline for assembling lsb_release-like output.
//!
//! # Architecture
//!
//! The pipeline has four stages, each in its own module:
//!
//! - [`metadata`] - Read `/etc/os-release` and expose `KEY=VALUE` lookup
//! - [`family`] - Resolve the distribution family from the `ID` key and
//!   construct the matching field deriver
//! - [`derive`] - Family-specific derivation of the five reportable fields
//! - [`format`] - Render the requested subset of fields as long or short
//!   output
//!
//! The [`words`] module provides the number-to-English-words conversion used
//! by the CentOS and Fedora derivers to synthesize codenames and
//! descriptions from the numeric release.
//!
//! # Invariants
//!
//! - Family dispatch happens exactly once, in [`family::resolve`]
//! - Derivers never mutate their metadata snapshot
//! - Output field order is fixed regardless of request order

pub mod derive;
pub mod errors;
pub mod family;
pub mod format;
pub mod metadata;
pub mod words;

pub use derive::{FieldDeriver, FieldSet};
pub use errors::ReportError;
pub use family::{resolve, FamilyKind};
pub use format::{render, ReportRequest};
pub use metadata::OsMetadata;
