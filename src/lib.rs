//! Distid - an lsb_release-style distribution identity reporter
//!
//! Distid is a single-binary tool that reports distribution-identity
//! information (version, distributor ID, description, release, codename)
//! derived from `/etc/os-release`, formatted to match the legacy
//! `lsb_release` command's output conventions.
//!
//! Note that "LSB Version" is not provided; "Version" is provided in its
//! place in order to preserve the field counts and relative positioning of
//! `lsb_release`'s output, particularly for the case of producing short
//! output.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses flags, delegates to the
//!   report pipeline)
//! - [`report`] - Core pipeline: metadata reading, family resolution, field
//!   derivation, and output formatting
//!
//! # Supported families
//!
//! Exactly three distribution families are recognized by their os-release
//! `ID` value: `centos`, `fedora`, and `rhel`. Any other value is a fatal
//! error - there is no fallback detection.
//!
//! # Data flow
//!
//! Data flows one way: metadata read -> family resolution -> field
//! derivation -> output formatting. Each deriver owns an immutable snapshot
//! of the raw metadata; no component mutates another's state.

pub mod cli;
pub mod report;
