//! cli::args
//!
//! Command-line flag definitions using clap derive.
//!
//! # Flags
//!
//! The flag surface mirrors the legacy `lsb_release` command: one boolean
//! flag per reportable field, `--all` to force every field, and `--short`
//! to switch to the compact unlabeled rendering.
//!
//! Because `--version`/`-v` selects the version *field* (as in
//! `lsb_release`), clap's automatic version flag is disabled.

use clap::Parser;

use crate::report::ReportRequest;

/// Distid - an lsb_release-style distribution identity reporter
#[derive(Parser, Debug)]
#[command(name = "distid")]
#[command(author, about, disable_version_flag = true)]
#[command(long_about = "\
Provides lsb_release-like functionality for CentOS, Fedora, and RHEL.

Note that \"LSB Version\" is not provided; \"Version\" is provided in its
place in order to preserve the field counts and relative positioning of
lsb_release's output, particularly for the case of producing short output.

In the case of CentOS and Fedora the release is always returned (converted
to text; e.g., \"35\" is converted to \"Thirty Five\") as part of both the
description and codename rather than values dependent on the edition
(e.g., workstation or server) installed.")]
pub struct Cli {
    /// Report all information
    #[arg(short, long)]
    pub all: bool,

    /// Report the codename
    #[arg(short, long)]
    pub codename: bool,

    /// Report the description
    #[arg(short, long)]
    pub description: bool,

    /// Report the distributor ID
    #[arg(short, long)]
    pub id: bool,

    /// Report the release
    #[arg(short, long)]
    pub release: bool,

    /// Report the version
    #[arg(short, long)]
    pub version: bool,

    /// Use short output
    #[arg(short, long)]
    pub short: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Build the field-selection request from the parsed flags.
    ///
    /// `--all` forces every field; with no field flag at all the default is
    /// version only.
    pub fn request(&self) -> ReportRequest {
        ReportRequest::from_flags(
            self.all,
            self.codename,
            self.description,
            self.id,
            self.release,
            self.version,
            self.short,
        )
    }
}
