//! cli
//!
//! Command-line interface layer for Distid.
//!
//! # Responsibilities
//!
//! - Parse command-line flags
//! - Delegate to the report pipeline
//! - Print the finished report block to stdout
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses flags via clap, builds a
//! [`ReportRequest`], and runs the pipeline in [`crate::report`]. Either the
//! full requested report is printed or nothing is - on any error the process
//! exits non-zero with an empty stdout.

pub mod args;

pub use args::Cli;

use crate::report::{self, OsMetadata};
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let request = cli.request();

    let metadata = OsMetadata::load(&report::metadata::source_path())?;
    let deriver = report::resolve(metadata)?;
    let fields = deriver.derive_all()?;

    println!("{}", report::render(&fields, &request));
    Ok(())
}
